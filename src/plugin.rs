//! Build-lifecycle integration: the same pipeline exposed as a pre-build
//! and a post-bundle hook for embedding in a larger build tool.

use serde::Deserialize;

use crate::constants::DEFAULT_PLUGIN_PATTERN;
use crate::error::Result;
use crate::generator::{generate_webp_files, ConversionReport, ConvertOptions};

/// Pattern configuration accepted by the plugin: either a flat list or a
/// per-hook mapping. In configuration files the two shapes are
/// distinguished structurally (`["a/*.png"]` vs.
/// `{"buildStart": [...], "buildEnd": [...]}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PatternSet {
    Flat(Vec<String>),
    PerHook(HookPatterns),
}

impl Default for PatternSet {
    fn default() -> Self {
        PatternSet::Flat(vec![DEFAULT_PLUGIN_PATTERN.to_string()])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HookPatterns {
    #[serde(default)]
    pub build_start: Option<Vec<String>>,
    #[serde(default)]
    pub build_end: Option<Vec<String>>,
}

/// The hook pair. The pattern shape is resolved once at construction into
/// concrete per-hook lists; a flat list drives the pre-build hook only.
pub struct WebpPlugin {
    build_start: Vec<String>,
    build_end: Vec<String>,
    options: ConvertOptions,
}

impl WebpPlugin {
    pub fn new(patterns: PatternSet, options: ConvertOptions) -> Self {
        let (build_start, build_end) = match patterns {
            PatternSet::Flat(list) => (list, Vec::new()),
            PatternSet::PerHook(hooks) => (
                hooks.build_start.unwrap_or_default(),
                hooks.build_end.unwrap_or_default(),
            ),
        };

        Self {
            build_start,
            build_end,
            options,
        }
    }

    /// Fires before the build starts. Returns `None` when no patterns are
    /// configured for this hook.
    pub fn build_start(&self) -> Result<Option<ConversionReport>> {
        if self.build_start.is_empty() {
            return Ok(None);
        }
        generate_webp_files(&self.build_start, "Build Start", &self.options).map(Some)
    }

    /// Fires after the bundle closes. Returns `None` when no patterns are
    /// configured for this hook.
    pub fn close_bundle(&self) -> Result<Option<ConversionReport>> {
        if self.build_end.is_empty() {
            return Ok(None);
        }
        generate_webp_files(&self.build_end, "Build End", &self.options).map(Some)
    }
}

impl Default for WebpPlugin {
    fn default() -> Self {
        Self::new(PatternSet::default(), ConvertOptions::default())
    }
}
