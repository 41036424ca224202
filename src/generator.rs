use std::fs;
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::codec::encode_webp;
use crate::constants::{DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::error::{ConvertError, Result};
use crate::formats::derived_artifact_path;
use crate::resolver::resolve_pattern;
use crate::staleness::needs_conversion;
use crate::{error, info, verbose};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub quality: u8,
    pub skip_existing: bool,
}

impl ConvertOptions {
    pub fn new(quality: Option<u8>, skip_existing: bool) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(ConvertError::InvalidQuality(quality));
        }

        Ok(Self {
            quality,
            skip_existing,
        })
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            skip_existing: true,
        }
    }
}

/// Counters accumulated over one invocation and returned to the caller.
/// `total_files` counts every format-matching file the patterns resolved;
/// `processed_files` counts only the files actually (re)converted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub total_files: usize,
    pub processed_files: usize,
}

/// Runs the conversion pipeline over `patterns` in order. `mode` labels the
/// invocation context ("CLI", "Build Start", ...) in all output.
///
/// A failure while converting one file is reported and the loop moves on;
/// it never aborts sibling files or later patterns. Only a usage-level
/// problem (an invalid pattern) fails the whole run.
pub fn generate_webp_files(
    patterns: &[String],
    mode: &str,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let mut report = ConversionReport::default();

    for pattern in patterns {
        let sources = resolve_pattern(pattern)?;
        report.total_files += sources.len();

        info!(
            "🖼️  [{}] Found {} images in pattern: {}",
            mode,
            sources.len(),
            pattern
        );

        let progress = ProgressBar::new(sources.len() as u64);
        progress.set_style(ProgressStyle::default_bar());

        for source in &sources {
            match convert_source(&source.path, mode, options) {
                Ok(true) => report.processed_files += 1,
                Ok(false) => {}
                Err(e) => {
                    error!("[{}] Error processing {}: {}", mode, source.path.display(), e);
                }
            }
            progress.inc(1);
        }

        progress.finish_and_clear();
    }

    info!(
        "🎉 [{}] WebP generation completed! Processed {}/{} files.",
        mode, report.processed_files, report.total_files
    );

    Ok(report)
}

/// Converts a single source, returning whether an artifact was written.
/// Skips (Ok(false)) are silent successes: a path that stopped being a
/// regular file since the glob snapshot, or an artifact that is already up
/// to date.
fn convert_source(path: &Path, mode: &str, options: &ConvertOptions) -> Result<bool> {
    if !path.is_file() {
        // The path went away (or changed kind) since the glob snapshot.
        verbose!("[{}] Skipping {} (not a regular file)", mode, path.display());
        return Ok(false);
    }

    let artifact = derived_artifact_path(path);
    if !needs_conversion(path, &artifact, options.skip_existing)? {
        info!(
            "⏭️  [{}] Skipping {} (WebP is up to date)",
            mode,
            path.display()
        );
        return Ok(false);
    }

    if let Some(parent) = artifact.parent() {
        fs::create_dir_all(parent)
            .map_err(|_| ConvertError::DirectoryCreationFailed(parent.to_path_buf()))?;
    }

    let bytes = fs::read(path)?;
    let encoded = encode_webp(&bytes, options.quality)?;
    fs::write(&artifact, encoded)?;

    info!("✅ [{}] Generated: {}", mode, artifact.display());
    Ok(true)
}
