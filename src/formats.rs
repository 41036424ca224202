//! Source format detection and derived-artifact naming.
//!
//! The pipeline converts PNG and JPEG sources only; every artifact is named
//! by appending `.webp` to the full source filename, so the original
//! extension stays visible in the artifact name.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::constants::WEBP_SUFFIX;

/// Formats accepted as conversion sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Jpeg,
}

impl SourceFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "png" => Some(SourceFormat::Png),
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|s| s.to_str())
            .and_then(Self::from_extension)
    }
}

/// Appends `.webp` to the full source filename: `photo.png` becomes
/// `photo.png.webp`. The source extension is preserved, not replaced.
pub fn derived_artifact_path(source: &Path) -> PathBuf {
    let mut name = OsString::from(source.as_os_str());
    name.push(WEBP_SUFFIX);
    PathBuf::from(name)
}

/// True for previously generated artifacts (`*.webp`) and anything derived
/// from one (`*.webp.*`), so they are never matched as sources again.
pub fn is_derived_artifact(path: &Path) -> bool {
    let name = match path.file_name().and_then(|s| s.to_str()) {
        Some(name) => name.to_lowercase(),
        None => return false,
    };
    name.ends_with(WEBP_SUFFIX) || name.contains(".webp.")
}
