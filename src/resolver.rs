use std::path::PathBuf;

use glob::{glob_with, MatchOptions};

use crate::error::{ConvertError, Result};
use crate::formats::{is_derived_artifact, SourceFormat};

/// A resolved source path plus its extension-derived format. Exists only
/// while one pattern's matches are being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub format: SourceFormat,
}

/// Expands `pattern` against the filesystem and filters the matches down to
/// convertible sources: regular PNG/JPEG files that are not themselves
/// derived artifacts. A pattern that matches nothing yields an empty list,
/// not an error.
pub fn resolve_pattern(pattern: &str) -> Result<Vec<SourceFile>> {
    let match_options = MatchOptions {
        case_sensitive: false,
        ..MatchOptions::new()
    };
    let paths = glob_with(pattern, match_options).map_err(|source| ConvertError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut sources = Vec::new();
    // Unreadable entries inside the expansion are dropped silently.
    for path in paths.flatten() {
        if is_derived_artifact(&path) {
            continue;
        }
        // Keeps regular files only; a symlink to a file resolves, a
        // directory (or symlink to one) does not.
        if !path.is_file() {
            continue;
        }
        if let Some(format) = SourceFormat::from_path(&path) {
            sources.push(SourceFile { path, format });
        }
    }

    Ok(sources)
}
