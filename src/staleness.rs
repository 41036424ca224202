use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

/// Decides whether `artifact` must be (re)generated from `source`.
///
/// With `skip_existing` disabled every file converts unconditionally.
/// Otherwise the artifact is trusted only when its mtime is strictly newer
/// than the source's; a missing artifact or an equal timestamp means
/// reconvert.
pub fn needs_conversion(source: &Path, artifact: &Path, skip_existing: bool) -> Result<bool> {
    if !skip_existing {
        return Ok(true);
    }

    let artifact_meta = match fs::metadata(artifact) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(true),
        Err(e) => return Err(e.into()),
    };

    // The source stat is only needed once the artifact is known to exist.
    let source_mtime = fs::metadata(source)?.modified()?;
    let artifact_mtime = artifact_meta.modified()?;

    Ok(artifact_mtime <= source_mtime)
}
