pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 0;
pub const MAX_QUALITY: u8 = 100;

/// Extensions accepted as conversion sources (matched case-insensitively).
pub const SUPPORTED_SOURCE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Suffix appended to a source path to name its derived artifact.
pub const WEBP_SUFFIX: &str = ".webp";

/// Pattern the build-lifecycle plugin falls back to when none is configured.
pub const DEFAULT_PLUGIN_PATTERN: &str = "assets/images/**/*";
