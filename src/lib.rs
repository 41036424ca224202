pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod formats;
pub mod generator;
pub mod logger;
pub mod plugin;
pub mod resolver;
pub mod staleness;

pub use codec::encode_webp;
pub use error::{ConvertError, Result};
pub use formats::{derived_artifact_path, is_derived_artifact, SourceFormat};
pub use generator::{generate_webp_files, ConversionReport, ConvertOptions};
pub use plugin::{HookPatterns, PatternSet, WebpPlugin};
pub use resolver::{resolve_pattern, SourceFile};
pub use staleness::needs_conversion;
