use proptest::prelude::*;
use std::path::{Path, PathBuf};
use webp_gen::formats::{derived_artifact_path, is_derived_artifact, SourceFormat};
use webp_gen::generator::ConvertOptions;
use webp_gen::staleness::needs_conversion;

proptest! {
    #[test]
    fn convert_options_quality_in_range(quality in 0u8..=100u8) {
        let options = ConvertOptions::new(Some(quality), true);
        prop_assert!(options.is_ok());
    }

    #[test]
    fn convert_options_quality_out_of_range(quality in 101u8..=255u8) {
        let options = ConvertOptions::new(Some(quality), true);
        prop_assert!(options.is_err());
    }

    #[test]
    fn artifact_path_appends_webp_suffix(name in "[a-zA-Z0-9_-]{1,20}\\.(png|jpg|jpeg)") {
        let artifact = derived_artifact_path(Path::new(&name));
        let artifact_name = artifact.file_name().unwrap().to_str().unwrap();

        // The full source filename, extension included, stays in place.
        prop_assert!(artifact_name.starts_with(&name));
        prop_assert!(artifact_name.ends_with(".webp"));
    }

    #[test]
    fn artifact_paths_are_never_resolved_as_sources(name in "[a-zA-Z0-9_-]{1,20}\\.(png|jpg|jpeg)") {
        let artifact = derived_artifact_path(Path::new(&name));
        prop_assert!(is_derived_artifact(&artifact));
        prop_assert!(SourceFormat::from_path(&artifact).is_none());
    }

    #[test]
    fn source_format_is_case_insensitive(
        base in "[a-z]{1,10}",
        ext in prop::sample::select(&["png", "PNG", "Png", "jpg", "JPG", "jpeg", "JPEG"])
    ) {
        let path = PathBuf::from(format!("{base}.{ext}"));
        prop_assert!(SourceFormat::from_path(&path).is_some());
    }

    #[test]
    fn unsupported_extensions_have_no_source_format(
        ext in prop::sample::select(&["gif", "bmp", "tiff", "webp", "txt", "svg", "avif"])
    ) {
        let path = PathBuf::from(format!("image.{ext}"));
        prop_assert!(SourceFormat::from_path(&path).is_none());
    }

    #[test]
    fn skip_existing_disabled_is_always_stale(name in "[a-zA-Z0-9_-]{1,20}") {
        // No filesystem access happens on this path, so arbitrary
        // nonexistent files must still report stale.
        let source = PathBuf::from(format!("/nonexistent/{name}.png"));
        let artifact = derived_artifact_path(&source);
        prop_assert!(needs_conversion(&source, &artifact, false).unwrap());
    }
}
