use clap::Parser;

use crate::constants::DEFAULT_QUALITY;

#[derive(Parser)]
#[command(
    name = "webp-gen",
    about = "Generate WebP images from PNG/JPG files",
    long_about = "webp-gen expands one or more glob patterns, converts every PNG/JPEG source it \
                  finds to a WebP artifact stored alongside the source, and skips files whose \
                  artifact is already newer than the source.",
    version,
    after_help = "EXAMPLES:\n  \
    webp-gen \"src/images/**/*.png\"\n  \
    webp-gen \"assets/**/*.png\" \"public/**/*.jpg\"\n  \
    webp-gen --quality 90 \"images/**/*.jpg\"\n  \
    webp-gen --no-skip-existing \"assets/images/**/*.png\""
)]
pub struct Args {
    #[arg(
        required = true,
        help = "Image file patterns (glob patterns supported)",
        long_help = "One or more glob patterns naming the source images. \
                     Examples: 'assets/*.png', 'src/images/**/*.jpg'. \
                     Matches are filtered to PNG/JPEG files; generated .webp \
                     artifacts are never matched as sources."
    )]
    pub patterns: Vec<String>,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        help = "WebP quality (0-100)",
        long_help = "Codec compression level from 0 (smallest, lossiest) to 100. \
                     Values above 100 are rejected before any conversion starts."
    )]
    pub quality: u8,

    #[arg(
        long,
        help = "Regenerate existing WebP files",
        long_help = "Disables the staleness check: every matched file is reconverted \
                     even when an up-to-date artifact already exists."
    )]
    pub no_skip_existing: bool,

    #[arg(short = 'v', long, help = "Verbose output")]
    pub verbose: bool,
}
