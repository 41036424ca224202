use std::env;
use std::process;

use anyhow::Context;
use clap::Parser;

use webp_gen::cli::Args;
use webp_gen::generator::{generate_webp_files, ConvertOptions};
use webp_gen::logger;
use webp_gen::{error, info};

fn main() {
    let args = Args::parse();
    logger::set_verbose_mode(args.verbose);

    if let Err(e) = run(args) {
        error!("WebP generation failed: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    info!("🚀 Starting WebP generation...");

    let options = ConvertOptions::new(Some(args.quality), !args.no_skip_existing)?;

    if args.verbose {
        let cwd = env::current_dir().context("failed to resolve working directory")?;
        info!("📝 Configuration:");
        info!("  Patterns: {}", args.patterns.join(", "));
        info!("  Quality: {}", options.quality);
        info!("  Skip existing: {}", options.skip_existing);
        info!("  Working directory: {}", cwd.display());
    }

    generate_webp_files(&args.patterns, "CLI", &options)?;

    info!("✨ All WebP generation tasks completed!");
    Ok(())
}
