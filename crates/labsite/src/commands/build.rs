//! Static site build command.

use std::path::PathBuf;

use anyhow::Result;
use labsite_static::{BuildConfig, SiteBuilder};

use crate::config::ConfigFile;

/// Merge command-line overrides into the file configuration.
fn build_config(file: ConfigFile, output: Option<PathBuf>, src: Option<PathBuf>) -> BuildConfig {
    BuildConfig {
        src_dir: src.unwrap_or(file.paths.src),
        output_dir: output.unwrap_or(file.paths.output),
        assets: file.build.assets,
    }
}

/// Run the build command.
pub fn run(file: ConfigFile, output: Option<PathBuf>, src: Option<PathBuf>) -> Result<()> {
    let config = build_config(file, output, src);
    tracing::debug!("Building from {}", config.src_dir.display());

    let result = SiteBuilder::new(config).build()?;

    tracing::info!("Site generation completed successfully!");
    tracing::debug!(
        "Wrote {} pages and {} assets to {} in {}ms",
        result.pages.len(),
        result.assets,
        result.output_dir.display(),
        result.duration_ms
    );

    Ok(())
}
