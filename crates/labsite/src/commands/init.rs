//! Scaffold a new site.

use std::path::PathBuf;

use anyhow::{Context, Result};
use labsite_static::scaffold::scaffold;

use crate::config::ConfigFile;

/// Run the init command.
pub fn run(file: ConfigFile, src: Option<PathBuf>, yes: bool) -> Result<()> {
    let src_dir = src.unwrap_or(file.paths.src);
    tracing::info!("Initializing site in {}...", src_dir.display());

    let report = scaffold(&src_dir, yes)
        .with_context(|| format!("Failed to scaffold {}", src_dir.display()))?;

    for path in &report.created {
        tracing::info!("Created {}", path.display());
    }
    if !report.skipped.is_empty() {
        tracing::warn!(
            "Kept {} existing files. Use --yes to overwrite.",
            report.skipped.len()
        );
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'labsite build' to generate the pages.");

    Ok(())
}
