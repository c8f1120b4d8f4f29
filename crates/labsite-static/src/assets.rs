//! Copying static asset directories into the output tree.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::builder::BuildError;

/// Copy each asset directory into `output_dir` under its own name.
///
/// Missing directories are skipped with a warning. A directory that already
/// is its own destination (building in place) is left alone. When the output
/// directory sits inside an asset directory, it is left out of the copy.
/// Returns the number of files copied.
pub fn copy_assets(sources: &[PathBuf], output_dir: &Path) -> Result<usize, BuildError> {
    if sources.is_empty() {
        return Ok(0);
    }

    let output_root = fs::create_dir_all(output_dir)
        .and_then(|_| fs::canonicalize(output_dir))
        .map_err(|e| BuildError::CopyAsset {
            path: output_dir.to_path_buf(),
            source: e,
        })?;
    let mut copied = 0;

    for source in sources {
        if !source.is_dir() {
            tracing::warn!("Asset directory not found: {}", source.display());
            continue;
        }

        let source = fs::canonicalize(source).map_err(|e| BuildError::CopyAsset {
            path: source.clone(),
            source: e,
        })?;

        let Some(name) = source.file_name() else {
            tracing::warn!("Asset directory has no name: {}", source.display());
            continue;
        };

        let target = output_root.join(name);
        if target == source {
            tracing::debug!("Assets already in place: {}", source.display());
            continue;
        }
        if output_root == source {
            tracing::warn!("Asset directory is the output directory: {}", source.display());
            continue;
        }

        let count = copy_dir(&source, &target, &output_root)?;
        tracing::info!("Copied {} files from {}", count, source.display());
        copied += count;
    }

    Ok(copied)
}

/// Recursively copy `source` to `target`, never descending into `skip`.
fn copy_dir(source: &Path, target: &Path, skip: &Path) -> Result<usize, BuildError> {
    let mut count = 0;

    let entries = WalkDir::new(source)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.path() != skip);

    for entry in entries {
        let entry = entry.map_err(|e| BuildError::CopyAsset {
            path: e.path().unwrap_or(source).to_path_buf(),
            source: e.into(),
        })?;

        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let destination = target.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&destination).map_err(|e| BuildError::CopyAsset {
                path: destination.clone(),
                source: e,
            })?;
        } else {
            fs::copy(entry.path(), &destination).map_err(|e| BuildError::CopyAsset {
                path: entry.path().to_path_buf(),
                source: e,
            })?;
            count += 1;
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn copies_nested_files() {
        let temp = tempdir().unwrap();
        let assets = temp.path().join("assets");
        let out = temp.path().join("out");
        fs::create_dir_all(assets.join("images/people")).unwrap();
        fs::write(assets.join("images/logo.png"), [0u8, 1, 2]).unwrap();
        fs::write(assets.join("images/people/a.png"), [3u8]).unwrap();

        let count = copy_assets(&[assets], &out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read(out.join("assets/images/logo.png")).unwrap(), vec![0u8, 1, 2]);
        assert!(out.join("assets/images/people/a.png").exists());
    }

    #[test]
    fn skips_missing_directory() {
        let temp = tempdir().unwrap();

        let count = copy_assets(&[temp.path().join("nope")], temp.path()).unwrap();

        assert_eq!(count, 0);
    }

    #[test]
    fn skips_directory_already_in_output() {
        let temp = tempdir().unwrap();
        let styles = temp.path().join("styles");
        fs::create_dir_all(&styles).unwrap();
        fs::write(styles.join("stylesheet.css"), "a {}").unwrap();

        let count = copy_assets(&[styles.clone()], temp.path()).unwrap();

        assert_eq!(count, 0);
        assert_eq!(fs::read_to_string(styles.join("stylesheet.css")).unwrap(), "a {}");
    }

    #[test]
    fn leaves_nested_output_directory_out_of_the_copy() {
        let temp = tempdir().unwrap();
        let site = temp.path().join("site");
        let out = site.join("public");
        fs::create_dir_all(&out).unwrap();
        fs::write(site.join("theme.css"), "a {}").unwrap();
        fs::write(out.join("index.html"), "<html></html>").unwrap();

        let count = copy_assets(&[site], &out).unwrap();

        assert_eq!(count, 1);
        assert_eq!(fs::read_to_string(out.join("site/theme.css")).unwrap(), "a {}");
        assert!(!out.join("site/public").exists());
    }

    #[test]
    fn skips_asset_directory_that_is_the_output() {
        let temp = tempdir().unwrap();
        let site = temp.path().join("site");
        fs::create_dir_all(&site).unwrap();
        fs::write(site.join("theme.css"), "a {}").unwrap();

        let count = copy_assets(&[site.clone()], &site).unwrap();

        assert_eq!(count, 0);
        assert!(!site.join("site").exists());
    }
}
