//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use labsite_data::{LoadError, SiteData};

use crate::assets::copy_assets;
use crate::components::ComponentStore;
use crate::fragments::Fragments;
use crate::location::{PageLocation, SUBPAGE_DIR};
use crate::pages::{PageAssembler, RenderedPage};
use crate::placeholders::unresolved_placeholders;

/// Data files, under the source directory.
pub const DATA_DIR: &str = "data";
/// Component fragments, under the source directory.
pub const COMPONENTS_DIR: &str = "components";
/// Page templates, under the source directory.
pub const TEMPLATES_DIR: &str = "templates";

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Source directory holding `data/`, `components/` and `templates/`
    pub src_dir: PathBuf,

    /// Output root; sub-pages go to `pages/` under it
    pub output_dir: PathBuf,

    /// Asset directories copied into the output root
    pub assets: Vec<PathBuf>,
}

impl BuildConfig {
    pub fn data_dir(&self) -> PathBuf {
        self.src_dir.join(DATA_DIR)
    }

    pub fn components_dir(&self) -> PathBuf {
        self.src_dir.join(COMPONENTS_DIR)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.src_dir.join(TEMPLATES_DIR)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            src_dir: PathBuf::from("src"),
            output_dir: PathBuf::from("."),
            assets: vec![],
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Written pages, relative to the output directory, in write order
    pub pages: Vec<PathBuf>,

    /// Number of asset files copied
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to read component {}: {source}", .path.display())]
    ReadComponent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy asset {}: {source}", .path.display())]
    CopyAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    store: ComponentStore,
}

impl SiteBuilder {
    /// Create a new builder.
    pub fn new(config: BuildConfig) -> Self {
        let store = ComponentStore::new(config.components_dir(), config.templates_dir());
        Self { config, store }
    }

    /// Build the site.
    ///
    /// Every page is rendered before the first one is written. A failed
    /// write stops the build and leaves earlier pages on disk.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let data = SiteData::load(&self.config.data_dir())?;
        let pages = self.render(&data)?;
        let written = self.write_pages(&pages)?;
        let assets = copy_assets(&self.config.assets, &self.config.output_dir)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: written,
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render all pages from already loaded data.
    pub fn render(&self, data: &SiteData) -> Result<Vec<RenderedPage>, BuildError> {
        let fragments = Fragments::new(&self.store, &data.site);
        PageAssembler::new(fragments, data).render_all()
    }

    /// Write rendered pages, root pages to the output root and sub-pages to
    /// `pages/`.
    fn write_pages(&self, pages: &[RenderedPage]) -> Result<Vec<PathBuf>, BuildError> {
        let mut written = Vec::with_capacity(pages.len());

        for page in pages {
            let relative = relative_output_path(page);
            let output_path = self.config.output_dir.join(&relative);

            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent).map_err(|source| BuildError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            fs::write(&output_path, &page.html).map_err(|source| BuildError::Write {
                path: output_path.clone(),
                source,
            })?;

            let leftover = unresolved_placeholders(&page.html);
            if !leftover.is_empty() {
                tracing::debug!(
                    "{} still contains placeholders: {}",
                    relative.display(),
                    leftover.join(", ")
                );
            }

            tracing::info!("Generated: {}", relative.display());
            written.push(relative);
        }

        Ok(written)
    }
}

fn relative_output_path(page: &RenderedPage) -> PathBuf {
    match page.location {
        PageLocation::Root => PathBuf::from(page.file_name),
        PageLocation::Subpage => Path::new(SUBPAGE_DIR).join(page.file_name),
    }
}
