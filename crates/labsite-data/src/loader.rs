//! Reading data files from disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::news::News;
use crate::people::People;
use crate::site::SiteConfig;

/// File name of the site metadata document.
pub const SITE_FILE: &str = "site.json";
/// File name of the people roster.
pub const PEOPLE_FILE: &str = "people.json";
/// File name of the news document.
pub const NEWS_FILE: &str = "news.json";

/// Errors that can occur when loading data files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and deserialize a JSON document.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// All data documents for one build.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteData {
    pub site: SiteConfig,
    pub people: People,
    pub news: News,
}

impl SiteData {
    /// Load `site.json`, `people.json` and `news.json` from a data directory.
    pub fn load(data_dir: &Path) -> Result<Self, LoadError> {
        let site = load_json(&data_dir.join(SITE_FILE))?;
        let people = load_json(&data_dir.join(PEOPLE_FILE))?;
        let news = load_json(&data_dir.join(NEWS_FILE))?;

        tracing::debug!("Loaded site data from {}", data_dir.display());

        Ok(Self { site, people, news })
    }
}
