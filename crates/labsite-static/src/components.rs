//! Reading HTML fragments and page templates from disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::BuildError;

/// Reusable HTML fragments in the components directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Header,
    Footer,
    PersonProfile,
    RobotProfile,
    NewsItem,
    SectionHeader,
}

impl Component {
    pub const ALL: [Component; 6] = [
        Component::Header,
        Component::Footer,
        Component::PersonProfile,
        Component::RobotProfile,
        Component::NewsItem,
        Component::SectionHeader,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Component::Header => "header.html",
            Component::Footer => "footer.html",
            Component::PersonProfile => "person-profile.html",
            Component::RobotProfile => "robot-profile.html",
            Component::NewsItem => "news-item.html",
            Component::SectionHeader => "section-header.html",
        }
    }
}

/// Page-level templates in the templates directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Base,
}

impl Template {
    pub fn file_name(self) -> &'static str {
        match self {
            Template::Base => "base.html",
        }
    }
}

/// Reads fragments on demand. Every call goes back to disk.
#[derive(Debug, Clone)]
pub struct ComponentStore {
    components_dir: PathBuf,
    templates_dir: PathBuf,
}

impl ComponentStore {
    pub fn new(components_dir: impl Into<PathBuf>, templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            components_dir: components_dir.into(),
            templates_dir: templates_dir.into(),
        }
    }

    /// Raw text of a component fragment.
    pub fn component(&self, component: Component) -> Result<String, BuildError> {
        read_fragment(&self.components_dir.join(component.file_name()))
    }

    /// Raw text of a page template.
    pub fn template(&self, template: Template) -> Result<String, BuildError> {
        read_fragment(&self.templates_dir.join(template.file_name()))
    }
}

fn read_fragment(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path).map_err(|source| BuildError::ReadComponent {
        path: path.to_path_buf(),
        source,
    })
}
