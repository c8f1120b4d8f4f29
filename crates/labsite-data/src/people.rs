//! Lab members and robots (`people.json`).

use serde::Deserialize;

/// Contents of `people.json`.
///
/// Each category is required, though it may be an empty list.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct People {
    pub director: Vec<Person>,
    pub phd_students: Vec<Person>,
    pub masters_students: Vec<Person>,
    pub collaborators: Vec<Person>,
    pub robots: Vec<Robot>,
}

/// A lab member.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub name: String,

    /// Role, e.g. "PhD Student"
    pub title: String,

    /// Home institution, shown only where the page asks for it
    #[serde(default)]
    pub affiliation: Option<String>,

    /// Root-relative path to the portrait
    pub image: String,

    /// Inline CSS applied to the portrait
    #[serde(default)]
    pub image_style: Option<String>,

    #[serde(default)]
    pub links: ProfileLinks,
}

/// Optional outbound links on a profile.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ProfileLinks {
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub scholar: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ProfileLinks {
    /// Homepage link, if set and non-empty.
    pub fn homepage(&self) -> Option<&str> {
        non_empty(&self.homepage)
    }

    /// Google Scholar link, if set and non-empty.
    pub fn scholar(&self) -> Option<&str> {
        non_empty(&self.scholar)
    }

    /// LinkedIn link, if set and non-empty.
    pub fn linkedin(&self) -> Option<&str> {
        non_empty(&self.linkedin)
    }

    /// Email address, if set and non-empty.
    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }
}

impl Person {
    /// Affiliation, if set and non-empty.
    pub fn affiliation(&self) -> Option<&str> {
        non_empty(&self.affiliation)
    }
}

/// A robot platform the lab works with.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Robot {
    pub name: String,
    pub manufacturer: String,

    /// Root-relative path to the photo
    pub image: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
