//! Site-wide metadata (`site.json`).

use serde::Deserialize;

/// Contents of `site.json`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteConfig {
    /// Title, logo and outbound links
    pub site: SiteInfo,

    /// Top navigation entries, in display order
    pub navigation: Vec<NavEntry>,

    /// Lab description and location
    pub lab: Lab,
}

/// Branding for the whole site.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SiteInfo {
    /// Title used for the home page
    pub title: String,

    /// Root-relative path to the logo image
    pub logo: String,

    /// Root-relative path to the favicon
    pub favicon: String,

    /// GitHub organization link shown in the header
    pub github: String,
}

/// A navigation bar entry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NavEntry {
    pub label: String,

    /// Root-relative link target (e.g. `pages/people.html`)
    pub href: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lab {
    /// Home page blurb
    pub description: String,

    pub location: Location,

    /// Research page blurb
    pub research_description: String,
}

/// Where to find the lab.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub map_link: String,

    /// Lab room
    pub lab: String,

    /// Office room
    pub office: String,
}
