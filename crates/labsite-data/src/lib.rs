//! Data records for the lab website.
//!
//! This crate provides the typed shapes of `site.json`, `people.json` and
//! `news.json`, and the loader that reads them from a data directory.

pub mod loader;
pub mod news;
pub mod people;
pub mod site;

pub use loader::{load_json, LoadError, SiteData};
pub use news::{News, NewsItem};
pub use people::{People, Person, ProfileLinks, Robot};
pub use site::{Lab, Location, NavEntry, SiteConfig, SiteInfo};
