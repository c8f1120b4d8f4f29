//! Static site generator for the lab website.
//!
//! Assembles HTML pages from component fragments and the loaded site data,
//! then writes them to an output directory.

pub mod assets;
pub mod builder;
pub mod components;
pub mod fragments;
pub mod location;
pub mod pages;
pub mod placeholders;
pub mod scaffold;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use location::PageLocation;
pub use placeholders::{replace_placeholders, unresolved_placeholders, Placeholders};
