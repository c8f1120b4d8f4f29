//! Where a page lives in the output tree, and how that shifts its links.

/// Sub-pages are written to this directory under the output root.
pub const SUBPAGE_DIR: &str = "pages";

/// Output location of the page being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLocation {
    /// Written at the output root, e.g. `index.html`
    Root,
    /// Written one level down, in `pages/`
    Subpage,
}

impl PageLocation {
    /// Resolve a root-relative path from the data files for this page.
    ///
    /// Sub-pages sit one directory down, so they get a `../` prefix.
    pub fn asset(self, path: &str) -> String {
        match self {
            PageLocation::Root => path.to_string(),
            PageLocation::Subpage => format!("../{}", path),
        }
    }

    /// Link back to the home page.
    pub fn home_link(self) -> &'static str {
        match self {
            PageLocation::Root => "index.html",
            PageLocation::Subpage => "../index.html",
        }
    }

    /// Stylesheet shared by every page.
    pub fn stylesheet(self) -> &'static str {
        match self {
            PageLocation::Root => "styles/stylesheet.css",
            PageLocation::Subpage => "../styles/stylesheet.css",
        }
    }

    /// Rewrite a navigation target.
    ///
    /// Navigation entries point from the root (`pages/news.html`); a sub-page
    /// already sits in `pages/`, so the directory is dropped.
    pub fn nav_href(self, href: &str) -> String {
        match self {
            PageLocation::Root => href.to_string(),
            PageLocation::Subpage => href.replace(&format!("{}/", SUBPAGE_DIR), ""),
        }
    }
}
