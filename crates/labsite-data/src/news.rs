//! Lab news (`news.json`).

use serde::Deserialize;

/// Contents of `news.json`, one list per category.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct News {
    pub awards: Vec<NewsItem>,
    pub events: Vec<NewsItem>,
    pub research: Vec<NewsItem>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewsItem {
    pub title: String,

    /// Free-form date text, displayed as-is
    pub date: String,

    /// HTML allowed
    pub description: String,

    /// Root-relative path to the illustration
    pub image: String,
}
