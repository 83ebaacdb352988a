//! Wire records served by the API. Field names mirror the JSON the
//! reader frontend consumes, hence the camelCase renames.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotComic {
    pub title: String,
    /// Link attribute exactly as scraped from the site.
    pub url_raw: String,
    /// Internal route, derived from the last path segment of `url_raw`.
    pub url: String,
    pub image: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ComicSearchResult {
    pub title: String,
    pub url: String,
    /// The site's own identifier for the comic, slug-normalized.
    pub data: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub title: String,
    pub url_raw: String,
    pub url: String,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComicDetail {
    pub title: String,
    pub image: String,
    #[serde(rename = "type")]
    pub comic_type: String,
    pub status: String,
    pub other_name: String,
    pub authors: Vec<Author>,
    pub date_release: String,
    pub categories: Vec<Category>,
    pub views: String,
    pub description: String,
    /// Kept in the site's DOM order, never renumbered.
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ComicPage {
    pub image: String,
}
