//! Client for readcomicsonline.ru.
//!
//! Each method fetches one page and hands the body to [`crate::extract`];
//! parsing stays synchronous so the futures remain `Send`. The base URL
//! is injected so tests can point the client at a local stand-in.

use crate::error::FetchError;
use crate::extract;
use crate::models::{ComicDetail, ComicPage, ComicSearchResult, HotComic};
use crate::search::SuggestionSource;
use async_trait::async_trait;
use reqwest::Client;

/// Production base URL of the comics site.
pub const BASE_URL: &str = "https://readcomicsonline.ru";

pub struct ReadComics {
    client: Client,
    base_url: String,
}

impl ReadComics {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        ReadComics {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            source: e,
        })
    }

    /// Comics on the home page's update schedule.
    pub async fn hot_comics(&self) -> Result<Vec<HotComic>, FetchError> {
        let url = format!("{}/", self.base_url);
        let body = self.fetch_html(&url).await?;
        Ok(extract::hot_comics(&body))
    }

    /// Metadata and chapter list for one comic.
    pub async fn comic_detail(&self, slug: &str) -> Result<ComicDetail, FetchError> {
        let url = format!("{}/comic/{}", self.base_url, slug);
        let body = self.fetch_html(&url).await?;
        Ok(extract::comic_detail(&body, slug))
    }

    /// Page images for one chapter, in reading order.
    pub async fn chapter_pages(
        &self,
        slug: &str,
        chapter: &str,
    ) -> Result<Vec<ComicPage>, FetchError> {
        let url = format!("{}/comic/{}/{}", self.base_url, slug, chapter);
        let body = self.fetch_html(&url).await?;
        Ok(extract::chapter_pages(&body))
    }
}

#[async_trait]
impl SuggestionSource for ReadComics {
    async fn suggestions(&self, query: &str) -> Result<Vec<ComicSearchResult>, FetchError> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let body = response.text().await.map_err(|e| FetchError::Network {
            url: url.clone(),
            source: e,
        })?;

        Ok(extract::search_suggestions(&body)?)
    }
}
