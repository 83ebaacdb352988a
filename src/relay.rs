//! Image relay.
//!
//! The site's CDN rejects hotlinked requests, so page images are pulled
//! server-side and re-served from here. The handler in [`crate::api`]
//! decides how each failure maps onto an HTTP response; this module only
//! reports what the upstream did.

use crate::error::FetchError;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

/// An upstream image ready to re-serve.
pub struct RelayedImage {
    pub bytes: Vec<u8>,
    /// Upstream `Content-Type`, defaulted to `image/jpeg` when absent.
    pub content_type: String,
}

pub async fn fetch_image(client: &Client, url: &str) -> Result<RelayedImage, FetchError> {
    let response = client
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

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("image/jpeg")
        .to_string();

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Network {
            url: url.to_string(),
            source: e,
        })?
        .to_vec();

    Ok(RelayedImage {
        bytes,
        content_type,
    })
}
