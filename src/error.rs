//! Error types for fetching and extraction.
//!
//! These are internal: the HTTP facade collapses every failure into the
//! empty/null contract the frontend expects, so the variants here exist
//! for logging and for the relay's status forwarding.

use thiserror::Error;

/// A payload that could not be decoded into structured records.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The suggestion endpoint returned something other than its JSON schema.
    #[error("malformed suggestion payload: {0}")]
    SuggestionPayload(#[from] serde_json::Error),
}

/// A failed round trip to the comics site.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never completed (connect error, timeout, bad URL).
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The site answered with a non-success status.
    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The site answered 2xx but the body was not decodable.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
