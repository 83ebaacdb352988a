//! Application state for the Actix-web server
//!
//! This module defines the shared state used across all HTTP handlers.
//! The `AppState` struct is wrapped in `web::Data` and cloned into each
//! worker; everything in it is immutable after startup.

use crate::config::Config;
use crate::readcomics::ReadComics;
use reqwest::Client;

/// Shared application state for Actix-web handlers
pub struct AppState {
    /// Client for the comics site's pages and search endpoint
    pub site: ReadComics,
    /// Standard reqwest HTTP client, used directly by the image relay
    pub client: Client,
    /// Application configuration
    pub config: Config,
}
