// Library interface for longbox
// This allows tests and external crates to use the scraper components

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod readcomics;
pub mod relay;
pub mod search;
pub mod slug;
