//! Conversion between display titles and URL slugs.
//!
//! `to_slug` is the canonical direction and is idempotent; `from_slug`
//! is a lossy best-effort inverse used only for display fallbacks.
//!
//! # Examples
//!
//! ```
//! use longbox::slug::{to_slug, from_slug};
//!
//! assert_eq!(to_slug("Invincible (2022)"), "invincible-2022");
//! assert_eq!(from_slug("doomsday-clock"), "Doomsday Clock");
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Matches a parenthesized year annotation: `(2022)`, `(2018-2023)`, `(2018-)`.
/// Only the first year is kept.
static YEAR_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*(\d{4})(?:\s*-\s*(\d{4})?)?\s*\)").unwrap());

static NON_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Turns a display title into a URL slug.
///
/// Year annotations collapse to the bare first year, then everything is
/// lower-cased and runs of non-alphanumerics become single hyphens.
pub fn to_slug(title: &str) -> String {
    let collapsed = YEAR_ANNOTATION.replace_all(title, "${1}");
    let lowered = collapsed.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Best-effort inverse of [`to_slug`]: hyphens become spaces and each
/// word gets an initial capital. Casing and punctuation are not recoverable.
pub fn from_slug(slug: &str) -> String {
    slug.replace('-', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
