//! Title search with fallback strategies.
//!
//! The site's suggestion endpoint only matches close to exactly, so a
//! reader-supplied title like "Doomsday Clock (2017)" often misses.
//! Resolution walks a fixed strategy chain, querying once per candidate
//! and stopping at the first strategy that yields any results:
//!
//! 1. the title exactly as given,
//! 2. the title with its year annotation stripped,
//! 3. the longest word of the title, if it is long enough to be
//!    distinctive.
//!
//! A failed request does not abort the chain; the error is logged and
//! the next strategy runs.

use crate::error::FetchError;
use crate::models::ComicSearchResult;
use crate::slug::to_slug;
use async_trait::async_trait;
use log::{debug, error};
use regex::Regex;
use std::sync::LazyLock;

/// Anything that can answer a suggestion query. The live site
/// implements this; tests substitute canned responders.
#[async_trait]
pub trait SuggestionSource {
    async fn suggestions(&self, query: &str) -> Result<Vec<ComicSearchResult>, FetchError>;
}

static YEAR_ANNOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(\d{4}(?:\s*-\s*)?(?:\d{4})?\)\s*").unwrap());

type Strategy = fn(&str) -> Option<String>;

const STRATEGIES: [(&str, Strategy); 3] = [
    ("exact", exact),
    ("year-stripped", strip_year),
    ("significant-word", significant_word),
];

fn exact(title: &str) -> Option<String> {
    Some(title.to_string())
}

/// Drops "(2017)", "(2016-2017)" and the dangling "(2016-)" form. Skipped
/// when the title carries no year, so the exact query is not repeated.
fn strip_year(title: &str) -> Option<String> {
    let stripped = YEAR_ANNOTATION.replace_all(title, "").to_string();
    if stripped == title {
        None
    } else {
        Some(stripped)
    }
}

/// Picks the longest word of a multi-word title. Ties keep the earliest
/// word; anything of four letters or fewer is too generic to query.
fn significant_word(title: &str) -> Option<String> {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() < 2 {
        return None;
    }
    let longest = words
        .iter()
        .copied()
        .reduce(|best, word| {
            if word.chars().count() > best.chars().count() {
                word
            } else {
                best
            }
        })?;
    if longest.chars().count() > 3 {
        Some(longest.to_string())
    } else {
        None
    }
}

/// Resolves a title against `source`, returning the first strategy's
/// hits with their `data` normalized into a route-ready slug. An empty
/// vec means every strategy came back empty or failed.
pub async fn resolve(
    source: &impl SuggestionSource,
    title: &str,
) -> Vec<ComicSearchResult> {
    for (name, strategy) in STRATEGIES {
        let candidate = match strategy(title) {
            Some(candidate) => candidate,
            None => continue,
        };

        match source.suggestions(&candidate).await {
            Ok(results) if !results.is_empty() => {
                debug!("Search strategy '{}' matched '{}'", name, candidate);
                return results
                    .into_iter()
                    .map(|mut r| {
                        r.data = to_slug(&r.data);
                        r
                    })
                    .collect();
            }
            Ok(_) => continue,
            Err(e) => {
                error!("Error searching comics for '{}': {}", candidate, e);
                continue;
            }
        }
    }

    Vec::new()
}
