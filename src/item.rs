//! Headline items and batch preparation.
//!
//! Items arrive from an upstream scraper as `(title, href)` pairs. Batch
//! preparation trims titles, resolves relative links against the source's
//! base URL and caps the batch size; nothing else about the source is assumed.

use serde::{Deserialize, Serialize};

/// Largest batch the upstream step hands to the pipeline.
pub const MAX_BATCH: usize = 20;

/// Base URL that relative BBC News links are resolved against.
pub const BBC_NEWS_BASE: &str = "https://www.bbc.com/news";

/// A headline and the page it links to.
///
/// Identity is the item's position in its batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Headline text. May be empty.
    #[serde(default)]
    pub title: String,
    /// Absolute link to the article.
    #[serde(default)]
    pub link: String,
}

impl Item {
    /// Create an item.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }

    /// Resolve `href` against `base` unless it is already absolute.
    ///
    /// Relative links are appended verbatim, so `"/world-123"` under
    /// `https://www.bbc.com/news` becomes `https://www.bbc.com/news/world-123`.
    pub fn resolve_link(base: &str, href: &str) -> String {
        if href.starts_with("http") {
            href.to_string()
        } else {
            format!("{base}{href}")
        }
    }
}

/// Turn raw `(title, href)` pairs into at most `limit` items.
///
/// Titles are trimmed, links resolved with [`Item::resolve_link`]. Order is
/// preserved; pairs past `limit` are dropped.
pub fn prepare_batch<I, T, H>(raw: I, base: &str, limit: usize) -> Vec<Item>
where
    I: IntoIterator<Item = (T, H)>,
    T: AsRef<str>,
    H: AsRef<str>,
{
    raw.into_iter()
        .take(limit)
        .map(|(title, href)| {
            Item::new(
                title.as_ref().trim(),
                Item::resolve_link(base, href.as_ref()),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_relative_and_absolute_links() {
        assert_eq!(
            Item::resolve_link(BBC_NEWS_BASE, "/world-123"),
            "https://www.bbc.com/news/world-123"
        );
        assert_eq!(
            Item::resolve_link(BBC_NEWS_BASE, "https://example.org/a"),
            "https://example.org/a"
        );
    }

    #[test]
    fn prepare_batch_trims_and_caps() {
        let raw: Vec<(String, String)> = (0..30)
            .map(|i| (format!("  Headline {i}\n"), format!("/story-{i}")))
            .collect();

        let batch = prepare_batch(raw, BBC_NEWS_BASE, MAX_BATCH);

        assert_eq!(batch.len(), MAX_BATCH);
        assert_eq!(batch[0].title, "Headline 0");
        assert_eq!(batch[19].link, "https://www.bbc.com/news/story-19");
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let item: Item = serde_json::from_str(r#"{"link": "u1"}"#).unwrap();
        assert_eq!(item, Item::new("", "u1"));
    }
}
