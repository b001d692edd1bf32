//! Fetch boundary: where batches of raw text come from.
//!
//! The pipeline only sees [`TextSource`]. Upstream API payloads are decoded
//! from JSON documents on disk; issuing the HTTP requests that produce them
//! is left to the caller.

mod amazon;
mod cache;
mod clean;
mod g2;
mod newsapi;

pub use amazon::{decode_amazon_product, AmazonProduct};
pub use cache::{CachedSource, DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};
pub use clean::clean_items;
pub use g2::decode_g2_vendors;
pub use newsapi::decode_news;

use std::path::{Path, PathBuf};

use crate::error::FetchError;
use crate::types::TextItem;

/// Supplies the raw text items for one query.
pub trait TextSource {
    /// Fetch the batch for `query`, in upstream order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the upstream payload is unavailable or
    /// does not match its schema.
    fn fetch(&self, query: &str) -> Result<Vec<TextItem>, FetchError>;

    /// Short identifier used in log events.
    fn name(&self) -> &'static str;
}

/// Upstream payload shapes understood by [`PayloadSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// NewsAPI `/v2/everything` response: headline titles with timestamps.
    News,
    /// RapidAPI Amazon `product-details` response: review bodies.
    AmazonProduct,
    /// RapidAPI G2 `vendor/autocomplete` response: vendor names.
    G2Vendors,
}

impl PayloadKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadKind::News => "newsapi",
            PayloadKind::AmazonProduct => "amazon",
            PayloadKind::G2Vendors => "g2",
        }
    }

    /// Decode a payload of this kind into text items, in upstream order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Schema`] or [`FetchError::Upstream`].
    pub fn decode(self, json: &str) -> Result<Vec<TextItem>, FetchError> {
        match self {
            PayloadKind::News => decode_news(json),
            PayloadKind::AmazonProduct => decode_amazon_product(json).map(|p| p.reviews),
            PayloadKind::G2Vendors => decode_g2_vendors(json),
        }
    }
}

impl std::fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads saved upstream payloads from disk.
///
/// When `path` is a directory, each query maps to `<path>/<slug>.json`, with
/// the blank query mapping to `general.json`. Otherwise `path` is read for
/// every query.
#[derive(Debug, Clone)]
pub struct PayloadSource {
    kind: PayloadKind,
    path: PathBuf,
}

impl PayloadSource {
    pub fn new(kind: PayloadKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PayloadKind {
        self.kind
    }

    /// Path of the payload document for `query`.
    #[must_use]
    pub fn resolve(&self, query: &str) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(format!("{}.json", query_slug(query)))
        } else {
            self.path.clone()
        }
    }

    /// Raw payload text for `query`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Io`] if the document cannot be read.
    pub fn read(&self, query: &str) -> Result<String, FetchError> {
        let path = self.resolve(query);
        read_payload(&path)
    }

    /// Read and decode the Amazon product payload for `query` in one pass:
    /// the title and the cleaned reviews come from the same document.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the document cannot be read or decoded.
    pub fn fetch_product(&self, query: &str) -> Result<AmazonProduct, FetchError> {
        let json = self.read(query)?;
        let mut product = decode_amazon_product(&json)?;
        product.reviews = clean_items(product.reviews);
        Ok(product)
    }
}

impl TextSource for PayloadSource {
    fn fetch(&self, query: &str) -> Result<Vec<TextItem>, FetchError> {
        let json = self.read(query)?;
        let items = self.kind.decode(&json)?;
        Ok(clean_items(items))
    }

    fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

fn read_payload(path: &Path) -> Result<String, FetchError> {
    std::fs::read_to_string(path).map_err(|e| FetchError::Io {
        path: path.display().to_string(),
        source: e,
    })
}

/// File-name-safe slug for a query. The blank query is `general`.
#[must_use]
pub fn query_slug(query: &str) -> String {
    let slug = query
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else if c.is_whitespace() || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "general".to_string()
    } else {
        slug
    }
}
