//! Memoising wrapper around a [`TextSource`].

use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use lru::LruCache;

use super::TextSource;
use crate::error::FetchError;
use crate::types::TextItem;

/// Default lifetime of a cached fetch.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);
/// Default number of queries kept before the least recently used is evicted.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Debug)]
struct CacheEntry {
    fetched_at: Instant,
    items: Vec<TextItem>,
}

/// Caches successful fetches per query for a fixed TTL, holding at most
/// `capacity` queries.
///
/// Failed fetches are never cached, so the next call retries the inner source.
/// Expired entries are dropped when seen and before every insert.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    entries: Mutex<LruCache<String, CacheEntry>>,
}

impl<S: TextSource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self::with_capacity(inner, ttl, DEFAULT_CACHE_CAPACITY)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(inner: S, ttl: Duration, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            ttl,
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of cached queries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_fresh(&self, entry: &CacheEntry) -> bool {
        entry.fetched_at.elapsed() < self.ttl
    }

    fn evict_expired(&self, entries: &mut LruCache<String, CacheEntry>) {
        let expired: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| !self.is_fresh(entry))
            .map(|(query, _)| query.clone())
            .collect();
        for query in &expired {
            entries.pop(query);
        }
        if !expired.is_empty() {
            tracing::debug!(
                source = self.inner.name(),
                count = expired.len(),
                "evicted expired cache entries"
            );
        }
    }
}

impl<S: TextSource> TextSource for CachedSource<S> {
    fn fetch(&self, query: &str) -> Result<Vec<TextItem>, FetchError> {
        {
            let mut entries = self.lock();
            let cached = entries
                .get(query)
                .map(|entry| self.is_fresh(entry).then(|| entry.items.clone()));
            match cached {
                Some(Some(items)) => {
                    tracing::debug!(source = self.inner.name(), query, "cache hit");
                    return Ok(items);
                }
                Some(None) => {
                    entries.pop(query);
                }
                None => {}
            }
        }

        let items = self.inner.fetch(query)?;
        let mut entries = self.lock();
        self.evict_expired(&mut entries);
        entries.put(
            query.to_string(),
            CacheEntry {
                fetched_at: Instant::now(),
                items: items.clone(),
            },
        );
        Ok(items)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
