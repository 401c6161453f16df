// SPDX-License-Identifier: MPL-2.0
//! Thumbnail cache shared by every tile of the gallery.
//!
//! # Design
//!
//! - **URL-keyed**: entries are indexed by the photo's thumbnail URL, so two
//!   photos sharing a URL share one load
//! - **In-flight tracking**: a `Loading` entry is inserted before a request
//!   starts, which prevents the same URL from being requested twice
//! - **LRU eviction**: least recently touched entries are evicted once the
//!   entry limit is reached. [`ThumbnailCache::reserve`] raises the limit to
//!   cover the current gallery, so only entries outside it are evicted
//!
//! # Usage
//!
//! ```ignore
//! let mut cache = ThumbnailCache::with_defaults();
//!
//! cache.reserve(tree.tiles().map(|t| t.image_url.as_str()));
//! for url in cache.urls_to_load(tree.tiles().map(|t| t.image_url.as_str())) {
//!     cache.begin_load(&url);
//!     // spawn load task ...
//! }
//!
//! // later, when the task completes
//! cache.finish_load(&url, result);
//! ```

use super::ThumbnailData;
use crate::error::Error;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default maximum number of cached thumbnails.
pub const DEFAULT_MAX_THUMBNAILS: usize = 512;

/// Minimum number of cached thumbnails.
pub const MIN_MAX_THUMBNAILS: usize = 16;

/// Maximum number of cached thumbnails.
pub const MAX_MAX_THUMBNAILS: usize = 4096;

/// Configuration for the thumbnail cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailCacheConfig {
    /// Maximum number of entries (loading, ready or failed).
    pub max_entries: usize,
}

impl Default for ThumbnailCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_THUMBNAILS,
        }
    }
}

impl ThumbnailCacheConfig {
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries: max_entries.clamp(MIN_MAX_THUMBNAILS, MAX_MAX_THUMBNAILS),
        }
    }
}

/// Load state of one thumbnail URL.
#[derive(Debug, Clone)]
pub enum ThumbnailState {
    Loading,
    Ready(ThumbnailData),
    Failed(Error),
}

impl ThumbnailState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ThumbnailState::Loading)
    }
}

/// Statistics about cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Loads started.
    pub requests: u64,
    /// Loads that produced an image.
    pub loaded: u64,
    /// Loads that failed.
    pub failed: u64,
    /// Entries evicted due to the entry limit.
    pub evictions: u64,
}

/// LRU cache of thumbnail load states.
pub struct ThumbnailCache {
    cache: LruCache<String, ThumbnailState>,
    config: ThumbnailCacheConfig,
    stats: CacheStats,
}

impl ThumbnailCache {
    /// Creates a new cache with the given configuration.
    #[must_use]
    pub fn new(config: ThumbnailCacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(NonZeroUsize::MIN);

        Self {
            cache: LruCache::new(capacity),
            config,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ThumbnailCacheConfig::default())
    }

    /// Returns the state for `url` without touching LRU order.
    ///
    /// Used from view code, which only has shared access.
    #[must_use]
    pub fn state(&self, url: &str) -> Option<&ThumbnailState> {
        self.cache.peek(url)
    }

    /// Returns the URLs among `urls` that have no entry yet, without duplicates
    /// and in first-seen order.
    #[must_use]
    pub fn urls_to_load<'a>(&self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut seen = HashSet::new();
        urls.into_iter()
            .filter(|url| !self.cache.contains(*url) && seen.insert(*url))
            .map(str::to_string)
            .collect()
    }

    /// Marks `url` as loading.
    ///
    /// Returns `false` if the URL already has an entry, in which case no new
    /// load should be started.
    pub fn begin_load(&mut self, url: &str) -> bool {
        if self.cache.contains(url) {
            self.cache.promote(url);
            return false;
        }

        self.put(url.to_string(), ThumbnailState::Loading);
        self.stats.requests += 1;
        true
    }

    /// Stores the outcome of a load started with [`Self::begin_load`].
    ///
    /// Results for URLs that no longer have an entry (cleared or evicted) are
    /// dropped, so a late result never pushes out a current entry.
    pub fn finish_load(&mut self, url: &str, result: Result<ThumbnailData, Error>) {
        let Some(entry) = self.cache.get_mut(url) else {
            return;
        };
        *entry = match result {
            Ok(data) => {
                self.stats.loaded += 1;
                ThumbnailState::Ready(data)
            }
            Err(err) => {
                self.stats.failed += 1;
                ThumbnailState::Failed(err)
            }
        };
    }

    /// Keeps every URL in `urls` resident.
    ///
    /// The capacity becomes the larger of the configured limit and the number
    /// of distinct URLs, and the listed entries are promoted so that later
    /// loads only evict entries outside `urls`.
    pub fn reserve<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) {
        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url) {
                self.cache.promote(url);
            }
        }

        let needed = seen.len().max(self.config.max_entries);
        if needed != self.cache.cap().get() {
            if let Some(capacity) = NonZeroUsize::new(needed) {
                self.cache.resize(capacity);
            }
        }
    }

    /// Current entry limit, which may exceed the configured one after
    /// [`Self::reserve`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Drops failed entries so that they are requested again.
    ///
    /// Returns the number of entries removed.
    pub fn clear_failed(&mut self) -> usize {
        let failed: Vec<String> = self
            .cache
            .iter()
            .filter(|(_, state)| matches!(state, ThumbnailState::Failed(_)))
            .map(|(url, _)| url.clone())
            .collect();
        for url in &failed {
            self.cache.pop(url);
        }
        failed.len()
    }

    /// Number of entries still waiting for a result.
    #[must_use]
    pub fn loading_count(&self) -> usize {
        self.cache.iter().filter(|(_, state)| state.is_loading()).count()
    }

    fn put(&mut self, url: String, state: ThumbnailState) {
        if let Some((evicted_url, _)) = self.cache.push(url.clone(), state) {
            if evicted_url != url {
                self.stats.evictions += 1;
            }
        }
    }

    /// Clears all entries.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn config(&self) -> &ThumbnailCacheConfig {
        &self.config
    }
}

impl Default for ThumbnailCache {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ThumbnailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailCache")
            .field("entries", &self.cache.len())
            .field("max_entries", &self.config.max_entries)
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_thumbnail() -> ThumbnailData {
        ThumbnailData::from_rgba(2, 2, vec![0u8; 16])
    }

    #[test]
    fn config_clamps_entry_limit() {
        assert_eq!(ThumbnailCacheConfig::new(0).max_entries, MIN_MAX_THUMBNAILS);
        assert_eq!(
            ThumbnailCacheConfig::new(1_000_000).max_entries,
            MAX_MAX_THUMBNAILS
        );
        assert_eq!(ThumbnailCacheConfig::new(100).max_entries, 100);
    }

    #[test]
    fn begin_load_only_once_per_url() {
        let mut cache = ThumbnailCache::with_defaults();

        assert!(cache.begin_load("u1"));
        assert!(!cache.begin_load("u1"));
        assert!(cache.state("u1").is_some_and(ThumbnailState::is_loading));
        assert_eq!(cache.stats().requests, 1);
        assert_eq!(cache.loading_count(), 1);
    }

    #[test]
    fn finish_load_stores_ready_and_failed_states() {
        let mut cache = ThumbnailCache::with_defaults();
        cache.begin_load("ok");
        cache.begin_load("bad");

        cache.finish_load("ok", Ok(sample_thumbnail()));
        cache.finish_load("bad", Err(Error::Fetch("404".into())));

        assert!(matches!(cache.state("ok"), Some(ThumbnailState::Ready(_))));
        assert!(matches!(cache.state("bad"), Some(ThumbnailState::Failed(_))));
        assert_eq!(cache.loading_count(), 0);
        assert_eq!(cache.stats().loaded, 1);
        assert_eq!(cache.stats().failed, 1);
    }

    #[test]
    fn urls_to_load_skips_known_and_duplicate_urls() {
        let mut cache = ThumbnailCache::with_defaults();
        cache.begin_load("known");

        let urls = cache.urls_to_load(["a", "known", "b", "a"]);
        assert_eq!(urls, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn clear_failed_allows_retry() {
        let mut cache = ThumbnailCache::with_defaults();
        cache.begin_load("bad");
        cache.finish_load("bad", Err(Error::Decode("garbage".into())));
        cache.begin_load("ok");
        cache.finish_load("ok", Ok(sample_thumbnail()));

        assert_eq!(cache.clear_failed(), 1);
        assert!(cache.state("bad").is_none());
        assert!(cache.state("ok").is_some());
        assert!(cache.begin_load("bad"));
    }

    #[test]
    fn lru_eviction_on_entry_limit() {
        let mut cache = ThumbnailCache::new(ThumbnailCacheConfig::new(MIN_MAX_THUMBNAILS));

        for i in 0..MIN_MAX_THUMBNAILS {
            cache.begin_load(&format!("u{i}"));
        }
        // Touch the oldest entry so it survives the next insertion
        assert!(!cache.begin_load("u0"));
        cache.begin_load("overflow");

        assert_eq!(cache.len(), MIN_MAX_THUMBNAILS);
        assert!(cache.state("u0").is_some());
        assert!(cache.state("u1").is_none());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn finishing_existing_entry_is_not_an_eviction() {
        let mut cache = ThumbnailCache::with_defaults();
        cache.begin_load("u");
        cache.finish_load("u", Ok(sample_thumbnail()));
        assert_eq!(cache.stats().evictions, 0);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn late_result_for_evicted_url_is_dropped() {
        let mut cache = ThumbnailCache::with_defaults();
        cache.finish_load("gone", Ok(sample_thumbnail()));

        assert!(cache.state("gone").is_none());
        assert_eq!(cache.stats().loaded, 0);
    }

    #[test]
    fn reserve_grows_capacity_for_large_galleries() {
        let mut cache = ThumbnailCache::new(ThumbnailCacheConfig::new(MIN_MAX_THUMBNAILS));
        let urls: Vec<String> = (0..20).map(|i| format!("u{i}")).collect();

        cache.reserve(urls.iter().map(String::as_str));
        assert_eq!(cache.capacity(), 20);

        for url in &urls {
            assert!(cache.begin_load(url));
        }
        for url in &urls {
            cache.finish_load(url, Ok(sample_thumbnail()));
        }

        assert_eq!(cache.stats().evictions, 0);
        assert!(urls
            .iter()
            .all(|url| matches!(cache.state(url), Some(ThumbnailState::Ready(_)))));
    }

    #[test]
    fn reserve_shrinks_back_without_evicting_reserved_urls() {
        let mut cache = ThumbnailCache::new(ThumbnailCacheConfig::new(MIN_MAX_THUMBNAILS));
        let urls: Vec<String> = (0..20).map(|i| format!("u{i}")).collect();
        cache.reserve(urls.iter().map(String::as_str));
        for url in &urls {
            cache.begin_load(url);
        }

        // u0..u3 are the oldest entries but belong to the next gallery
        let next: Vec<&str> = urls[..4].iter().map(String::as_str).collect();
        cache.reserve(next.iter().copied());

        assert_eq!(cache.capacity(), MIN_MAX_THUMBNAILS);
        assert_eq!(cache.len(), MIN_MAX_THUMBNAILS);
        assert!(next.iter().all(|url| cache.state(url).is_some()));
    }

    #[test]
    fn clear_removes_everything() {
        let mut cache = ThumbnailCache::with_defaults();
        cache.begin_load("a");
        cache.clear();
        assert!(cache.is_empty());
    }
}
