// SPDX-License-Identifier: MPL-2.0
//! Thumbnail sources, loading and caching.
//!
//! A photo's `thumbnail` field is a URL string. This module resolves it to a
//! concrete [`ThumbnailSource`], loads and downscales the image off the UI
//! thread ([`loader`]), and keeps the results in a bounded LRU cache
//! ([`cache`]) that the tile view reads from.
//!
//! # URL resolution
//!
//! | URL form                     | Source                                   |
//! |------------------------------|------------------------------------------|
//! | `http://…`, `https://…`      | fetched remotely                         |
//! | `file:///path`               | local file, percent-decoded              |
//! | `/server/relative` + base URL| fetched from `base_url` + path           |
//! | absolute path                | local file                               |
//! | relative path                | local file next to the section file      |

pub mod cache;
pub mod loader;

pub use cache::{CacheStats, ThumbnailCache, ThumbnailCacheConfig, ThumbnailState};
pub use loader::{load_thumbnail, ThumbnailData};

use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// Where a thumbnail's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ThumbnailSource {
    Remote(String),
    Local(PathBuf),
}

/// Inputs needed to resolve relative thumbnail URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveContext {
    /// Server origin prepended to server-relative URLs (e.g. `http://host:8888`).
    pub base_url: Option<String>,
    /// Directory of the section file, for relative paths.
    pub base_dir: Option<PathBuf>,
}

impl ThumbnailSource {
    /// Resolves a thumbnail URL against the given context.
    #[must_use]
    pub fn resolve(url: &str, ctx: &ResolveContext) -> Self {
        let url = url.trim();
        let lower = url.to_ascii_lowercase();

        if lower.starts_with("http://") || lower.starts_with("https://") {
            return ThumbnailSource::Remote(url.to_string());
        }

        if lower.starts_with("file://") {
            return ThumbnailSource::Local(file_url_path(&url["file://".len()..]));
        }

        if url.starts_with('/') {
            if let Some(base) = ctx.base_url.as_deref().filter(|b| !b.is_empty()) {
                return ThumbnailSource::Remote(format!("{}{}", base.trim_end_matches('/'), url));
            }
        }

        let path = Path::new(url);
        if path.is_absolute() {
            return ThumbnailSource::Local(path.to_path_buf());
        }

        match &ctx.base_dir {
            Some(dir) => ThumbnailSource::Local(dir.join(path)),
            None => ThumbnailSource::Local(path.to_path_buf()),
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, ThumbnailSource::Remote(_))
    }
}

/// Path part of a `file://` URL with the scheme removed: an optional
/// `localhost` authority is dropped and percent escapes are decoded.
fn file_url_path(rest: &str) -> PathBuf {
    let path = rest
        .strip_prefix("localhost")
        .filter(|path| path.starts_with('/'))
        .unwrap_or(rest);
    PathBuf::from(percent_decode_str(path).decode_utf8_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_urls_are_remote() {
        let ctx = ResolveContext::default();
        assert_eq!(
            ThumbnailSource::resolve("https://example.com/t/1.jpg", &ctx),
            ThumbnailSource::Remote("https://example.com/t/1.jpg".into())
        );
        assert!(ThumbnailSource::resolve("HTTP://example.com/a", &ctx).is_remote());
    }

    #[test]
    fn file_urls_are_local() {
        let ctx = ResolveContext::default();
        assert_eq!(
            ThumbnailSource::resolve("file:///tmp/a.png", &ctx),
            ThumbnailSource::Local(PathBuf::from("/tmp/a.png"))
        );
    }

    #[test]
    fn file_urls_are_percent_decoded() {
        let ctx = ResolveContext::default();
        assert_eq!(
            ThumbnailSource::resolve("file:///my%20photos/caf%C3%A9.jpg", &ctx),
            ThumbnailSource::Local(PathBuf::from("/my photos/café.jpg"))
        );
    }

    #[test]
    fn file_urls_accept_localhost_authority() {
        let ctx = ResolveContext::default();
        assert_eq!(
            ThumbnailSource::resolve("FILE://localhost/tmp/a.png", &ctx),
            ThumbnailSource::Local(PathBuf::from("/tmp/a.png"))
        );
    }

    #[test]
    fn server_relative_urls_use_base_url() {
        let ctx = ResolveContext {
            base_url: Some("http://localhost:8888/".into()),
            base_dir: None,
        };
        assert_eq!(
            ThumbnailSource::resolve("/thumbnails/256x256_cover_q50/p1.jpg", &ctx),
            ThumbnailSource::Remote("http://localhost:8888/thumbnails/256x256_cover_q50/p1.jpg".into())
        );
    }

    #[test]
    fn relative_paths_resolve_against_base_dir() {
        let ctx = ResolveContext {
            base_url: None,
            base_dir: Some(PathBuf::from("/albums/2024")),
        };
        assert_eq!(
            ThumbnailSource::resolve("thumbs/p1.png", &ctx),
            ThumbnailSource::Local(PathBuf::from("/albums/2024/thumbs/p1.png"))
        );
    }

    #[test]
    fn relative_paths_without_base_dir_stay_relative() {
        assert_eq!(
            ThumbnailSource::resolve("p1.png", &ResolveContext::default()),
            ThumbnailSource::Local(PathBuf::from("p1.png"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn absolute_paths_ignore_base_dir_without_base_url() {
        let ctx = ResolveContext {
            base_url: None,
            base_dir: Some(PathBuf::from("/albums")),
        };
        assert_eq!(
            ThumbnailSource::resolve("/photos/p1.png", &ctx),
            ThumbnailSource::Local(PathBuf::from("/photos/p1.png"))
        );
    }
}
