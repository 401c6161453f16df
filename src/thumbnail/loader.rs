// SPDX-License-Identifier: MPL-2.0
//! Thumbnail loading and downscaling.
//!
//! Raster formats (PNG, JPEG, GIF, WebP, ...) are decoded with `image` and
//! shrunk to fit the requested edge length. SVG thumbnails are rasterized with
//! `resvg` directly at the target size.

use super::ThumbnailSource;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

/// A decoded thumbnail ready to be drawn.
#[derive(Debug, Clone)]
pub struct ThumbnailData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ThumbnailData {
    /// Creates thumbnail data from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Approximate decoded size in bytes (RGBA).
    #[must_use]
    pub fn size_bytes(&self) -> usize {
        (self.width as usize) * (self.height as usize) * 4
    }
}

/// Returns true if the bytes look like an SVG document.
fn looks_like_svg(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let head = &bytes[start..];
    head.starts_with(b"<svg") || head.starts_with(b"<?xml")
}

fn rasterize_svg(bytes: &[u8], max_edge: u32) -> Result<ThumbnailData> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Decode(e.to_string()))?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(Error::Decode("SVG has empty dimensions".into()));
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = (max_edge as f32 / size.width()).min(max_edge as f32 / size.height());
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let width = ((size.width() * scale).round() as u32).max(1);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let height = ((size.height() * scale).round() as u32).max(1);

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Decode("Failed to allocate SVG pixmap".into()))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    let png_data = pixmap
        .encode_png()
        .map_err(|e| Error::Decode(e.to_string()))?;

    Ok(ThumbnailData {
        handle: image::Handle::from_bytes(png_data),
        width,
        height,
    })
}

/// Decodes encoded image bytes into a thumbnail no larger than `max_edge`
/// on either side. Images already smaller are kept at their size.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the bytes are not a supported image.
pub fn decode_thumbnail(bytes: &[u8], max_edge: u32) -> Result<ThumbnailData> {
    if looks_like_svg(bytes) {
        return rasterize_svg(bytes, max_edge);
    }

    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let img = if width > max_edge || height > max_edge {
        img.thumbnail(max_edge, max_edge)
    } else {
        img
    };

    let (width, height) = img.dimensions();
    Ok(ThumbnailData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// Loads a thumbnail from a local file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Decode`]
/// if its content is not a supported image.
pub fn load_local(path: &Path, max_edge: u32) -> Result<ThumbnailData> {
    let bytes = fs::read(path)?;
    decode_thumbnail(&bytes, max_edge)
}

/// HTTP client shared by every remote thumbnail so connections are pooled.
fn http_client() -> Result<&'static reqwest::Client> {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;
    Ok(CLIENT.get_or_init(|| client))
}

/// Fetches the raw bytes of a remote thumbnail.
async fn fetch_remote(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let response = http_client()?
        .get(url)
        .timeout(timeout)
        .send()
        .await?
        .error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

/// Loads and downscales a thumbnail from any source.
///
/// Decoding runs on the blocking thread pool so the UI executor stays free.
pub async fn load_thumbnail(
    source: ThumbnailSource,
    max_edge: u32,
    timeout: Duration,
) -> Result<ThumbnailData> {
    let task = match source {
        ThumbnailSource::Local(path) => {
            tokio::task::spawn_blocking(move || load_local(&path, max_edge))
        }
        ThumbnailSource::Remote(url) => {
            let bytes = fetch_remote(&url, timeout).await?;
            tokio::task::spawn_blocking(move || decode_thumbnail(&bytes, max_edge))
        }
    };

    task.await
        .unwrap_or_else(|e| Err(Error::Io(format!("Thumbnail task failed: {e}"))))
}
