// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Thumbnails**: tile edge length and spacing
//! - **Cache**: thumbnail cache capacity
//! - **Network**: remote fetch timeout

pub use crate::thumbnail::cache::{
    DEFAULT_MAX_THUMBNAILS, MAX_MAX_THUMBNAILS, MIN_MAX_THUMBNAILS,
};

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Default tile edge length in logical pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 256;

/// Minimum tile edge length.
pub const MIN_THUMBNAIL_SIZE: u32 = 64;

/// Maximum tile edge length.
pub const MAX_THUMBNAIL_SIZE: u32 = 512;

/// Default gap between tiles in logical pixels.
pub const DEFAULT_TILE_SPACING: u16 = 8;

/// Maximum gap between tiles.
pub const MAX_TILE_SPACING: u16 = 64;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Default timeout for remote thumbnail requests (in seconds).
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Minimum fetch timeout (in seconds).
pub const MIN_FETCH_TIMEOUT_SECS: u64 = 1;

/// Maximum fetch timeout (in seconds).
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 120;
