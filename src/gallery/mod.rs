// SPDX-License-Identifier: MPL-2.0
//! Gallery data and its presentation-independent transform.
//!
//! - [`types`] - Photo sections, segments and photos
//! - [`tree`] - Pure transform from sections to a thumbnail tree
//! - [`source`] - Section file loading (JSON/TOML)

pub mod source;
pub mod tree;
pub mod types;

pub use source::{load_sections, load_sections_async, parse_sections, LoadedSections, SourceFormat};
pub use tree::{render, RenderKey, SectionGroup, ThumbnailTree, Tile};
pub use types::{Photo, PhotoSection, Segment};
