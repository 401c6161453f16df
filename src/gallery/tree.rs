// SPDX-License-Identifier: MPL-2.0
//! Photo sections to thumbnail tree transform.
//!
//! [`render`] is the pure half of the thumbnails view: it maps the borrowed
//! section list to a [`ThumbnailTree`] of groups, headings and tiles, which
//! [`crate::ui::thumbnails::view`] then turns into widgets.
//!
//! # Examples
//!
//! ```
//! use iced_gallery::gallery::{render, Photo, PhotoSection, Segment};
//!
//! let sections = vec![PhotoSection::new(
//!     "s1",
//!     Some("Trip"),
//!     vec![Segment::new(vec![Photo::new("p1", "u1")])],
//! )];
//!
//! let tree = render(Some(sections.as_slice()));
//! assert_eq!(tree.groups.len(), 1);
//! assert_eq!(tree.groups[0].heading.as_deref(), Some("Trip"));
//! assert_eq!(tree.groups[0].tiles[0].image_url, "u1");
//!
//! assert!(render(None).is_empty());
//! ```

use super::types::PhotoSection;

/// Stable identity of a node across renders, derived from a string id.
///
/// Iced's keyed containers need a `Copy` key, so the id is hashed instead of
/// carried as a `String`. Equal ids always produce equal keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderKey(u64);

impl RenderKey {
    #[must_use]
    pub fn of(id: &str) -> Self {
        let hash = blake3::hash(id.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        Self(u64::from_le_bytes(bytes))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// One thumbnail tile, handed to the thumbnail renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub key: RenderKey,
    pub id: String,
    pub image_url: String,
}

/// One grouping node per photo section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup {
    pub key: RenderKey,
    /// The section id, also the group's identifier in the tree.
    pub id: String,
    /// Displayed before every tile when present.
    pub heading: Option<String>,
    pub tiles: Vec<Tile>,
}

/// Root container of the rendered gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThumbnailTree {
    pub groups: Vec<SectionGroup>,
}

impl ThumbnailTree {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterates over every tile of every group, in display order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.groups.iter().flat_map(|group| group.tiles.iter())
    }

    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.groups.iter().map(|group| group.tiles.len()).sum()
    }
}

/// Builds the thumbnail tree for `photo_sections`.
///
/// Absent input renders an empty container. Ordering is preserved exactly;
/// nothing is sorted, filtered or deduplicated.
#[must_use]
pub fn render(photo_sections: Option<&[PhotoSection]>) -> ThumbnailTree {
    let Some(sections) = photo_sections else {
        return ThumbnailTree::default();
    };

    ThumbnailTree {
        groups: sections.iter().map(render_section).collect(),
    }
}

fn render_section(section: &PhotoSection) -> SectionGroup {
    SectionGroup {
        key: RenderKey::of(&section.id),
        id: section.id.clone(),
        heading: section.heading().map(str::to_string),
        tiles: section
            .photos()
            .map(|photo| Tile {
                key: RenderKey::of(&photo.id),
                id: photo.id.clone(),
                image_url: photo.thumbnail.clone(),
            })
            .collect(),
    }
}
