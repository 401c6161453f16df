// SPDX-License-Identifier: MPL-2.0
//! Photo section data model.
//!
//! These types represent already-resolved gallery data without any
//! presentation dependencies. They are produced by a loader (see
//! [`crate::gallery::source`]) and only ever borrowed by the render pass.
//!
//! Missing `segments` or `photos` collections deserialize as empty sequences,
//! and a missing or `null` title is treated as no title.

use serde::{Deserialize, Serialize};

/// A titled or untitled grouping of segments.
///
/// The order of sections, and of the segments inside each section, is
/// display-significant and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSection {
    /// Identifier unique within the section list, used as the rendering key.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// An ordered sub-grouping of photos with no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// A single image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Identifier unique within its segment, used as the rendering key.
    pub id: String,
    /// Thumbnail image URL.
    pub thumbnail: String,
}

impl PhotoSection {
    #[must_use]
    pub fn new(id: impl Into<String>, title: Option<&str>, segments: Vec<Segment>) -> Self {
        Self {
            id: id.into(),
            title: title.map(str::to_string),
            segments,
        }
    }

    /// Returns the title only when it should be displayed (present and non-empty).
    #[must_use]
    pub fn heading(&self) -> Option<&str> {
        self.title.as_deref().filter(|title| !title.is_empty())
    }

    /// Iterates over every photo of the section, segment order then photo order.
    pub fn photos(&self) -> impl Iterator<Item = &Photo> {
        self.segments.iter().flat_map(|segment| segment.photos.iter())
    }

    /// Total number of photos across all segments.
    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.segments.iter().map(|segment| segment.photos.len()).sum()
    }
}

impl Segment {
    #[must_use]
    pub fn new(photos: Vec<Photo>) -> Self {
        Self { photos }
    }
}

impl Photo {
    #[must_use]
    pub fn new(id: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            thumbnail: thumbnail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_hides_missing_and_empty_titles() {
        assert_eq!(PhotoSection::new("a", None, vec![]).heading(), None);
        assert_eq!(PhotoSection::new("b", Some(""), vec![]).heading(), None);
        assert_eq!(
            PhotoSection::new("c", Some("Trip"), vec![]).heading(),
            Some("Trip")
        );
    }

    #[test]
    fn photos_are_flattened_in_segment_order() {
        let section = PhotoSection::new(
            "s",
            None,
            vec![
                Segment::new(vec![Photo::new("p1", "u1"), Photo::new("p2", "u2")]),
                Segment::default(),
                Segment::new(vec![Photo::new("p3", "u3")]),
            ],
        );

        let ids: Vec<_> = section.photos().map(|photo| photo.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
        assert_eq!(section.photo_count(), 3);
    }

    #[test]
    fn missing_collections_deserialize_as_empty() {
        let section: PhotoSection = serde_json::from_str(r#"{"id": "s1"}"#).unwrap();
        assert!(section.segments.is_empty());
        assert!(section.title.is_none());

        let segment: Segment = serde_json::from_str("{}").unwrap();
        assert!(segment.photos.is_empty());
    }

    #[test]
    fn null_title_deserializes_as_none() {
        let section: PhotoSection =
            serde_json::from_str(r#"{"id": "s2", "title": null, "segments": []}"#).unwrap();
        assert!(section.title.is_none());
    }

    #[test]
    fn photo_without_thumbnail_is_rejected() {
        let result = serde_json::from_str::<Photo>(r#"{"id": "p1"}"#);
        assert!(result.is_err());
    }
}
