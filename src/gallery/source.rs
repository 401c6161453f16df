// SPDX-License-Identifier: MPL-2.0
//! Section file loading.
//!
//! A section file holds the `photoSections` list consumed by the thumbnails
//! view. Two formats are accepted, chosen by extension:
//!
//! - **JSON**: a bare array, `null`, or `{ "photoSections": [...] }`
//! - **TOML**: `[[photoSections]]` tables
//!
//! An explicit `null` (or a document without the key) means the list is
//! absent, which the view renders as an empty container.

use super::types::PhotoSection;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Accepted section file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    /// Detects the format from the file extension (case-insensitive).
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension().and_then(|s| s.to_str())?;
        if extension.eq_ignore_ascii_case("json") {
            Some(SourceFormat::Json)
        } else if extension.eq_ignore_ascii_case("toml") {
            Some(SourceFormat::Toml)
        } else {
            None
        }
    }
}

/// Document wrapper shared by both formats.
#[derive(Debug, Deserialize)]
struct SectionDocument {
    #[serde(default, rename = "photoSections")]
    photo_sections: Option<Vec<PhotoSection>>,
}

/// Sections read from a file, with the directory used to resolve relative
/// thumbnail paths.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSections {
    pub path: PathBuf,
    pub sections: Option<Vec<PhotoSection>>,
}

impl LoadedSections {
    /// Directory containing the section file.
    #[must_use]
    pub fn base_dir(&self) -> Option<&Path> {
        self.path.parent()
    }
}

/// Parses section file content in the given format.
///
/// # Errors
///
/// Returns [`Error::Source`] when the content does not match the format or
/// the section schema.
pub fn parse_sections(content: &str, format: SourceFormat) -> Result<Option<Vec<PhotoSection>>> {
    match format {
        SourceFormat::Json => {
            // The top-level shape picks the schema, so field errors keep their detail
            let value: serde_json::Value = serde_json::from_str(content)?;
            if value.is_object() {
                let document: SectionDocument = serde_json::from_value(value)?;
                Ok(document.photo_sections)
            } else {
                let sections: Option<Vec<PhotoSection>> = serde_json::from_value(value)?;
                Ok(sections)
            }
        }
        SourceFormat::Toml => {
            let document: SectionDocument =
                toml::from_str(content).map_err(|e| Error::Source(e.to_string()))?;
            Ok(document.photo_sections)
        }
    }
}

/// Loads a section file from disk.
///
/// # Errors
///
/// Returns [`Error::Source`] for unsupported extensions or invalid content,
/// and [`Error::Io`] when the file cannot be read.
pub fn load_sections(path: &Path) -> Result<LoadedSections> {
    let format = SourceFormat::from_path(path).ok_or_else(|| {
        Error::Source(format!("unsupported section file: {}", path.display()))
    })?;
    let content = fs::read_to_string(path)?;
    let sections = parse_sections(&content, format)?;

    Ok(LoadedSections {
        path: path.to_path_buf(),
        sections,
    })
}

/// Async wrapper used by the application to load a file off the UI thread.
pub async fn load_sections_async(path: PathBuf) -> Result<LoadedSections> {
    tokio::task::spawn_blocking(move || load_sections(&path))
        .await
        .unwrap_or_else(|e| Err(Error::Io(format!("Section loading task failed: {e}"))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const EXAMPLE_JSON: &str = r#"[
        {"id": "s1", "title": "Trip", "segments": [{"photos": [{"id": "p1", "thumbnail": "u1"}]}]},
        {"id": "s2", "title": null, "segments": [{"photos": []}, {"photos": [{"id": "p2", "thumbnail": "u2"}]}]}
    ]"#;

    #[test]
    fn format_detection_is_case_insensitive() {
        assert_eq!(
            SourceFormat::from_path(Path::new("a/b.JSON")),
            Some(SourceFormat::Json)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("sections.toml")),
            Some(SourceFormat::Toml)
        );
        assert_eq!(SourceFormat::from_path(Path::new("sections.yaml")), None);
        assert_eq!(SourceFormat::from_path(Path::new("sections")), None);
    }

    #[test]
    fn parses_bare_json_array() {
        let sections = parse_sections(EXAMPLE_JSON, SourceFormat::Json)
            .expect("json should parse")
            .expect("sections should be present");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title.as_deref(), Some("Trip"));
        assert!(sections[1].title.is_none());
        assert_eq!(sections[1].segments.len(), 2);
    }

    #[test]
    fn parses_wrapped_json_object() {
        let content = format!(r#"{{"photoSections": {EXAMPLE_JSON}}}"#);
        let sections = parse_sections(&content, SourceFormat::Json)
            .expect("json should parse")
            .expect("sections should be present");
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn json_null_means_absent() {
        assert_eq!(parse_sections("null", SourceFormat::Json).unwrap(), None);
        assert_eq!(
            parse_sections(r#"{"photoSections": null}"#, SourceFormat::Json).unwrap(),
            None
        );
    }

    #[test]
    fn json_sections_without_collections_are_empty() {
        let sections = parse_sections(r#"[{"id": "s1", "segments": [{}]}]"#, SourceFormat::Json)
            .unwrap()
            .unwrap();
        assert_eq!(sections[0].segments.len(), 1);
        assert!(sections[0].segments[0].photos.is_empty());
    }

    #[test]
    fn invalid_json_is_a_source_error() {
        let result = parse_sections(r#"[{"title": "no id"}]"#, SourceFormat::Json);
        assert!(matches!(result, Err(Error::Source(_))));
    }

    #[test]
    fn missing_field_is_named_in_the_error() {
        let bare = parse_sections(
            r#"[{"id": "s1", "segments": [{"photos": [{"id": "p1"}]}]}]"#,
            SourceFormat::Json,
        );
        match bare {
            Err(Error::Source(message)) => assert!(message.contains("missing field `thumbnail`")),
            other => panic!("expected Source error, got {other:?}"),
        }

        let wrapped = parse_sections(r#"{"photoSections": [{"title": "no id"}]}"#, SourceFormat::Json);
        match wrapped {
            Err(Error::Source(message)) => assert!(message.contains("missing field `id`")),
            other => panic!("expected Source error, got {other:?}"),
        }
    }

    #[test]
    fn json_scalar_is_a_source_error() {
        assert!(matches!(
            parse_sections("42", SourceFormat::Json),
            Err(Error::Source(_))
        ));
    }

    #[test]
    fn parses_toml_tables() {
        let content = r#"
            [[photoSections]]
            id = "s1"
            title = "Trip"

            [[photoSections.segments]]
            photos = [{ id = "p1", thumbnail = "u1" }]

            [[photoSections]]
            id = "s2"
        "#;

        let sections = parse_sections(content, SourceFormat::Toml)
            .expect("toml should parse")
            .expect("sections should be present");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].segments[0].photos[0].thumbnail, "u1");
        assert!(sections[1].segments.is_empty());
    }

    #[test]
    fn toml_without_key_means_absent() {
        assert_eq!(parse_sections("", SourceFormat::Toml).unwrap(), None);
    }

    #[test]
    fn load_sections_reads_file_and_keeps_path() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("sections.json");
        fs::write(&path, EXAMPLE_JSON).expect("failed to write sections");

        let loaded = load_sections(&path).expect("file should load");
        assert_eq!(loaded.path, path);
        assert_eq!(loaded.base_dir(), Some(temp_dir.path()));
        assert_eq!(loaded.sections.map(|s| s.len()), Some(2));
    }

    #[test]
    fn load_sections_rejects_unknown_extension() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("sections.txt");
        fs::write(&path, EXAMPLE_JSON).expect("failed to write sections");

        match load_sections(&path) {
            Err(Error::Source(message)) => assert!(message.contains("unsupported")),
            other => panic!("expected Source error, got {other:?}"),
        }
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("missing.json");
        assert!(matches!(load_sections(&missing), Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn async_loader_matches_sync_loader() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("sections.json");
        fs::write(&path, EXAMPLE_JSON).expect("failed to write sections");

        let loaded = load_sections_async(path.clone()).await.expect("should load");
        assert_eq!(loaded, load_sections(&path).unwrap());
    }
}
