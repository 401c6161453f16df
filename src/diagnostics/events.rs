// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// How an event should be surfaced on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A section file was loaded.
    SectionsLoaded {
        path: String,
        /// `None` when the file holds no section list.
        sections: Option<usize>,
        photos: usize,
    },
    /// A section file could not be loaded.
    SectionsFailed { path: String, message: String },
    /// A thumbnail finished decoding.
    ThumbnailLoaded { url: String, width: u32, height: u32 },
    /// A thumbnail could not be fetched or decoded.
    ThumbnailFailed { url: String, message: String },
    /// Settings could not be read or written.
    ConfigWarning { message: String },
}

impl DiagnosticEventKind {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticEventKind::SectionsLoaded { .. }
            | DiagnosticEventKind::ThumbnailLoaded { .. } => Severity::Info,
            DiagnosticEventKind::ThumbnailFailed { .. }
            | DiagnosticEventKind::ConfigWarning { .. } => Severity::Warning,
            DiagnosticEventKind::SectionsFailed { .. } => Severity::Error,
        }
    }
}

/// A recorded event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub at: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            at: Instant::now(),
            kind,
        }
    }
}
