// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: a bounded log of what the gallery did.
//!
//! Events are kept in a [`CircularBuffer`] so memory stays bounded however
//! many thumbnails are loaded. Warnings and errors are also written to stderr
//! as they are recorded.

mod buffer;
mod events;

pub use buffer::{buffer_capacity_bounds, BufferCapacity, CircularBuffer};
pub use events::{DiagnosticEvent, DiagnosticEventKind, Severity};

/// Recorder for diagnostic events.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: CircularBuffer<DiagnosticEvent>,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl EventLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
        }
    }

    /// Records an event, echoing warnings and errors to stderr.
    pub fn record(&mut self, kind: DiagnosticEventKind) {
        match kind.severity() {
            Severity::Info => {}
            Severity::Warning => eprintln!("[WARN] {}", describe(&kind)),
            Severity::Error => eprintln!("[ERROR] {}", describe(&kind)),
        }
        self.events.push(DiagnosticEvent::new(kind));
    }

    /// Iterates over recorded events, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.events.iter()
    }

    /// The most recent event, if any.
    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEvent> {
        self.events.iter().next_back()
    }

    /// Number of recorded events at or above `severity`.
    #[must_use]
    pub fn count_at_least(&self, severity: Severity) -> usize {
        self.events
            .iter()
            .filter(|event| event.kind.severity() >= severity)
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Serializes the recorded event kinds as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let kinds: Vec<&DiagnosticEventKind> = self.events.iter().map(|e| &e.kind).collect();
        serde_json::to_string_pretty(&kinds)
    }
}

fn describe(kind: &DiagnosticEventKind) -> String {
    match kind {
        DiagnosticEventKind::SectionsLoaded { path, .. } => format!("loaded sections from {path}"),
        DiagnosticEventKind::SectionsFailed { path, message } => {
            format!("failed to load sections from {path}: {message}")
        }
        DiagnosticEventKind::ThumbnailLoaded { url, .. } => format!("loaded thumbnail {url}"),
        DiagnosticEventKind::ThumbnailFailed { url, message } => {
            format!("failed to load thumbnail {url}: {message}")
        }
        DiagnosticEventKind::ConfigWarning { message } => format!("settings: {message}"),
    }
}
