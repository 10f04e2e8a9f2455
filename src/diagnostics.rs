//! Best-effort diagnostic channel.
//!
//! Entries are kept in memory (bounded) and mirrored to `tracing`. Nothing
//! here is ever shown to the person using the widget.

use chrono::{DateTime, Local};

/// Entries older than this many records are dropped.
pub const MAX_ENTRIES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Raw font list from a successful query
    FontList,
    /// Failed font query, "<name> <message>"
    FetchError,
    /// Raw value emitted by the size control
    SizeChange,
}

#[derive(Debug, Clone)]
pub struct DiagnosticEntry {
    pub timestamp: DateTime<Local>,
    pub kind: DiagnosticKind,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct DiagnosticLog {
    entries: Vec<DiagnosticEntry>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: DiagnosticKind, text: impl Into<String>) {
        let text = text.into();
        match kind {
            DiagnosticKind::FetchError => tracing::error!(target: "font_preview::diagnostics", "{}", text),
            DiagnosticKind::FontList => tracing::info!(target: "font_preview::diagnostics", "{}", text),
            DiagnosticKind::SizeChange => tracing::debug!(target: "font_preview::diagnostics", "{}", text),
        }

        self.entries.push(DiagnosticEntry {
            timestamp: Local::now(),
            kind,
            text,
        });
        // Keep log from growing too large
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
        }
    }

    pub fn entries(&self) -> &[DiagnosticEntry] {
        &self.entries
    }

    pub fn entries_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &DiagnosticEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_filter() {
        let mut log = DiagnosticLog::new();
        log.record(DiagnosticKind::SizeChange, "30");
        log.record(DiagnosticKind::FetchError, "NotAllowedError denied");

        assert_eq!(log.len(), 2);
        let errors: Vec<_> = log.entries_of(DiagnosticKind::FetchError).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].text, "NotAllowedError denied");
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = DiagnosticLog::new();
        for i in 0..(MAX_ENTRIES + 10) {
            log.record(DiagnosticKind::SizeChange, i.to_string());
        }
        assert_eq!(log.len(), MAX_ENTRIES);
        assert_eq!(log.entries()[0].text, "10");
    }
}
