//! Rows that could not be reconciled.

use clinic_model::{DEFAULT_SNAPSHOT_CHARS, ImportError};

/// Reason recorded for rows whose mapping produced an empty record.
pub const REASON_NO_FIELDS: &str = "linha sem campos reconhecíveis após o mapeamento";

/// Append-only list of rejected rows, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLedger {
    entries: Vec<ImportError>,
    snapshot_chars: usize,
}

impl Default for ErrorLedger {
    fn default() -> Self {
        Self::new(DEFAULT_SNAPSHOT_CHARS)
    }
}

impl ErrorLedger {
    pub fn new(snapshot_chars: usize) -> Self {
        Self {
            entries: Vec::new(),
            snapshot_chars,
        }
    }

    /// Records a rejected row; `raw` is truncated to the snapshot length.
    pub fn record(&mut self, line: usize, raw: &str, reason: impl Into<String>) {
        self.entries
            .push(ImportError::new(line, raw, reason, self.snapshot_chars));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ImportError] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ImportError> {
        self.entries
    }
}
