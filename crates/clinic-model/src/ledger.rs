use serde::{Deserialize, Serialize};

/// Default number of characters kept in a ledger snapshot.
pub const DEFAULT_SNAPSHOT_CHARS: usize = 300;

/// A source row that could not be reconciled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportError {
    /// 1-based source line; the header is line 1.
    pub line: usize,
    /// Truncated snapshot of the raw row.
    pub raw: String,
    pub reason: String,
}

impl ImportError {
    pub fn new(line: usize, raw: &str, reason: impl Into<String>, max_chars: usize) -> Self {
        Self {
            line,
            raw: truncate_chars(raw, max_chars),
            reason: reason.into(),
        }
    }
}

/// Truncates to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
