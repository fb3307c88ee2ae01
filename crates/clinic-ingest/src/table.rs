//! Tokenized export table.

use tracing::{debug, warn};

use clinic_model::{Delimiter, placeholder_name};

use crate::csv::{detect_delimiter, split_fields, split_logical_lines};

/// One tokenized data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// 1-based logical line number; the header is line 1.
    pub line: usize,
    pub values: Vec<String>,
}

/// An export split into header and data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub delimiter: Delimiter,
    /// Header labels; empty cells are replaced by `__col_<n>` placeholders.
    pub headers: Vec<String>,
    /// Non-blank data rows in source order.
    pub rows: Vec<RawLine>,
    /// Data rows skipped because every cell was blank.
    pub blank_rows: usize,
    /// True when the text ended inside a quoted span.
    pub unterminated_quote: bool,
}

impl RawTable {
    /// Returns true when there is no header line at all.
    pub fn has_header(&self) -> bool {
        !self.headers.is_empty()
    }
}

/// Tokenizes a whole export.
///
/// Leading blank lines and a UTF-8 BOM are skipped; the first remaining line
/// is the header. Never fails: unbalanced quotes yield a best-effort split.
pub fn tokenize(text: &str) -> RawTable {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let logical = split_logical_lines(text);
    if logical.unterminated_quote {
        warn!("export ended inside a quoted field; the last field absorbed the rest of the file");
    }

    let mut lines = logical
        .lines
        .into_iter()
        .skip_while(|line| line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return RawTable {
            delimiter: Delimiter::default(),
            headers: Vec::new(),
            rows: Vec::new(),
            blank_rows: 0,
            unterminated_quote: logical.unterminated_quote,
        };
    };

    let delimiter = detect_delimiter(&header_line);
    let headers: Vec<String> = split_fields(&header_line, delimiter)
        .into_iter()
        .enumerate()
        .map(|(idx, name)| {
            let name = name.trim_matches('\u{feff}').trim().to_string();
            if name.is_empty() {
                placeholder_name(idx + 1)
            } else {
                name
            }
        })
        .collect();

    let mut rows = Vec::new();
    let mut blank_rows = 0usize;
    for (offset, line) in lines.enumerate() {
        let values = split_fields(&line, delimiter);
        if values.iter().all(|value| value.trim().is_empty()) {
            blank_rows += 1;
            continue;
        }
        rows.push(RawLine {
            line: offset + 2,
            values,
        });
    }

    debug!(
        delimiter = %delimiter,
        columns = headers.len(),
        rows = rows.len(),
        blank_rows,
        "tokenized export"
    );

    RawTable {
        delimiter,
        headers,
        rows,
        blank_rows,
        unterminated_quote: logical.unterminated_quote,
    }
}
