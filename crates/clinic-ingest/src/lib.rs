//! Patient export ingestion.
//!
//! Turns raw export text into a [`RawTable`]: the delimiter is detected on
//! the header line, logical lines are assembled without breaking inside
//! quoted spans, and every line is split into trimmed, unescaped fields.
//!
//! # Example
//!
//! ```
//! use clinic_ingest::tokenize;
//! use clinic_model::Delimiter;
//!
//! let table = tokenize("CPF;Nome\n123;\"Silva; Maria\"\n");
//! assert_eq!(table.delimiter, Delimiter::Semicolon);
//! assert_eq!(table.headers, vec!["CPF", "Nome"]);
//! assert_eq!(table.rows[0].values, vec!["123", "Silva; Maria"]);
//! ```

mod csv;
mod decode;
mod error;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Tokenizing ===
pub use csv::{LogicalLines, detect_delimiter, split_fields, split_logical_lines};
pub use table::{RawLine, RawTable, tokenize};

// === Reading ===
pub use decode::{DecodedText, MAX_EXPORT_FILE_SIZE, decode_export, read_export};
