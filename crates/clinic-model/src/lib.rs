//! Data model for clinic patient imports.
//!
//! Defines the closed canonical field vocabulary, the in-memory record that
//! the reconciliation engine fills, and the error-ledger and summary types
//! handed to output writers.

pub mod delimiter;
pub mod error;
pub mod field;
pub mod ledger;
pub mod mapping;
pub mod record;
pub mod summary;

pub use delimiter::Delimiter;
pub use error::{ModelError, Result};
pub use field::{CANONICAL_FIELD_COUNT, CanonicalField};
pub use ledger::{DEFAULT_SNAPSHOT_CHARS, ImportError, truncate_chars};
pub use mapping::{HeaderTarget, PLACEHOLDER_PREFIX, is_placeholder_name, placeholder_name};
pub use record::CanonicalRecord;
pub use summary::RunSummary;
