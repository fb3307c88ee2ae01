//! Header canonicalization and row mapping.
//!
//! Raw export headers are normalized (case, diacritics, ordinal marks,
//! punctuation) and resolved against the alias dictionary carried by a
//! [`clinic_standards::Schema`]. The resulting [`HeaderMap`] drives the
//! [`RowMapper`], which folds each row into a
//! [`clinic_model::CanonicalRecord`].

mod header;
mod mapper;
mod patterns;
mod utils;

pub use header::{HeaderCanonicalizer, HeaderMap, is_template_placeholder};
pub use mapper::{EXTRAS_SEPARATOR, NOTES_SEPARATOR, RowMapper};
pub use utils::{clean_value, contains_words, fold_case_and_accents, normalize_text};
