use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// Where the values of one source column end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "field", rename_all = "snake_case")]
pub enum HeaderTarget {
    /// A canonical field; collisions keep the longest value.
    Field(CanonicalField),
    /// A notes-type column; values accumulate into the notes field.
    Notes,
    /// A column feeding the extras field directly.
    Extras,
    /// A named column with no canonical counterpart; routed to extras as `header: value`.
    Unmapped,
    /// A column without a header; values are dropped.
    Placeholder,
}

/// Prefix for synthetic column names given to cells without a header.
pub const PLACEHOLDER_PREFIX: &str = "__col_";

/// Builds the synthetic name for a 1-based column position.
pub fn placeholder_name(position: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{position}")
}

/// Returns true if `name` is a synthetic column name.
pub fn is_placeholder_name(name: &str) -> bool {
    name.strip_prefix(PLACEHOLDER_PREFIX)
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit()))
}
