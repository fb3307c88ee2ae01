//! Canonical patient record.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::field::{CANONICAL_FIELD_COUNT, CanonicalField};

/// One reconciled patient row.
///
/// Holds one text slot per [`CanonicalField`], pre-allocated. An empty string
/// means "unknown"; there is no separate missing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRecord {
    values: Vec<String>,
}

impl Default for CanonicalRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl CanonicalRecord {
    pub fn new() -> Self {
        Self {
            values: vec![String::new(); CANONICAL_FIELD_COUNT],
        }
    }

    /// Builds a record from `(field, value)` pairs; later pairs overwrite earlier ones.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (CanonicalField, &'a str)>) -> Self {
        let mut record = Self::new();
        for (field, value) in pairs {
            record.set(field, value);
        }
        record
    }

    pub fn get(&self, field: CanonicalField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: CanonicalField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Offers a candidate value for `field`.
    ///
    /// The candidate is written when the slot is empty or the candidate is
    /// strictly longer (in characters) than the current value. Returns true
    /// when the slot changed. Empty candidates are ignored.
    pub fn offer(&mut self, field: CanonicalField, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        let slot = &mut self.values[field.index()];
        if slot.is_empty() || candidate.chars().count() > slot.chars().count() {
            *slot = candidate.to_string();
            return true;
        }
        false
    }

    /// Appends `value` to `field`, separated from any existing content by `separator`.
    pub fn append(&mut self, field: CanonicalField, value: &str, separator: &str) {
        if value.is_empty() {
            return;
        }
        let slot = &mut self.values[field.index()];
        if !slot.is_empty() {
            slot.push_str(separator);
        }
        slot.push_str(value);
    }

    /// Rewrites a field in place with `f`. Empty fields are left untouched.
    pub fn normalize_with(&mut self, field: CanonicalField, f: impl FnOnce(&str) -> String) {
        let slot = &mut self.values[field.index()];
        if slot.is_empty() {
            return;
        }
        *slot = f(slot);
    }

    /// Number of non-empty fields.
    pub fn completeness(&self) -> usize {
        self.values.iter().filter(|value| !value.is_empty()).count()
    }

    /// Returns true when every field, including notes and extras, is empty.
    pub fn is_empty(&self) -> bool {
        self.completeness() == 0
    }

    /// Iterates `(field, value)` pairs in built-in order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &str)> {
        CanonicalField::ALL
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Projects the record onto an ordered field list.
    pub fn project(&self, fields: &[CanonicalField]) -> Vec<&str> {
        fields.iter().map(|field| self.get(*field)).collect()
    }
}

impl Serialize for CanonicalRecord {
    /// Serializes non-empty fields only, keyed by machine key.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.completeness()))?;
        for (field, value) in self.iter().filter(|(_, value)| !value.is_empty()) {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}
