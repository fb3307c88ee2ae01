//! Header canonicalization.

use std::borrow::Cow;

use tracing::{debug, warn};

use clinic_model::{CanonicalField, HeaderTarget, is_placeholder_name, placeholder_name};
use clinic_standards::{Schema, SchemaColumn};

use crate::patterns::{AliasIndex, build_alias_patterns};
use crate::utils::normalize_text;

/// Resolves raw header labels to canonical fields for one schema.
#[derive(Debug, Clone)]
pub struct HeaderCanonicalizer {
    index: AliasIndex,
}

impl HeaderCanonicalizer {
    pub fn new(schema: &Schema) -> Self {
        Self {
            index: build_alias_patterns(schema),
        }
    }

    /// Resolves one header label to a canonical field.
    ///
    /// Tries an exact alias, an alias contained in the header, the header
    /// contained in exactly one field's aliases, and finally the header
    /// spelled as a canonical key.
    pub fn canonicalize(&self, header: &str) -> Option<CanonicalField> {
        let normalized = normalize_text(header);
        if normalized.is_empty() {
            return None;
        }
        self.index
            .exact(&normalized)
            .or_else(|| self.index.contained_in(&normalized))
            .or_else(|| self.index.containing(&normalized))
            .or_else(|| CanonicalField::from_key(&normalized.replace(' ', "_")))
    }

    /// Resolves a header to its target under `schema`.
    ///
    /// Fields the schema does not output are routed to extras.
    pub fn target(&self, header: &str, schema: &Schema) -> HeaderTarget {
        if is_placeholder_name(header) {
            return HeaderTarget::Placeholder;
        }
        match self.canonicalize(header) {
            Some(CanonicalField::NOTES) => HeaderTarget::Notes,
            Some(CanonicalField::EXTRAS) => HeaderTarget::Extras,
            Some(field) if schema.contains(field) => HeaderTarget::Field(field),
            _ => HeaderTarget::Unmapped,
        }
    }

    pub fn build_header_map(&self, headers: &[String], schema: &Schema) -> HeaderMap {
        let targets: Vec<HeaderTarget> = headers
            .iter()
            .map(|header| self.target(header, schema))
            .collect();
        for (header, target) in headers.iter().zip(&targets) {
            debug!(header = %header, target = ?target, "resolved header");
        }
        HeaderMap {
            headers: headers.to_vec(),
            targets,
        }
    }

    /// Derives the effective schema from a template header row.
    ///
    /// Cells resolving to a canonical field become columns in template order,
    /// labelled with the cell text; notes and extras are always appended.
    /// Returns `None` only when the row is absent (empty or only `Col<N>`
    /// placeholders).
    pub fn apply_template(&self, schema: &Schema, cells: &[String]) -> Option<Schema> {
        let named: Vec<&str> = cells
            .iter()
            .map(|cell| cell.trim())
            .filter(|cell| !is_template_placeholder(cell))
            .collect();
        if named.is_empty() {
            return None;
        }
        let columns: Vec<SchemaColumn> = named
            .iter()
            .filter_map(|cell| {
                self.canonicalize(cell)
                    .map(|field| SchemaColumn::new(field, *cell))
            })
            .collect();
        if columns.is_empty() {
            warn!(
                cells = named.len(),
                "template header has no recognizable columns; every value goes to extras"
            );
        }
        let effective = schema.clone().with_columns(columns);
        debug!(columns = effective.columns().len(), "applied template");
        Some(effective)
    }
}

/// Returns true for blank template cells and spreadsheet `Col<N>` fillers.
pub fn is_template_placeholder(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty()
        || cell
            .strip_prefix("Col")
            .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|ch| ch.is_ascii_digit()))
}

/// Per-position header targets for one export.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderMap {
    headers: Vec<String>,
    targets: Vec<HeaderTarget>,
}

impl HeaderMap {
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Header label at a position; positions past the header get a placeholder.
    pub fn header(&self, idx: usize) -> Cow<'_, str> {
        match self.headers.get(idx) {
            Some(header) => Cow::Borrowed(header.as_str()),
            None => Cow::Owned(placeholder_name(idx + 1)),
        }
    }

    pub fn target(&self, idx: usize) -> HeaderTarget {
        self.targets
            .get(idx)
            .copied()
            .unwrap_or(HeaderTarget::Placeholder)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, HeaderTarget)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.targets.iter().copied())
    }

    /// Named headers with no canonical counterpart.
    pub fn unmapped_headers(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, target)| *target == HeaderTarget::Unmapped)
            .map(|(header, _)| header)
            .collect()
    }
}
