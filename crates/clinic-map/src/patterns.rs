use std::collections::BTreeMap;

use clinic_model::CanonicalField;
use clinic_standards::Schema;

use crate::utils::{contains_words, normalize_text};

/// Aliases shorter than this never match by containment.
const MIN_CONTAINED_ALIAS_CHARS: usize = 2;
/// Headers shorter than this never match by appearing inside an alias.
const MIN_REVERSE_HEADER_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AliasPattern {
    pub field: CanonicalField,
    pub normalized: String,
}

/// Normalized alias lookup built once per schema.
#[derive(Debug, Clone, Default)]
pub(crate) struct AliasIndex {
    exact: BTreeMap<String, CanonicalField>,
    /// Containment candidates, longest alias first.
    patterns: Vec<AliasPattern>,
}

impl AliasIndex {
    pub fn build(schema: &Schema) -> Self {
        let mut exact = BTreeMap::new();
        let mut patterns = Vec::new();
        for entry in schema.aliases() {
            for alias in &entry.aliases {
                let normalized = normalize_text(alias);
                if normalized.is_empty() {
                    continue;
                }
                exact.entry(normalized.clone()).or_insert(entry.field);
                patterns.push(AliasPattern {
                    field: entry.field,
                    normalized,
                });
            }
        }
        // A key spelled with spaces is as good as an alias.
        for field in CanonicalField::ALL {
            exact
                .entry(field.key().replace('_', " "))
                .or_insert(field);
        }
        patterns.sort_by_key(|pattern| std::cmp::Reverse(pattern.normalized.chars().count()));
        Self { exact, patterns }
    }

    pub fn exact(&self, normalized: &str) -> Option<CanonicalField> {
        self.exact.get(normalized).copied()
    }

    /// Alias contained in the header: leftmost occurrence wins, then the longest alias.
    pub fn contained_in(&self, normalized: &str) -> Option<CanonicalField> {
        let padded = format!(" {normalized} ");
        self.patterns
            .iter()
            .filter(|pattern| pattern.normalized.chars().count() >= MIN_CONTAINED_ALIAS_CHARS)
            .filter_map(|pattern| {
                padded
                    .find(&format!(" {} ", pattern.normalized))
                    .map(|position| (position, pattern))
            })
            .min_by_key(|(position, _)| *position)
            .map(|(_, pattern)| pattern.field)
    }

    /// Header contained in an alias, accepted only when one field qualifies.
    pub fn containing(&self, normalized: &str) -> Option<CanonicalField> {
        if normalized.chars().count() < MIN_REVERSE_HEADER_CHARS {
            return None;
        }
        let mut found: Option<CanonicalField> = None;
        for pattern in &self.patterns {
            if !contains_words(&pattern.normalized, normalized) {
                continue;
            }
            match found {
                None => found = Some(pattern.field),
                Some(field) if field == pattern.field => {}
                Some(_) => return None,
            }
        }
        found
    }
}

pub(crate) fn build_alias_patterns(schema: &Schema) -> AliasIndex {
    AliasIndex::build(schema)
}
