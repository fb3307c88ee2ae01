//! Identity-based record deduplication.

use std::collections::BTreeMap;

use tracing::debug;

use clinic_map::fold_case_and_accents;
use clinic_model::{CanonicalField, CanonicalRecord};
use clinic_normalization::only_digits;

/// Key under which records are considered the same person.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum IdentityKey {
    /// The 11 CPF digits.
    Cpf(String),
    /// Folded full name and birth date.
    NameBirth(String, String),
}

/// Derives the identity key of a record, if it has one.
///
/// A CPF with exactly 11 digits takes precedence over name and birth date.
pub fn identity_key(record: &CanonicalRecord) -> Option<IdentityKey> {
    let cpf = only_digits(record.get(CanonicalField::Cpf));
    if cpf.len() == 11 {
        return Some(IdentityKey::Cpf(cpf));
    }
    let name = fold_case_and_accents(record.get(CanonicalField::Nome));
    let birth = record.get(CanonicalField::DataNascimento).trim();
    if name.is_empty() || birth.is_empty() {
        return None;
    }
    Some(IdentityKey::NameBirth(name, birth.to_string()))
}

/// Result of one deduplication pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DedupeOutcome {
    pub records: Vec<CanonicalRecord>,
    /// Records dropped in favour of a more complete duplicate.
    pub merged: usize,
}

/// Survivors of one identity tier, in first-seen group order.
#[derive(Default)]
struct Bucket {
    slots: Vec<CanonicalRecord>,
    index: BTreeMap<IdentityKey, usize>,
}

impl Bucket {
    /// Returns true when the record collapsed into an existing group.
    fn offer(&mut self, key: IdentityKey, record: CanonicalRecord) -> bool {
        match self.index.get(&key) {
            Some(&slot) => {
                if record.completeness() > self.slots[slot].completeness() {
                    self.slots[slot] = record;
                }
                true
            }
            None => {
                self.index.insert(key, self.slots.len());
                self.slots.push(record);
                false
            }
        }
    }
}

/// Collapses records that identify the same person.
///
/// Within a group the record with the most non-empty fields survives; ties
/// keep the first seen. Output holds CPF-keyed survivors, then name and
/// birth-date survivors, then records without a key in input order.
pub fn dedupe_records(records: Vec<CanonicalRecord>) -> DedupeOutcome {
    let input = records.len();
    let mut by_cpf = Bucket::default();
    let mut by_name_birth = Bucket::default();
    let mut unkeyed = Vec::new();
    let mut merged = 0usize;

    for record in records {
        let collapsed = match identity_key(&record) {
            Some(key @ IdentityKey::Cpf(_)) => by_cpf.offer(key, record),
            Some(key @ IdentityKey::NameBirth(..)) => by_name_birth.offer(key, record),
            None => {
                unkeyed.push(record);
                false
            }
        };
        if collapsed {
            merged += 1;
        }
    }

    debug!(
        input,
        cpf_groups = by_cpf.slots.len(),
        name_birth_groups = by_name_birth.slots.len(),
        unkeyed = unkeyed.len(),
        merged,
        "deduplicated records"
    );

    let mut survivors = by_cpf.slots;
    survivors.extend(by_name_birth.slots);
    survivors.extend(unkeyed);
    DedupeOutcome {
        records: survivors,
        merged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(CanonicalField, &str)]) -> CanonicalRecord {
        CanonicalRecord::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_identity_key() {
        let by_cpf = record(&[
            (CanonicalField::Cpf, "123.456.789-09"),
            (CanonicalField::Nome, "Ana"),
        ]);
        assert_eq!(
            identity_key(&by_cpf),
            Some(IdentityKey::Cpf("12345678909".to_string()))
        );

        let by_name = record(&[
            (CanonicalField::Cpf, "123"),
            (CanonicalField::Nome, " JOÃO  da Silva "),
            (CanonicalField::DataNascimento, "01/02/1980"),
        ]);
        assert_eq!(
            identity_key(&by_name),
            Some(IdentityKey::NameBirth(
                "joao da silva".to_string(),
                "01/02/1980".to_string()
            ))
        );

        let name_only = record(&[(CanonicalField::Nome, "Ana")]);
        assert_eq!(identity_key(&name_only), None);
    }

    #[test]
    fn test_most_complete_record_wins() {
        let outcome = dedupe_records(vec![
            record(&[(CanonicalField::Cpf, "12345678909"), (CanonicalField::Nome, "Ana")]),
            record(&[
                (CanonicalField::Cpf, "123.456.789-09"),
                (CanonicalField::Nome, "Ana"),
                (CanonicalField::Email, "ana@example.com"),
            ]),
            record(&[(CanonicalField::Cpf, "12345678909"), (CanonicalField::Nome, "Ana B")]),
        ]);
        assert_eq!(outcome.merged, 2);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].get(CanonicalField::Email), "ana@example.com");
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let outcome = dedupe_records(vec![
            record(&[(CanonicalField::Nome, "Ana"), (CanonicalField::DataNascimento, "01/01/1990")]),
            record(&[(CanonicalField::Nome, "ana"), (CanonicalField::DataNascimento, "01/01/1990")]),
        ]);
        assert_eq!(outcome.merged, 1);
        assert_eq!(outcome.records[0].get(CanonicalField::Nome), "Ana");
    }

    #[test]
    fn test_output_order_by_tier() {
        let unkeyed = record(&[(CanonicalField::Nome, "Sem chave")]);
        let by_name = record(&[
            (CanonicalField::Nome, "Bia"),
            (CanonicalField::DataNascimento, "02/02/1992"),
        ]);
        let by_cpf = record(&[(CanonicalField::Cpf, "98765432100")]);
        let outcome = dedupe_records(vec![unkeyed.clone(), by_name.clone(), by_cpf.clone()]);
        assert_eq!(outcome.merged, 0);
        assert_eq!(outcome.records, vec![by_cpf, by_name, unkeyed]);
    }

    #[test]
    fn test_same_name_different_cpf_are_distinct() {
        let outcome = dedupe_records(vec![
            record(&[
                (CanonicalField::Cpf, "11111111111"),
                (CanonicalField::Nome, "Ana"),
                (CanonicalField::DataNascimento, "01/01/1990"),
            ]),
            record(&[
                (CanonicalField::Cpf, "22222222222"),
                (CanonicalField::Nome, "Ana"),
                (CanonicalField::DataNascimento, "01/01/1990"),
            ]),
        ]);
        assert_eq!(outcome.records.len(), 2);
    }
}
