//! Header resolution against the built-in alias dictionary.

use std::collections::BTreeMap;

use clinic_map::{HeaderCanonicalizer, normalize_text};
use clinic_model::CanonicalField;
use clinic_standards::Schema;
use proptest::prelude::*;

#[test]
fn every_alias_resolves_to_its_own_field() {
    let schema = Schema::builtin();
    let canonicalizer = HeaderCanonicalizer::new(&schema);
    for entry in schema.aliases() {
        for alias in &entry.aliases {
            assert_eq!(
                canonicalizer.canonicalize(alias),
                Some(entry.field),
                "alias {alias:?} of {}",
                entry.field
            );
        }
    }
}

#[test]
fn every_key_resolves_to_itself() {
    let canonicalizer = HeaderCanonicalizer::new(&Schema::builtin());
    for field in CanonicalField::ALL {
        assert_eq!(canonicalizer.canonicalize(field.key()), Some(field));
    }
}

#[test]
fn normalized_aliases_are_unambiguous() {
    let schema = Schema::builtin();
    let mut owners: BTreeMap<String, CanonicalField> = BTreeMap::new();
    for entry in schema.aliases() {
        for alias in &entry.aliases {
            let normalized = normalize_text(alias);
            assert!(!normalized.is_empty(), "alias {alias:?} normalizes to nothing");
            let owner = *owners.entry(normalized.clone()).or_insert(entry.field);
            assert_eq!(owner, entry.field, "{normalized:?} claimed twice");
        }
    }
}

#[test]
fn configured_aliases_replace_builtin_ones() {
    let schema = Schema::from_toml_str(
        "[[fields]]\nkey = \"carteirinha_convenio\"\naliases = [\"matricula\"]\n",
    )
    .unwrap();
    let canonicalizer = HeaderCanonicalizer::new(&schema);
    assert_eq!(
        canonicalizer.canonicalize("Matrícula"),
        Some(CanonicalField::CarteirinhaConvenio)
    );
    // The key spelling still resolves.
    assert_eq!(
        canonicalizer.canonicalize("Carteirinha Convenio"),
        Some(CanonicalField::CarteirinhaConvenio)
    );
}

proptest! {
    #[test]
    fn normalize_text_is_idempotent(raw in "[A-Za-zÀ-ÿ0-9 ._/ºª°§()-]{0,30}") {
        let once = normalize_text(&raw);
        prop_assert_eq!(normalize_text(&once), once.clone());
        prop_assert_eq!(once.trim(), once.as_str());
    }

    #[test]
    fn canonicalize_never_panics(raw in "\\PC{0,40}") {
        let canonicalizer = HeaderCanonicalizer::new(&Schema::builtin());
        let _ = canonicalizer.canonicalize(&raw);
    }
}
