//! Properties of the field normalizers.

use clinic_normalization::{
    normalize_cep, normalize_cpf, normalize_date, normalize_phone, normalize_sex, only_digits,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalizers_are_idempotent(raw in "[0-9a-zA-Z ./()+-]{0,20}") {
        for normalize in [normalize_cpf, normalize_phone, normalize_cep, normalize_date, normalize_sex] {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once.clone());
        }
    }

    #[test]
    fn eleven_digits_always_format_as_cpf(digits in "[0-9]{11}", noise in "[ .-]{0,3}") {
        let raw = format!("{noise}{digits}{noise}");
        let cpf = normalize_cpf(&raw);
        prop_assert_eq!(cpf.len(), 14);
        prop_assert_eq!(only_digits(&cpf), digits);
    }

    #[test]
    fn non_matching_values_fall_back(raw in "[a-z ]{0,12}") {
        prop_assert_eq!(normalize_cpf(&raw), raw.trim());
        prop_assert_eq!(normalize_phone(&raw), raw.trim());
        prop_assert_eq!(normalize_cep(&raw), raw.trim());
        prop_assert_eq!(normalize_date(&raw), raw);
    }
}

#[test]
fn sex_initial_wins_over_keywords() {
    for raw in ["Mulher", "mulheres", "Mujer", "masculino"] {
        assert_eq!(normalize_sex(raw), "M", "{raw}");
    }
    assert_eq!(normalize_sex("Homem"), "M");
    assert_eq!(normalize_sex("woman"), "F");
    assert_eq!(normalize_sex("ignorado"), "ignorado");
}
