//! Record-level normalization.

use tracing::trace;

use clinic_model::{CanonicalField, CanonicalRecord};

use crate::types::NormalizationType;

/// Applies the field format rules to every normalized field of `record`.
///
/// Empty fields stay empty.
pub fn normalize_record(record: &mut CanonicalRecord) {
    for field in CanonicalField::ALL {
        let Some(rule) = NormalizationType::for_field(field) else {
            continue;
        };
        record.normalize_with(field, |raw| rule.apply(raw));
    }
    trace!(fields = record.completeness(), "normalized record");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_record() {
        let mut record = CanonicalRecord::from_pairs([
            (CanonicalField::Nome, " Ana "),
            (CanonicalField::Cpf, "12345678909"),
            (CanonicalField::ResponsavelCpf, "98765432100"),
            (CanonicalField::Telefone, "1134567890"),
            (CanonicalField::Cep, "01310100"),
            (CanonicalField::DataNascimento, "1990-03-12"),
            (CanonicalField::DataCadastro, "5/1/2024"),
            (CanonicalField::Sexo, "feminino"),
        ]);
        normalize_record(&mut record);
        assert_eq!(record.get(CanonicalField::Nome), " Ana ");
        assert_eq!(record.get(CanonicalField::Cpf), "123.456.789-09");
        assert_eq!(record.get(CanonicalField::ResponsavelCpf), "987.654.321-00");
        assert_eq!(record.get(CanonicalField::Telefone), "(11) 34567890");
        assert_eq!(record.get(CanonicalField::Cep), "01310-100");
        assert_eq!(record.get(CanonicalField::DataNascimento), "12/03/1990");
        assert_eq!(record.get(CanonicalField::DataCadastro), "05/01/2024");
        assert_eq!(record.get(CanonicalField::Sexo), "F");
        assert_eq!(record.get(CanonicalField::Celular), "");
    }
}
