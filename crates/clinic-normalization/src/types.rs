use serde::Serialize;

use clinic_model::CanonicalField;

use crate::datetime::normalize_date;
use crate::documents::{normalize_cep, normalize_cpf, normalize_phone};
use crate::sex::normalize_sex;

/// Format rule applied to a canonical field after mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationType {
    /// `###.###.###-##`
    Cpf,
    /// `(AA) NNNNN-NNNN`
    Phone,
    /// `#####-###`
    Cep,
    /// `DD/MM/YYYY`
    Date,
    /// `M` / `F`
    Sex,
}

impl NormalizationType {
    /// The rule for `field`, if it has one.
    pub fn for_field(field: CanonicalField) -> Option<Self> {
        match field {
            CanonicalField::Cpf | CanonicalField::ResponsavelCpf => Some(Self::Cpf),
            CanonicalField::Telefone | CanonicalField::Celular => Some(Self::Phone),
            CanonicalField::Cep => Some(Self::Cep),
            CanonicalField::DataNascimento
            | CanonicalField::DataCadastro
            | CanonicalField::DataUltimaConsulta => Some(Self::Date),
            CanonicalField::Sexo => Some(Self::Sex),
            _ => None,
        }
    }

    pub fn apply(&self, raw: &str) -> String {
        match self {
            Self::Cpf => normalize_cpf(raw),
            Self::Phone => normalize_phone(raw),
            Self::Cep => normalize_cep(raw),
            Self::Date => normalize_date(raw),
            Self::Sex => normalize_sex(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_field() {
        assert_eq!(
            NormalizationType::for_field(CanonicalField::ResponsavelCpf),
            Some(NormalizationType::Cpf)
        );
        assert_eq!(
            NormalizationType::for_field(CanonicalField::DataUltimaConsulta),
            Some(NormalizationType::Date)
        );
        assert_eq!(NormalizationType::for_field(CanonicalField::Nome), None);
        assert_eq!(NormalizationType::for_field(CanonicalField::Idade), None);
    }

    #[test]
    fn test_normalized_fields() {
        let fields: Vec<&str> = CanonicalField::ALL
            .iter()
            .filter(|field| NormalizationType::for_field(**field).is_some())
            .map(CanonicalField::key)
            .collect();
        insta::assert_debug_snapshot!(fields, @r#"
        [
            "sexo",
            "cpf",
            "data_nascimento",
            "telefone",
            "celular",
            "cep",
            "responsavel_cpf",
            "data_cadastro",
            "data_ultima_consulta",
        ]
        "#);
    }
}
