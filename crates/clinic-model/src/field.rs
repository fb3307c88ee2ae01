//! Canonical patient field vocabulary.
//!
//! The vocabulary is closed: every import run emits a subset of these keys,
//! in an order chosen either by the built-in schema or by a template.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

macro_rules! canonical_fields {
    ($($variant:ident => $key:literal, $label:literal;)+) => {
        /// A canonical patient field.
        ///
        /// Discriminants follow the built-in output order, so `field as usize`
        /// is a stable slot index into a [`CanonicalRecord`](crate::CanonicalRecord).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum CanonicalField {
            $($variant,)+
        }

        impl CanonicalField {
            /// Every canonical field in built-in order.
            pub const ALL: [CanonicalField; CANONICAL_FIELD_COUNT] = [$(CanonicalField::$variant,)+];

            /// Machine key (snake_case), as used in schema files.
            pub fn key(&self) -> &'static str {
                match self {
                    $(CanonicalField::$variant => $key,)+
                }
            }

            /// Default display label.
            pub fn label(&self) -> &'static str {
                match self {
                    $(CanonicalField::$variant => $label,)+
                }
            }
        }
    };
}

/// Number of canonical fields.
pub const CANONICAL_FIELD_COUNT: usize = 43;

canonical_fields! {
    Nome => "nome", "Nome";
    NomeSocial => "nome_social", "Nome social";
    Apelido => "apelido", "Apelido";
    Sexo => "sexo", "Sexo";
    Cpf => "cpf", "CPF";
    Rg => "rg", "RG";
    DataNascimento => "data_nascimento", "Data de nascimento";
    Email => "email", "E-mail";
    Telefone => "telefone", "Telefone";
    Celular => "celular", "Celular";
    Endereco => "endereco", "Endereço";
    Numero => "numero", "Número";
    Complemento => "complemento", "Complemento";
    Bairro => "bairro", "Bairro";
    Cidade => "cidade", "Cidade";
    Cep => "cep", "CEP";
    Estado => "estado", "Estado";
    EstadoCivil => "estado_civil", "Estado civil";
    Escolaridade => "escolaridade", "Escolaridade";
    Profissao => "profissao", "Profissão";
    RegistroConselho => "registro_conselho", "Registro no conselho";
    Naturalidade => "naturalidade", "Naturalidade";
    Nacionalidade => "nacionalidade", "Nacionalidade";
    Idade => "idade", "Idade";
    ResponsavelNome => "responsavel_nome", "Nome do responsável";
    ResponsavelCpf => "responsavel_cpf", "CPF do responsável";
    PossuiSaldo => "possui_saldo", "Possui saldo";
    ProfissionalPreferencial => "profissional_preferencial", "Profissional preferencial";
    Convenio => "convenio", "Convênio";
    CarteirinhaConvenio => "carteirinha_convenio", "Carteirinha do convênio";
    ObservacoesConvenio => "observacoes_convenio", "Observações do convênio";
    DataCadastro => "data_cadastro", "Data de cadastro";
    Campanha => "campanha", "Campanha";
    Origem => "origem", "Origem";
    IndicadoPor => "indicado_por", "Indicado por";
    TipoSanguineo => "tipo_sanguineo", "Tipo sanguíneo";
    CorPele => "cor_pele", "Cor da pele";
    CorCabelo => "cor_cabelo", "Cor do cabelo";
    CorOlhos => "cor_olhos", "Cor dos olhos";
    FormatoRosto => "formato_rosto", "Formato do rosto";
    DataUltimaConsulta => "data_ultima_consulta", "Data da última consulta";
    Observacoes => "observacoes", "Observações";
    CamposExtras => "campos_extras", "Campos extras";
}

impl CanonicalField {
    /// Free-text notes field. Always present in the output schema.
    pub const NOTES: CanonicalField = CanonicalField::Observacoes;

    /// Free-text extras field. Always present in the output schema.
    pub const EXTRAS: CanonicalField = CanonicalField::CamposExtras;

    /// Slot index into a record.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Looks up a field by its exact machine key.
    pub fn from_key(key: &str) -> Option<CanonicalField> {
        CanonicalField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == key)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CanonicalField {
    type Err = ModelError;

    /// Parses a machine key, case-insensitively and ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        CanonicalField::from_key(&normalized).ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}
