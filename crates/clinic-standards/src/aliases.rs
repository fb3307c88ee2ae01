//! Built-in header alias dictionary.
//!
//! Aliases are written the way they appear in real exports (accents,
//! abbreviations, ordinal marks); header matching normalizes both sides, so
//! spelling variants that normalize to the same text are redundant but
//! harmless. A normalized alias must not appear under two fields.

use clinic_model::CanonicalField;

const ALIASES: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::Nome,
        &[
            "nome",
            "nome completo",
            "nome do paciente",
            "nome paciente",
            "nome do cliente",
            "nome cliente",
            "paciente",
            "cliente",
            "name",
            "full name",
            "patient name",
            "patient",
        ],
    ),
    (CanonicalField::NomeSocial, &["nome social", "social name"]),
    (
        CanonicalField::Apelido,
        &["apelido", "como gosta de ser chamado", "nickname"],
    ),
    (
        CanonicalField::Sexo,
        &["sexo", "gênero", "genero", "sex", "gender"],
    ),
    (
        CanonicalField::Cpf,
        &[
            "cpf",
            "nº cpf",
            "n. cpf",
            "nº do cpf",
            "numero do cpf",
            "número do cpf",
            "cpf do paciente",
            "cpf/cnpj",
            "documento",
            "tax id",
        ],
    ),
    (
        CanonicalField::Rg,
        &[
            "rg",
            "nº rg",
            "nº do rg",
            "identidade",
            "carteira de identidade",
            "registro geral",
        ],
    ),
    (
        CanonicalField::DataNascimento,
        &[
            "data de nascimento",
            "data nascimento",
            "data nasc",
            "dt nasc",
            "dt. nasc.",
            "dt nascimento",
            "dt. nascimento",
            "nascimento",
            "aniversário",
            "birth date",
            "birthdate",
            "date of birth",
            "dob",
        ],
    ),
    (
        CanonicalField::Email,
        &["email", "e-mail", "correio eletrônico", "mail"],
    ),
    (
        CanonicalField::Telefone,
        &[
            "telefone",
            "fone",
            "tel",
            "tel.",
            "telefone fixo",
            "fone fixo",
            "telefone residencial",
            "tel residencial",
            "phone",
            "telephone",
        ],
    ),
    (
        CanonicalField::Celular,
        &[
            "celular",
            "cel",
            "cel.",
            "telefone celular",
            "tel celular",
            "fone celular",
            "whatsapp",
            "whats",
            "mobile",
            "cell phone",
            "cellphone",
        ],
    ),
    (
        CanonicalField::Endereco,
        &[
            "endereço",
            "endereco completo",
            "logradouro",
            "rua",
            "address",
            "street",
        ],
    ),
    (
        CanonicalField::Numero,
        &["número", "numero", "nº", "n°", "num", "number"],
    ),
    (
        CanonicalField::Complemento,
        &["complemento", "compl", "compl.", "apto", "apartamento"],
    ),
    (
        CanonicalField::Bairro,
        &["bairro", "district", "neighborhood"],
    ),
    (
        CanonicalField::Cidade,
        &["cidade", "município", "municipio", "localidade", "city"],
    ),
    (
        CanonicalField::Cep,
        &[
            "cep",
            "código postal",
            "codigo postal",
            "zip",
            "zip code",
            "postal code",
        ],
    ),
    (CanonicalField::Estado, &["estado", "uf", "sigla uf", "state"]),
    (
        CanonicalField::EstadoCivil,
        &["estado civil", "civil", "marital status"],
    ),
    (
        CanonicalField::Escolaridade,
        &["escolaridade", "grau de instrução", "instrução", "education"],
    ),
    (
        CanonicalField::Profissao,
        &[
            "profissão",
            "ocupação",
            "cargo",
            "occupation",
            "profession",
        ],
    ),
    (
        CanonicalField::RegistroConselho,
        &[
            "registro no conselho",
            "registro conselho",
            "conselho",
            "crm",
            "cro",
            "crefito",
            "crp",
            "council registration",
        ],
    ),
    (
        CanonicalField::Naturalidade,
        &[
            "naturalidade",
            "local de nascimento",
            "cidade natal",
            "place of birth",
            "birthplace",
        ],
    ),
    (
        CanonicalField::Nacionalidade,
        &["nacionalidade", "país", "nationality"],
    ),
    (CanonicalField::Idade, &["idade", "age"]),
    (
        CanonicalField::ResponsavelNome,
        &[
            "responsável",
            "nome do responsável",
            "nome responsável",
            "responsável legal",
            "nome da mãe",
            "nome do pai",
            "guardian",
            "guardian name",
        ],
    ),
    (
        CanonicalField::ResponsavelCpf,
        &[
            "cpf do responsável",
            "cpf responsável",
            "documento do responsável",
            "guardian document",
        ],
    ),
    (
        CanonicalField::PossuiSaldo,
        &[
            "possui saldo",
            "saldo",
            "saldo devedor",
            "em débito",
            "débito",
            "financeiro",
            "balance",
        ],
    ),
    (
        CanonicalField::ProfissionalPreferencial,
        &[
            "profissional preferencial",
            "profissional",
            "profissional responsável",
            "dentista",
            "médico",
            "doutor",
            "preferred provider",
        ],
    ),
    (
        CanonicalField::Convenio,
        &[
            "convênio",
            "plano de saúde",
            "plano",
            "operadora",
            "insurance",
            "health plan",
        ],
    ),
    (
        CanonicalField::CarteirinhaConvenio,
        &[
            "carteirinha",
            "carteirinha do convênio",
            "número da carteirinha",
            "carteira do convênio",
            "matrícula do convênio",
            "insurance card",
        ],
    ),
    (
        CanonicalField::ObservacoesConvenio,
        &[
            "observações do convênio",
            "observações convênio",
            "observação convênio",
            "obs convênio",
            "obs. convênio",
            "insurance notes",
        ],
    ),
    (
        CanonicalField::DataCadastro,
        &[
            "data de cadastro",
            "data cadastro",
            "dt cadastro",
            "dt. cadastro",
            "cadastro",
            "cadastrado em",
            "data de inclusão",
            "registration date",
            "created at",
        ],
    ),
    (
        CanonicalField::Campanha,
        &["campanha", "campaign", "utm campaign"],
    ),
    (
        CanonicalField::Origem,
        &["origem", "fonte", "canal", "mídia", "como conheceu", "source"],
    ),
    (
        CanonicalField::IndicadoPor,
        &[
            "indicado por",
            "indicação",
            "quem indicou",
            "referral",
            "referred by",
        ],
    ),
    (
        CanonicalField::TipoSanguineo,
        &[
            "tipo sanguíneo",
            "grupo sanguíneo",
            "fator rh",
            "blood type",
        ],
    ),
    (
        CanonicalField::CorPele,
        &["cor da pele", "cor pele", "pele", "etnia", "raça", "skin color"],
    ),
    (
        CanonicalField::CorCabelo,
        &["cor do cabelo", "cor cabelo", "cabelo", "hair color"],
    ),
    (
        CanonicalField::CorOlhos,
        &["cor dos olhos", "cor olhos", "olhos", "eye color"],
    ),
    (
        CanonicalField::FormatoRosto,
        &["formato do rosto", "formato rosto", "rosto", "face shape"],
    ),
    (
        CanonicalField::DataUltimaConsulta,
        &[
            "data da última consulta",
            "última consulta",
            "último atendimento",
            "última visita",
            "last visit",
        ],
    ),
    (
        CanonicalField::Observacoes,
        &[
            "observações",
            "observação",
            "obs",
            "obs.",
            "anotações",
            "comentários",
            "notas",
            "notes",
            "comments",
        ],
    ),
    (
        CanonicalField::CamposExtras,
        &[
            "campos extras",
            "extras",
            "informações adicionais",
            "dados adicionais",
            "extra fields",
        ],
    ),
];

/// Returns the built-in alias lists, in canonical field order.
pub fn builtin_aliases() -> impl Iterator<Item = (CanonicalField, &'static [&'static str])> {
    ALIASES.iter().map(|(field, aliases)| (*field, *aliases))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_field_has_aliases() {
        for field in CanonicalField::ALL {
            assert!(
                builtin_aliases().any(|(f, aliases)| f == field && !aliases.is_empty()),
                "no aliases for {field}"
            );
        }
    }

    #[test]
    fn test_table_follows_canonical_order() {
        let order: Vec<CanonicalField> = builtin_aliases().map(|(field, _)| field).collect();
        assert_eq!(order, CanonicalField::ALL.to_vec());
    }
}
