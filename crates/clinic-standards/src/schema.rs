#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use clinic_model::CanonicalField;

use crate::aliases::builtin_aliases;
use crate::error::{Result, StandardsError};

/// One output column: a canonical field and the label it is written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaColumn {
    pub field: CanonicalField,
    pub label: String,
}

impl SchemaColumn {
    pub fn new(field: CanonicalField, label: impl Into<String>) -> Self {
        Self {
            field,
            label: label.into(),
        }
    }

    /// Column using the field's default label.
    pub fn default_for(field: CanonicalField) -> Self {
        Self::new(field, field.label())
    }
}

/// Alias list for one canonical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAliases {
    pub field: CanonicalField,
    pub aliases: Vec<String>,
}

/// Immutable schema configuration for one reconciliation run.
///
/// The column list always ends with the notes and extras fields, so unmapped
/// content has a destination whatever the configured columns are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<SchemaColumn>,
    aliases: Vec<FieldAliases>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Schema {
    /// The full 43-field schema with the built-in alias dictionary.
    pub fn builtin() -> Self {
        let columns = CanonicalField::ALL
            .iter()
            .copied()
            .map(SchemaColumn::default_for)
            .collect();
        let aliases = builtin_aliases()
            .map(|(field, aliases)| FieldAliases {
                field,
                aliases: aliases.iter().map(|alias| (*alias).to_string()).collect(),
            })
            .collect();
        Self { columns, aliases }
    }

    pub fn columns(&self) -> &[SchemaColumn] {
        &self.columns
    }

    /// Output fields in column order.
    pub fn fields(&self) -> Vec<CanonicalField> {
        self.columns.iter().map(|column| column.field).collect()
    }

    /// Output labels in column order.
    pub fn labels(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.label.as_str()).collect()
    }

    pub fn contains(&self, field: CanonicalField) -> bool {
        self.columns.iter().any(|column| column.field == field)
    }

    pub fn label(&self, field: CanonicalField) -> Option<&str> {
        self.columns
            .iter()
            .find(|column| column.field == field)
            .map(|column| column.label.as_str())
    }

    pub fn aliases(&self) -> &[FieldAliases] {
        &self.aliases
    }

    pub fn aliases_for(&self, field: CanonicalField) -> &[String] {
        self.aliases
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.aliases.as_slice())
            .unwrap_or(&[])
    }

    /// Replaces the output columns, keeping the alias dictionary.
    ///
    /// Duplicate fields keep their first occurrence. The notes and extras
    /// fields are appended when missing.
    #[must_use]
    pub fn with_columns(mut self, columns: Vec<SchemaColumn>) -> Self {
        let mut seen = BTreeSet::new();
        let mut kept: Vec<SchemaColumn> = columns
            .into_iter()
            .filter(|column| seen.insert(column.field))
            .collect();
        for field in [CanonicalField::NOTES, CanonicalField::EXTRAS] {
            if !seen.contains(&field) {
                kept.push(SchemaColumn::default_for(field));
            }
        }
        self.columns = kept;
        self
    }

    /// Replaces the alias list of one field.
    #[must_use]
    pub fn with_aliases(mut self, field: CanonicalField, aliases: Vec<String>) -> Self {
        match self.aliases.iter_mut().find(|entry| entry.field == field) {
            Some(entry) => entry.aliases = aliases,
            None => self.aliases.push(FieldAliases { field, aliases }),
        }
        self
    }

    /// Parses a schema override file on top of the built-in schema.
    ///
    /// ```toml
    /// [schema]
    /// columns = ["nome", "cpf", "celular"]
    ///
    /// [[fields]]
    /// key = "cpf"
    /// label = "CPF do paciente"
    /// aliases = ["cpf", "documento", "doc"]
    /// ```
    ///
    /// `columns` restricts and re-orders the output; `fields` entries relabel
    /// a field and, when `aliases` is given, replace its alias list.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: SchemaFile = toml::from_str(text)?;
        file.into_schema()
    }
}

/// Loads a schema override file from disk.
pub fn load_schema(path: &Path) -> Result<Schema> {
    let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    let file: SchemaFile = toml::from_str(&text).map_err(|source| StandardsError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    let schema = file.into_schema()?;
    debug!(
        path = %path.display(),
        columns = schema.columns().len(),
        "loaded schema override"
    );
    Ok(schema)
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaFile {
    #[serde(default)]
    schema: Option<SchemaSection>,
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SchemaSection {
    #[serde(default)]
    columns: Option<Vec<CanonicalField>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldEntry {
    key: CanonicalField,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    aliases: Option<Vec<String>>,
}

impl SchemaFile {
    fn into_schema(self) -> Result<Schema> {
        let mut schema = Schema::builtin();
        let mut seen = BTreeSet::new();
        for entry in &self.fields {
            if !seen.insert(entry.key) {
                return Err(StandardsError::InvalidSchema {
                    message: format!("field '{}' is configured more than once", entry.key),
                });
            }
            if let Some(aliases) = &entry.aliases {
                let aliases: Vec<String> = aliases
                    .iter()
                    .map(|alias| alias.trim().to_string())
                    .filter(|alias| !alias.is_empty())
                    .collect();
                schema = schema.with_aliases(entry.key, aliases);
            }
        }

        let order = match self.schema.and_then(|section| section.columns) {
            Some(columns) if columns.is_empty() => {
                return Err(StandardsError::InvalidSchema {
                    message: "schema.columns must not be empty".to_string(),
                });
            }
            Some(columns) => columns,
            None => CanonicalField::ALL.to_vec(),
        };
        let columns = order
            .into_iter()
            .map(|field| {
                let label = self
                    .fields
                    .iter()
                    .find(|entry| entry.key == field)
                    .and_then(|entry| entry.label.as_deref())
                    .map(str::trim)
                    .filter(|label| !label.is_empty())
                    .unwrap_or(field.label());
                SchemaColumn::new(field, label)
            })
            .collect();
        Ok(schema.with_columns(columns))
    }
}
