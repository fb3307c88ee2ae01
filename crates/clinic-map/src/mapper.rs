//! Row mapping onto canonical records.

use clinic_model::{CanonicalField, CanonicalRecord, HeaderTarget};

use crate::header::HeaderMap;
use crate::utils::clean_value;

/// Separator between entries of the extras field.
pub const EXTRAS_SEPARATOR: &str = " | ";
/// Separator between entries of the notes field.
pub const NOTES_SEPARATOR: &str = "\n";

/// Maps tokenized rows through a [`HeaderMap`].
#[derive(Debug, Clone, Copy)]
pub struct RowMapper<'a> {
    header_map: &'a HeaderMap,
}

impl<'a> RowMapper<'a> {
    pub fn new(header_map: &'a HeaderMap) -> Self {
        Self { header_map }
    }

    /// Builds the canonical record for one row.
    ///
    /// The result may be empty; callers decide whether that is an error.
    pub fn map_row(&self, values: &[String]) -> CanonicalRecord {
        let mut record = CanonicalRecord::new();
        for (idx, raw) in values.iter().enumerate() {
            let value = clean_value(raw);
            if value.is_empty() {
                continue;
            }
            match self.header_map.target(idx) {
                HeaderTarget::Field(field) => {
                    record.offer(field, &value);
                }
                HeaderTarget::Notes => {
                    record.append(CanonicalField::NOTES, &value, NOTES_SEPARATOR);
                }
                HeaderTarget::Extras => {
                    record.append(CanonicalField::EXTRAS, &value, EXTRAS_SEPARATOR);
                }
                HeaderTarget::Unmapped => {
                    let header = clean_value(&self.header_map.header(idx));
                    record.append(
                        CanonicalField::EXTRAS,
                        &format!("{header}: {value}"),
                        EXTRAS_SEPARATOR,
                    );
                }
                HeaderTarget::Placeholder => {}
            }
        }
        record
    }
}
