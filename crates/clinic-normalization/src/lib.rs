//! Field format normalization for canonical patient records.
//!
//! Every normalizer is a total function from raw text to canonical text:
//! values that do not match the expected shape pass through trimmed, so a
//! malformed document number or date is never lost.
//!
//! # Example
//!
//! ```
//! use clinic_model::{CanonicalField, CanonicalRecord};
//! use clinic_normalization::normalize_record;
//!
//! let mut record = CanonicalRecord::from_pairs([
//!     (CanonicalField::Cpf, "12345678909"),
//!     (CanonicalField::Celular, "11 98765-4321"),
//! ]);
//! normalize_record(&mut record);
//! assert_eq!(record.get(CanonicalField::Cpf), "123.456.789-09");
//! assert_eq!(record.get(CanonicalField::Celular), "(11) 98765-4321");
//! ```

mod datetime;
mod documents;
mod executor;
mod sex;
mod types;

pub use datetime::normalize_date;
pub use documents::{normalize_cep, normalize_cpf, normalize_phone, only_digits};
pub use executor::normalize_record;
pub use sex::normalize_sex;
pub use types::NormalizationType;
