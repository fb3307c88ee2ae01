//! Reconciliation of clinic patient exports.
//!
//! [`Reconciler`] ties the pipeline together: tokenize the export, resolve
//! its headers against a [`clinic_standards::Schema`], map and normalize
//! each row, send empty rows to the [`ErrorLedger`] and collapse duplicate
//! patients.
//!
//! ```
//! use clinic_core::Reconciler;
//! use clinic_model::CanonicalField;
//!
//! let text = "CPF;Nome;Celular\n123.456.789-09;Maria;11987654321\n12345678909;Maria Silva;\n";
//! let output = Reconciler::default().reconcile(text).unwrap();
//! assert_eq!(output.records.len(), 1);
//! assert_eq!(output.records[0].get(CanonicalField::Nome), "Maria");
//! assert_eq!(output.summary.merged_duplicates, 1);
//! ```

pub mod dedupe;
pub mod error;
pub mod ledger;
pub mod pipeline;

pub use dedupe::{DedupeOutcome, IdentityKey, dedupe_records, identity_key};
pub use error::{ReconcileError, Result};
pub use ledger::{ErrorLedger, REASON_NO_FIELDS};
pub use pipeline::{ReconcileOptions, ReconcileOutput, Reconciler};
