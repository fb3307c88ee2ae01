#![deny(unsafe_code)]

//! Patient schema definitions.
//!
//! A [`Schema`] is the immutable configuration handed to the reconciliation
//! engine: the ordered output columns with their display labels, plus the
//! alias dictionary used to recognise source headers. The built-in schema
//! covers the full canonical vocabulary; TOML files can relabel, re-order
//! and extend it.

pub mod aliases;
pub mod error;
pub mod schema;

pub use crate::aliases::builtin_aliases;
pub use crate::error::{Result, StandardsError};
pub use crate::schema::{FieldAliases, Schema, SchemaColumn, load_schema};
