//! Quote-aware delimited text splitting.

mod delimiter;
mod fields;
mod lines;

pub use delimiter::detect_delimiter;
pub use fields::split_fields;
pub use lines::{LogicalLines, split_logical_lines};
