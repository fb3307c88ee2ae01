use serde::{Deserialize, Serialize};

use crate::delimiter::Delimiter;

/// Run-level counts of one reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Delimiter detected on the header line.
    pub delimiter: Delimiter,
    /// Non-blank data rows read from the export.
    pub input_rows: usize,
    /// Data rows skipped because every cell was blank.
    pub blank_rows: usize,
    /// Rows sent to the error ledger.
    pub error_rows: usize,
    /// Records removed by deduplication.
    pub merged_duplicates: usize,
    /// Records in the final output.
    pub output_records: usize,
}
