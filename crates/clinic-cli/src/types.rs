use std::path::PathBuf;

use clinic_model::RunSummary;

#[derive(Debug)]
pub struct ReconcileResult {
    pub input: PathBuf,
    /// Encoding the export was decoded from.
    pub encoding: &'static str,
    /// Number of output columns, notes and extras included.
    pub columns: usize,
    pub template_applied: bool,
    pub summary: RunSummary,
    /// Records file, unless this was a dry run.
    pub records_path: Option<PathBuf>,
    /// Error report, when rows were rejected and this was not a dry run.
    pub errors_path: Option<PathBuf>,
    pub dry_run: bool,
    pub fail_on_errors: bool,
}

impl ReconcileResult {
    /// Process exit status for a completed run.
    pub fn exit_code(&self) -> i32 {
        if self.fail_on_errors && self.summary.error_rows > 0 {
            2
        } else {
            0
        }
    }
}
