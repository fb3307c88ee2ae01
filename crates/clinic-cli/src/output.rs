//! Writing reconciled records and the error report.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use tracing::debug;

use clinic_core::ReconcileOutput;
use clinic_model::{Delimiter, ImportError};

const RECORDS_SUFFIX: &str = "_importacao.csv";
const ERRORS_SUFFIX: &str = "_erros.csv";

/// Default records and error-report paths, beside the input.
pub fn default_output_paths(input: &Path) -> (PathBuf, PathBuf) {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pacientes".to_string());
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    (
        dir.join(format!("{stem}{RECORDS_SUFFIX}")),
        dir.join(format!("{stem}{ERRORS_SUFFIX}")),
    )
}

/// Writes records under the output column labels.
pub fn write_records(path: &Path, output: &ReconcileOutput, delimiter: Delimiter) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(output.labels())
        .with_context(|| format!("write header to {}", path.display()))?;
    for row in output.rows() {
        writer
            .write_record(&row)
            .with_context(|| format!("write record to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(
        path = %path.display(),
        records = output.records.len(),
        "wrote records"
    );
    Ok(())
}

/// Writes the error report as `line,raw,reason`.
pub fn write_errors(path: &Path, errors: &[ImportError], delimiter: Delimiter) -> Result<()> {
    ensure_parent(path)?;
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(["line", "raw", "reason"])
        .with_context(|| format!("write header to {}", path.display()))?;
    for error in errors {
        let line = error.line.to_string();
        writer
            .write_record([line.as_str(), error.raw.as_str(), error.reason.as_str()])
            .with_context(|| format!("write error row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), errors = errors.len(), "wrote error report");
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display())),
        _ => Ok(()),
    }
}
