use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("export is empty: no header line found")]
    EmptyInput,
    #[error("export has a header but no data rows")]
    NothingToReconcile,
}

pub type Result<T> = std::result::Result<T, ReconcileError>;
