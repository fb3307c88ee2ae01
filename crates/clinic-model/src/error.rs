use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown canonical field: {0}")]
    UnknownField(String),
    #[error("unknown delimiter: {0}")]
    UnknownDelimiter(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
