use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown provider: {0} (expected one of DGK, MOU, ABR, NA)")]
    UnknownProvider(String),
    #[error("unknown flag: {0}")]
    UnknownFlag(String),
    #[error("unknown canonical field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
