//! Error types for mapping operations.

use thiserror::Error;

/// Errors from building a synonym library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A library column names no canonical field.
    #[error("synonym library column '{column}' is not a canonical field")]
    UnknownCanonicalColumn { column: String },
    /// The same synonym is listed under two different canonical fields.
    #[error("synonym '{synonym}' is listed for both '{first}' and '{second}'")]
    AmbiguousSynonym {
        synonym: String,
        first: String,
        second: String,
    },
}
