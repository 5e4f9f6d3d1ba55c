//! Error types for building a resolution reference set.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Every row that falls through to territory lookup would be flagged,
    /// so an empty territory table is treated as a setup mistake.
    #[error("territory table '{table}' has no usable zip code entries")]
    EmptyTerritoryTable { table: String },
}

pub type Result<T> = std::result::Result<T, ResolveError>;
