//! Input loading for the standardizer.
//!
//! - insight files and standardized reports are read with polars
//! - lookup files and the column library are read with the csv crate
//! - [`LookupConfig`] names the lookup files and their columns

pub mod config;
pub mod csv_utils;
pub mod error;
pub mod insight;
pub mod library;
pub mod polars_utils;
pub mod reference;

pub use config::{DEFAULT_LOOKUP_DIR, LOOKUP_DIR_ENV_VAR, LookupConfig, LookupSpec};
pub use csv_utils::{CsvRows, read_csv_rows};
pub use error::{IngestError, Result};
pub use insight::{dataframe_to_table, read_table};
pub use library::load_synonym_library;
pub use reference::{
    ResolutionTables, load_column_library, load_end_products, load_reference,
    load_resolution_tables,
};
