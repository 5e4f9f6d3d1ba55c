//! Report persistence and report-level operations.

pub mod compile;
pub mod error;
pub mod frame;
pub mod naming;
pub mod split;

pub use compile::compile;
pub use error::{OutputError, Result};
pub use frame::{table_to_dataframe, to_csv_string, write_csv};
pub use naming::{
    OUTPUT_EXTENSION, STANDARDIZED_MARKER, UNASSIGNED, compiled_name, is_standardized,
    report_name, split_name, standardized_name,
};
pub use split::{RepGroup, split_by_representative};
