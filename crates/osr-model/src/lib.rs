//! Data model for standardized sales-order reports.

pub mod error;
pub mod flag;
pub mod lookup;
pub mod provider;
pub mod reference;
pub mod schema;
pub mod table;

pub use error::{ModelError, Result};
pub use flag::Flag;
pub use lookup::fold_case;
pub use provider::Provider;
pub use reference::{ReferenceEntry, ReferenceTable};
pub use schema::{CanonicalField, CanonicalSchema};
pub use table::{CanonicalRow, CanonicalTable, CellValue, Table, format_numeric};
