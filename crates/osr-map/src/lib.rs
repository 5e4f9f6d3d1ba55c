//! Schema mapping for sales-order insight files.
//!
//! Raw provider headers are matched against a [`SynonymLibrary`] to build a
//! [`MappingPlan`]; [`SchemaMapper`] then copies, derives and normalizes
//! values into a canonical table.

pub mod derive;
pub mod end_product;
pub mod engine;
pub mod error;
pub mod standardize;
pub mod synonyms;
pub mod types;

pub use derive::DerivedField;
pub use end_product::EndProductMap;
pub use engine::MappingEngine;
pub use error::MappingError;
pub use standardize::SchemaMapper;
pub use synonyms::SynonymLibrary;
pub use types::{ColumnAssignment, MappingPlan};
