//! Sales representative resolution.
//!
//! A [`ReferenceSet`] indexes the customer map, the master account list and
//! the territory list once; a [`Resolver`] then assigns a representative and
//! at most one [`osr_model::Flag`] to every canonical row.

pub mod cascade;
pub mod error;
pub mod reference;
pub mod types;

pub use cascade::Resolver;
pub use error::{ResolveError, Result};
pub use reference::{ReferenceSet, parse_zip_key};
pub use types::{KeyConflict, Resolution, ResolutionSource, ResolutionSummary};
