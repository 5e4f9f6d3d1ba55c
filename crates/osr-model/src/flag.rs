//! Diagnostic flags attached to rows whose representative could not be
//! resolved with confidence.
//!
//! The set is closed: the resolution cascade is the only writer, and report
//! writers switch on the variant to decide how a row is presented.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Outcome classification for a row that failed some stage of rep resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    /// Zip code missing from the territory table, or malformed.
    OutOfTerritory,
    /// Reported customer absent from the customer map (a new account).
    CustomerNotFound,
    /// No company reported; the order belongs to a person.
    Individual,
    /// Customer found in the customer map, but every match has a blank proper name.
    ProperNameNotAssociated,
    /// Proper name resolved, but absent from the master account list.
    ProperNameNotFound,
}

impl Flag {
    pub const ALL: [Flag; 5] = [
        Flag::OutOfTerritory,
        Flag::CustomerNotFound,
        Flag::Individual,
        Flag::ProperNameNotAssociated,
        Flag::ProperNameNotFound,
    ];

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Flag::OutOfTerritory => "OUT_OF_TERRITORY",
            Flag::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Flag::Individual => "INDIVIDUAL",
            Flag::ProperNameNotAssociated => "PROPER_NAME_NOT_ASSOCIATED",
            Flag::ProperNameNotFound => "PROPER_NAME_NOT_FOUND",
        }
    }

    /// Label written into the `Flag` column of standardized reports.
    pub fn label(&self) -> &'static str {
        match self {
            Flag::OutOfTerritory => "Out of territory",
            Flag::CustomerNotFound => "New account",
            Flag::Individual => "Individual",
            Flag::ProperNameNotAssociated => "No proper name associated",
            Flag::ProperNameNotFound => "Proper name not found",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Flag {
    type Err = ModelError;

    /// Accepts either the code (`OUT_OF_TERRITORY`) or the report label
    /// (`Out of territory`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Flag::ALL
            .into_iter()
            .find(|flag| {
                flag.code().eq_ignore_ascii_case(trimmed)
                    || flag.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ModelError::UnknownFlag(trimmed.to_string()))
    }
}
