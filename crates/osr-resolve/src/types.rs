//! Resolution outcomes and run summaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use osr_model::Flag;

/// Which lookup supplied the representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Customer → proper name → account list.
    AccountList,
    /// Zip code → territory list.
    Territory,
    Unresolved,
}

/// Outcome of the cascade for one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub representative: Option<String>,
    pub flag: Option<Flag>,
    pub source: ResolutionSource,
}

impl Resolution {
    pub(crate) fn account(representative: &str) -> Self {
        Self {
            representative: non_empty(representative),
            flag: None,
            source: ResolutionSource::AccountList,
        }
    }

    pub(crate) fn territory(representative: &str, flag: Option<Flag>) -> Self {
        Self {
            representative: non_empty(representative),
            flag,
            source: ResolutionSource::Territory,
        }
    }

    pub(crate) fn out_of_territory() -> Self {
        Self {
            representative: None,
            flag: Some(Flag::OutOfTerritory),
            source: ResolutionSource::Unresolved,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// A key listed more than once in a reference table with different values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConflict {
    pub table: String,
    pub key: String,
    /// Value that lookups use.
    pub kept: String,
    pub ignored: String,
}

/// Row counts per source and per flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSummary {
    pub rows: usize,
    pub by_source: BTreeMap<ResolutionSource, usize>,
    pub by_flag: BTreeMap<Flag, usize>,
}

impl ResolutionSummary {
    pub fn record(&mut self, resolution: &Resolution) {
        self.rows += 1;
        *self.by_source.entry(resolution.source).or_default() += 1;
        if let Some(flag) = resolution.flag {
            *self.by_flag.entry(flag).or_default() += 1;
        }
    }

    pub fn source_count(&self, source: ResolutionSource) -> usize {
        self.by_source.get(&source).copied().unwrap_or_default()
    }

    pub fn flag_count(&self, flag: Flag) -> usize {
        self.by_flag.get(&flag).copied().unwrap_or_default()
    }

    /// Rows resolved by either lookup.
    pub fn assigned(&self) -> usize {
        self.source_count(ResolutionSource::AccountList)
            + self.source_count(ResolutionSource::Territory)
    }
}

impl FromIterator<Resolution> for ResolutionSummary {
    fn from_iter<I: IntoIterator<Item = Resolution>>(iter: I) -> Self {
        let mut summary = Self::default();
        for resolution in iter {
            summary.record(&resolution);
        }
        summary
    }
}
