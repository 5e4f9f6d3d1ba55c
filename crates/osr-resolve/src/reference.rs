//! Immutable lookup indices built once per run from the three reference
//! tables.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use osr_model::{ReferenceTable, fold_case};

use crate::error::{ResolveError, Result};
use crate::types::KeyConflict;

/// Customer map, account list and territory list, indexed for the cascade.
#[derive(Debug, Clone)]
pub struct ReferenceSet {
    /// Folded proper names listed in the customer map's value column.
    mapped_proper_names: HashSet<String>,
    /// Folded customer → folded proper names, in table order.
    customers: HashMap<String, Vec<String>>,
    /// Folded proper name → representative; first entry wins.
    accounts: HashMap<String, String>,
    /// Zip code → representative; first entry wins.
    territories: HashMap<i64, String>,
    skipped_territory_keys: usize,
    conflicts: Vec<KeyConflict>,
}

impl ReferenceSet {
    /// Indexes the three tables.
    ///
    /// Fails when the territory table yields no integer zip keys. Territory
    /// keys that do not parse are skipped; conflicting duplicate keys are
    /// recorded but never change which entry a lookup returns.
    pub fn new(
        customers: &ReferenceTable,
        accounts: &ReferenceTable,
        territories: &ReferenceTable,
    ) -> Result<Self> {
        let mut conflicts = Vec::new();

        let mut mapped_proper_names = HashSet::new();
        let mut customer_index: HashMap<String, Vec<String>> = HashMap::new();
        let mut customer_first = HashMap::new();
        for entry in &customers.entries {
            let key = fold_case(&entry.key);
            let proper_name = fold_case(&entry.value);
            if !proper_name.is_empty() {
                mapped_proper_names.insert(proper_name.clone());
                note_conflict(
                    &mut customer_first,
                    &mut conflicts,
                    &customers.name,
                    &key,
                    entry.value.trim(),
                    &proper_name,
                );
            }
            customer_index.entry(key).or_default().push(proper_name);
        }

        let mut account_index = HashMap::new();
        let mut account_first = HashMap::new();
        for entry in &accounts.entries {
            let key = fold_case(&entry.key);
            let representative = entry.value.trim();
            if !representative.is_empty() {
                note_conflict(
                    &mut account_first,
                    &mut conflicts,
                    &accounts.name,
                    &key,
                    representative,
                    representative,
                );
            }
            account_index
                .entry(key)
                .or_insert_with(|| representative.to_string());
        }

        let mut territory_index = HashMap::new();
        let mut territory_first = HashMap::new();
        let mut skipped_territory_keys = 0;
        for entry in &territories.entries {
            let Some(zip) = parse_zip_key(&entry.key) else {
                skipped_territory_keys += 1;
                warn!(
                    table = %territories.name,
                    key = %entry.key,
                    "territory key is not an integer zip code; skipped"
                );
                continue;
            };
            let representative = entry.value.trim();
            if !representative.is_empty() {
                note_conflict(
                    &mut territory_first,
                    &mut conflicts,
                    &territories.name,
                    &zip.to_string(),
                    representative,
                    representative,
                );
            }
            territory_index
                .entry(zip)
                .or_insert_with(|| representative.to_string());
        }

        if territory_index.is_empty() {
            return Err(ResolveError::EmptyTerritoryTable {
                table: territories.name.clone(),
            });
        }

        debug!(
            customers = customer_index.len(),
            accounts = account_index.len(),
            territories = territory_index.len(),
            skipped_territory_keys,
            conflicts = conflicts.len(),
            "reference set indexed"
        );

        Ok(Self {
            mapped_proper_names,
            customers: customer_index,
            accounts: account_index,
            territories: territory_index,
            skipped_territory_keys,
            conflicts,
        })
    }

    /// True when `customer` already is a proper name: it appears in the
    /// customer map's value column or among the account list keys.
    pub(crate) fn is_proper_name(&self, folded_customer: &str) -> bool {
        self.mapped_proper_names.contains(folded_customer)
            || self.accounts.contains_key(folded_customer)
    }

    /// Proper names mapped from `customer`, in table order; `None` when the
    /// customer is absent from the map.
    pub(crate) fn proper_names_for(&self, folded_customer: &str) -> Option<&[String]> {
        self.customers.get(folded_customer).map(Vec::as_slice)
    }

    pub(crate) fn account_representative(&self, folded_proper_name: &str) -> Option<&str> {
        self.accounts.get(folded_proper_name).map(String::as_str)
    }

    pub(crate) fn territory_representative(&self, zip: i64) -> Option<&str> {
        self.territories.get(&zip).map(String::as_str)
    }

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn territory_count(&self) -> usize {
        self.territories.len()
    }

    pub fn skipped_territory_keys(&self) -> usize {
        self.skipped_territory_keys
    }

    pub fn conflicts(&self) -> &[KeyConflict] {
        &self.conflicts
    }
}

/// Records `key → value` unless an earlier entry already claimed the key;
/// a claimed key with a different `compare` form is a conflict.
fn note_conflict(
    first: &mut HashMap<String, (String, String)>,
    conflicts: &mut Vec<KeyConflict>,
    table: &str,
    key: &str,
    value: &str,
    compare: &str,
) {
    match first.get(key) {
        Some((kept, kept_compare)) => {
            if kept_compare != compare {
                warn!(
                    table = %table,
                    key = %key,
                    kept = %kept,
                    ignored = %value,
                    "duplicate key with a different value; first entry kept"
                );
                conflicts.push(KeyConflict {
                    table: table.to_string(),
                    key: key.to_string(),
                    kept: kept.clone(),
                    ignored: value.to_string(),
                });
            }
        }
        None => {
            first.insert(key.to_string(), (value.to_string(), compare.to_string()));
        }
    }
}

/// Parses a territory key. Spreadsheet exports sometimes store zips as
/// floats (`2134.0`); those are accepted when integral.
pub fn parse_zip_key(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_and_integral_float_keys() {
        assert_eq!(parse_zip_key("92101"), Some(92101));
        assert_eq!(parse_zip_key(" 2134.0 "), Some(2134));
        assert_eq!(parse_zip_key("2134.5"), None);
        assert_eq!(parse_zip_key("ABCDE"), None);
        assert_eq!(parse_zip_key(""), None);
    }
}
