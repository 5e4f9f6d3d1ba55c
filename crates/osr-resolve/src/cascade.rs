//! The representative resolution cascade.
//!
//! Tiers run in order and stop at the first success:
//!
//! 1. an empty customer is an individual order and skips to tier 4;
//! 2. the customer is mapped to its proper name;
//! 3. the proper name is looked up in the account list;
//! 4. the zip code is looked up in the territory list.
//!
//! A failure in tiers 1-3 leaves its flag on the row even when tier 4 finds
//! a representative. An out-of-territory result replaces any earlier flag.

use std::time::Instant;

use rayon::prelude::{IntoParallelIterator, ParallelIterator};
use tracing::{info, info_span, trace};

use osr_model::{CanonicalField, CanonicalRow, CanonicalTable, Flag, fold_case};

use crate::reference::ReferenceSet;
use crate::types::{Resolution, ResolutionSummary};

/// Resolves rows against a borrowed, immutable [`ReferenceSet`].
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    references: &'a ReferenceSet,
}

/// Outcome of tiers 1-3.
enum AccountOutcome {
    Found(String),
    Failed(Flag),
}

impl<'a> Resolver<'a> {
    pub fn new(references: &'a ReferenceSet) -> Self {
        Self { references }
    }

    /// Runs the cascade for one customer / zip pair.
    pub fn resolve(&self, customer: &str, zip: &str) -> Resolution {
        match self.resolve_account(customer) {
            AccountOutcome::Found(representative) => Resolution::account(&representative),
            AccountOutcome::Failed(flag) => self.resolve_territory(zip, flag),
        }
    }

    fn resolve_account(&self, customer: &str) -> AccountOutcome {
        let customer = fold_case(customer);
        if customer.is_empty() {
            return AccountOutcome::Failed(Flag::Individual);
        }

        let proper_name = if self.references.is_proper_name(&customer) {
            customer
        } else {
            let Some(candidates) = self.references.proper_names_for(&customer) else {
                return AccountOutcome::Failed(Flag::CustomerNotFound);
            };
            match candidates.iter().find(|name| !name.is_empty()) {
                Some(name) => name.clone(),
                None => return AccountOutcome::Failed(Flag::ProperNameNotAssociated),
            }
        };

        match self.references.account_representative(&proper_name) {
            Some(representative) => AccountOutcome::Found(representative.to_string()),
            None => AccountOutcome::Failed(Flag::ProperNameNotFound),
        }
    }

    fn resolve_territory(&self, zip: &str, flag: Flag) -> Resolution {
        let Some(zip) = territory_zip(zip) else {
            return Resolution::out_of_territory();
        };
        match self.references.territory_representative(zip) {
            Some(representative) => Resolution::territory(representative, Some(flag)),
            None => Resolution::out_of_territory(),
        }
    }

    /// Resolves a row and writes its representative and flag.
    pub fn resolve_row(&self, mut row: CanonicalRow) -> (CanonicalRow, Resolution) {
        let resolution = self.resolve(
            &row.text(CanonicalField::ReportedCustomer),
            &row.text(CanonicalField::ZipCode),
        );
        trace!(
            source = ?resolution.source,
            flag = ?resolution.flag,
            "row resolved"
        );
        row.representative.clone_from(&resolution.representative);
        row.flag = resolution.flag;
        (row, resolution)
    }

    /// Resolves every row in order on the current thread.
    pub fn resolve_table(&self, table: CanonicalTable) -> (CanonicalTable, ResolutionSummary) {
        let span = info_span!("resolve", row_count = table.height(), parallel = false);
        let _guard = span.enter();
        let start = Instant::now();

        let CanonicalTable { schema, rows } = table;
        let mut summary = ResolutionSummary::default();
        let mut resolved = Vec::with_capacity(rows.len());
        for row in rows {
            let (row, resolution) = self.resolve_row(row);
            summary.record(&resolution);
            resolved.push(row);
        }

        log_summary(&summary, start);
        (CanonicalTable { schema, rows: resolved }, summary)
    }

    /// Resolves rows on the rayon pool. Output order and values match
    /// [`Resolver::resolve_table`].
    pub fn resolve_table_parallel(
        &self,
        table: CanonicalTable,
    ) -> (CanonicalTable, ResolutionSummary) {
        let span = info_span!("resolve", row_count = table.height(), parallel = true);
        let _guard = span.enter();
        let start = Instant::now();

        let CanonicalTable { schema, rows } = table;
        let results: Vec<(CanonicalRow, Resolution)> = rows
            .into_par_iter()
            .map(|row| self.resolve_row(row))
            .collect();

        let mut summary = ResolutionSummary::default();
        let mut resolved = Vec::with_capacity(results.len());
        for (row, resolution) in results {
            summary.record(&resolution);
            resolved.push(row);
        }

        log_summary(&summary, start);
        (CanonicalTable { schema, rows: resolved }, summary)
    }
}

fn log_summary(summary: &ResolutionSummary, start: Instant) {
    info!(
        rows = summary.rows,
        resolved = summary.assigned(),
        flagged = summary.by_flag.values().sum::<usize>(),
        duration_ms = start.elapsed().as_millis(),
        "representatives resolved"
    );
}

/// Five-digit territory key from a stored zip: `XXXXX-XXXX` keeps its first
/// five characters; anything not five characters long is out of territory.
fn territory_zip(zip: &str) -> Option<i64> {
    let zip: String = if zip.chars().count() == 10 {
        zip.chars().take(5).collect()
    } else {
        zip.to_string()
    };
    if zip.chars().count() != 5 {
        return None;
    }
    zip.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn territory_zip_accepts_five_and_ten_character_forms() {
        assert_eq!(territory_zip("92101"), Some(92101));
        assert_eq!(territory_zip("92101-1234"), Some(92101));
        assert_eq!(territory_zip("02134"), Some(2134));
        assert_eq!(territory_zip("9210"), None);
        assert_eq!(territory_zip("921011234"), None);
        assert_eq!(territory_zip("ABCDE"), None);
        assert_eq!(territory_zip(""), None);
    }
}
