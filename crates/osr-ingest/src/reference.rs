//! Reference lookup loading.

use std::path::Path;

use tracing::{debug, info};

use osr_map::{EndProductMap, SynonymLibrary};
use osr_model::ReferenceTable;

use crate::config::{LookupConfig, LookupSpec};
use crate::csv_utils::read_csv_rows;
use crate::error::{IngestError, Result};

/// Reads the key and value columns of one lookup file, in file order.
///
/// Rows blank in both columns are skipped.
pub fn load_reference(dir: &Path, spec: &LookupSpec) -> Result<ReferenceTable> {
    let path = dir.join(&spec.file);
    let rows = read_csv_rows(&path)?;
    let missing = |column: &str| IngestError::MissingColumn {
        path: path.clone(),
        column: column.to_string(),
    };
    let key_idx = rows
        .column(&spec.key_column)
        .ok_or_else(|| missing(&spec.key_column))?;
    let value_idx = rows
        .column(&spec.value_column)
        .ok_or_else(|| missing(&spec.value_column))?;

    let mut table = ReferenceTable::new(spec.name(), &spec.key_column, &spec.value_column);
    for row in 0..rows.records.len() {
        let key = rows.get(row, key_idx);
        let value = rows.get(row, value_idx);
        if key.is_empty() && value.is_empty() {
            continue;
        }
        table.push(key, value);
    }
    debug!(
        path = %path.display(),
        entries = table.len(),
        "loaded lookup"
    );
    Ok(table)
}

/// The three tables the resolution cascade needs.
#[derive(Debug, Clone)]
pub struct ResolutionTables {
    pub customers: ReferenceTable,
    pub accounts: ReferenceTable,
    pub territories: ReferenceTable,
}

pub fn load_resolution_tables(dir: &Path, config: &LookupConfig) -> Result<ResolutionTables> {
    let tables = ResolutionTables {
        customers: load_reference(dir, &config.customers)?,
        accounts: load_reference(dir, &config.accounts)?,
        territories: load_reference(dir, &config.territories)?,
    };
    info!(
        customers = tables.customers.len(),
        accounts = tables.accounts.len(),
        territories = tables.territories.len(),
        "resolution lookups loaded"
    );
    Ok(tables)
}

pub fn load_end_products(dir: &Path, config: &LookupConfig) -> Result<EndProductMap> {
    let table = load_reference(dir, &config.end_products)?;
    Ok(EndProductMap::from_reference(&table))
}

/// The configured library file, or the built-in synonyms when it is absent.
pub fn load_column_library(dir: &Path, config: &LookupConfig) -> Result<SynonymLibrary> {
    let path = dir.join(&config.column_library);
    if !path.exists() {
        debug!(path = %path.display(), "no column library file; using built-in synonyms");
        return Ok(SynonymLibrary::builtin());
    }
    crate::library::load_synonym_library(&path)
}
