//! Shared CSV reading for lookup files.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Header row plus trimmed records of a CSV file.
#[derive(Debug, Clone, Default)]
pub struct CsvRows {
    pub headers: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl CsvRows {
    /// Position of a header, ignoring case and surrounding whitespace.
    pub fn column(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// Cell at `(row, column)`; empty for short records.
    pub fn get(&self, row: usize, column: usize) -> &str {
        self.records
            .get(row)
            .and_then(|record| record.get(column))
            .map_or("", String::as_str)
    }
}

/// Reads a CSV file, stripping a byte-order mark and trimming every value.
/// Records may be shorter or longer than the header row.
pub fn read_csv_rows(path: &Path) -> Result<CsvRows> {
    if !path.exists() {
        return Err(IngestError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| IngestError::csv(path, e))?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::csv(path, e))?;
        records.push(record.iter().map(|value| value.trim().to_string()).collect());
    }
    Ok(CsvRows { headers, records })
}
