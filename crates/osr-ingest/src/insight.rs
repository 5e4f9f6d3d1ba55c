//! Insight and report file reading.

use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::{debug, info_span};

use osr_model::Table;

use crate::error::{IngestError, Result};
use crate::polars_utils::any_to_cell;

/// Reads a CSV insight file or standardized report into a [`Table`].
///
/// Every column is read as text so zip codes and part numbers keep their
/// leading zeros; normalization happens later.
pub fn read_table(path: &Path) -> Result<Table> {
    let span = info_span!("read_table", path = %path.display());
    let _guard = span.enter();

    if !path.exists() {
        return Err(IngestError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::polars(path, e))?
        .finish()
        .map_err(|e| IngestError::polars(path, e))?;

    let table = dataframe_to_table(&df).map_err(|e| IngestError::polars(path, e))?;
    debug!(
        rows = table.height(),
        columns = table.width(),
        "table read"
    );
    Ok(table)
}

/// Converts a data frame to a [`Table`], keeping column order.
pub fn dataframe_to_table(df: &DataFrame) -> polars::error::PolarsResult<Table> {
    let headers = df
        .get_column_names()
        .into_iter()
        .map(|name| name.trim_matches('\u{feff}').trim().to_string())
        .collect();
    let mut table = Table::new(headers);
    for row_idx in 0..df.height() {
        let mut row = Vec::with_capacity(df.width());
        for column in df.get_columns() {
            row.push(any_to_cell(column.get(row_idx)?));
        }
        table.push_row(row);
    }
    Ok(table)
}
