//! Ordered concatenation of reports that share one column layout.

use tracing::info;

use osr_model::Table;

use crate::error::{OutputError, Result};

/// Appends every table's rows to a copy of the first table.
///
/// Every table must have exactly the first table's columns, in the same
/// order. Header comparison is exact.
pub fn compile(tables: &[Table]) -> Result<Table> {
    let first = tables.first().ok_or(OutputError::EmptyInput)?;
    let expected = &first.headers;

    for (idx, table) in tables.iter().enumerate() {
        let position = idx + 1;
        if table.width() != expected.len() {
            return Err(OutputError::ColumnCountMismatch {
                table: position,
                expected: expected.len(),
                found: table.width(),
            });
        }
        if let Some((column, (want, got))) = expected
            .iter()
            .zip(&table.headers)
            .enumerate()
            .find(|(_, (want, got))| want != got)
        {
            return Err(OutputError::ColumnMismatch {
                table: position,
                position: column + 1,
                expected: want.clone(),
                found: got.clone(),
            });
        }
    }

    let mut compiled = Table::new(expected.clone());
    for table in tables {
        compiled.rows.extend(table.rows.iter().cloned());
    }
    info!(
        tables = tables.len(),
        rows = compiled.height(),
        "compiled reports"
    );
    Ok(compiled)
}
