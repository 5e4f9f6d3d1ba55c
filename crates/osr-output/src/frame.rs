//! Table → polars frame → CSV.

use std::fs::File;
use std::path::Path;

use polars::prelude::{Column, CsvWriter, DataFrame, IntoColumn, NamedFrom, SerWriter, Series};
use tracing::debug;

use osr_model::{CellValue, Table};

use crate::error::{OutputError, Result};

/// Builds a string frame; missing cells become nulls and write as empty
/// fields.
pub fn table_to_dataframe(table: &Table) -> Result<DataFrame> {
    let columns: Vec<Column> = table
        .headers
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            let values: Vec<Option<String>> = (0..table.height())
                .map(|row| match table.cell(row, idx) {
                    CellValue::Missing => None,
                    cell => Some(cell.render()),
                })
                .collect();
            Series::new(header.as_str().into(), values).into_column()
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}

fn write_frame<W: std::io::Write>(writer: &mut W, table: &Table) -> Result<()> {
    let mut df = table_to_dataframe(table)?;
    CsvWriter::new(writer).include_header(true).finish(&mut df)?;
    Ok(())
}

/// Renders a table as CSV text.
pub fn to_csv_string(table: &Table) -> Result<String> {
    let mut buf = Vec::new();
    write_frame(&mut buf, table)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes a table to `path`, creating parent directories.
pub fn write_csv(path: &Path, table: &Table) -> Result<()> {
    let io_err = |source: std::io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut file = File::create(path).map_err(io_err)?;
    write_frame(&mut file, table)?;
    debug!(path = %path.display(), rows = table.height(), "wrote CSV");
    Ok(())
}
