use std::path::Path;

use tracing::info;

use osr_map::SynonymLibrary;

use crate::csv_utils::read_csv_rows;
use crate::error::{IngestError, Result};

/// Loads a column library: each header names a canonical field and the
/// cells below it list synonyms. Blank headers and cells are ignored.
///
/// The file is the only synonym source: built-in synonyms are not merged in,
/// and a synonym listed under two fields of the file is an error.
pub fn load_synonym_library(path: &Path) -> Result<SynonymLibrary> {
    let rows = read_csv_rows(path)?;
    let columns = rows
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !header.is_empty())
        .map(|(idx, header)| {
            let synonyms = (0..rows.records.len())
                .map(|row| rows.get(row, idx).to_string())
                .filter(|value| !value.is_empty())
                .collect();
            (header.clone(), synonyms)
        });

    let mut library = SynonymLibrary::empty();
    library
        .extend_from_columns(columns)
        .map_err(|source| IngestError::Library {
            path: path.to_path_buf(),
            source,
        })?;
    info!(
        path = %path.display(),
        synonyms = library.len(),
        "column library loaded"
    );
    Ok(library)
}
