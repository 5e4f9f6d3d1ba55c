//! Partition of a standardized report by representative.

use tracing::info;

use osr_model::{CanonicalField, Table};

use crate::error::{OutputError, Result};

/// Rows of one representative, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct RepGroup {
    /// Rendered `OSR` value; empty for rows with no representative.
    pub representative: String,
    pub table: Table,
}

/// Splits `table` into one group per distinct `OSR` value, in order of
/// first appearance. Each group keeps every column.
pub fn split_by_representative(table: &Table) -> Result<Vec<RepGroup>> {
    let column_name = CanonicalField::Representative.name();
    let column = table
        .column_index(column_name)
        .ok_or_else(|| OutputError::MissingColumn {
            column: column_name.to_string(),
        })?;

    let mut groups: Vec<RepGroup> = Vec::new();
    for (row_idx, row) in table.rows.iter().enumerate() {
        let representative = table.cell(row_idx, column).render().trim().to_string();
        let position = match groups
            .iter()
            .position(|group| group.representative == representative)
        {
            Some(position) => position,
            None => {
                groups.push(RepGroup {
                    representative,
                    table: Table::new(table.headers.clone()),
                });
                groups.len() - 1
            }
        };
        groups[position].table.push_row(row.clone());
    }

    info!(rows = table.height(), groups = groups.len(), "split by representative");
    Ok(groups)
}
