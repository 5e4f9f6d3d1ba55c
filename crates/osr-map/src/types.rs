//! Column mapping types for provider-to-canonical mapping.

use serde::{Deserialize, Serialize};

use osr_model::CanonicalField;

/// A source column assigned to a canonical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAssignment {
    /// Position of the column in the raw table.
    pub source_index: usize,
    /// Header as it appeared in the raw table.
    pub source_column: String,
    pub target: CanonicalField,
}

/// Result of matching one raw header row against the canonical schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingPlan {
    /// Accepted assignments, in raw column order.
    pub assignments: Vec<ColumnAssignment>,
    /// Raw columns that matched nothing; their data is dropped.
    pub unmapped_columns: Vec<String>,
    /// Raw columns shadowed by a later column mapped to the same field.
    pub duplicate_columns: Vec<ColumnAssignment>,
}

impl MappingPlan {
    /// Raw column index feeding `field`, if any.
    pub fn source_for(&self, field: CanonicalField) -> Option<usize> {
        self.assignments
            .iter()
            .find(|assignment| assignment.target == field)
            .map(|assignment| assignment.source_index)
    }

    pub fn has(&self, field: CanonicalField) -> bool {
        self.source_for(field).is_some()
    }
}
