//! Mapping engine: matches raw headers against the canonical schema.

use tracing::{debug, warn};

use osr_model::CanonicalSchema;

use crate::synonyms::SynonymLibrary;
use crate::types::{ColumnAssignment, MappingPlan};

/// Builds a [`MappingPlan`] for one provider schema.
pub struct MappingEngine<'a> {
    library: &'a SynonymLibrary,
    schema: &'a CanonicalSchema,
}

impl<'a> MappingEngine<'a> {
    pub fn new(library: &'a SynonymLibrary, schema: &'a CanonicalSchema) -> Self {
        Self { library, schema }
    }

    /// Assigns each raw column to at most one canonical field.
    ///
    /// Columns are visited in input order. When two columns name the same
    /// field the later one wins; the earlier one is recorded as a shadowed
    /// duplicate.
    pub fn plan(&self, headers: &[String]) -> MappingPlan {
        let mut plan = MappingPlan::default();

        for (source_index, header) in headers.iter().enumerate() {
            let Some(target) = self.library.match_field(header, self.schema) else {
                debug!(column = %header, "unmapped column dropped");
                plan.unmapped_columns.push(header.clone());
                continue;
            };
            if let Some(position) = plan
                .assignments
                .iter()
                .position(|assignment| assignment.target == target)
            {
                let shadowed = plan.assignments.remove(position);
                warn!(
                    column = %header,
                    shadowed = %shadowed.source_column,
                    target = %target,
                    "column replaces an earlier column mapped to the same field"
                );
                plan.duplicate_columns.push(shadowed);
            }
            plan.assignments.push(ColumnAssignment {
                source_index,
                source_column: header.clone(),
                target,
            });
        }

        debug!(
            mapped = plan.assignments.len(),
            unmapped = plan.unmapped_columns.len(),
            duplicates = plan.duplicate_columns.len(),
            "mapping plan built"
        );
        plan
    }
}
