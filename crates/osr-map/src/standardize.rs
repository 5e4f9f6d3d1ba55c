//! Raw table → canonical table.

use std::time::Instant;

use tracing::{debug, info, info_span};

use osr_model::{
    CanonicalField, CanonicalRow, CanonicalSchema, CanonicalTable, CellValue, Provider, Table,
};
use osr_transform::{normalize_phone, normalize_zip};

use crate::derive::DerivedField;
use crate::end_product::EndProductMap;
use crate::engine::MappingEngine;
use crate::synonyms::SynonymLibrary;
use crate::types::MappingPlan;

/// Maps one provider's insight tables onto the canonical schema.
pub struct SchemaMapper<'a> {
    library: &'a SynonymLibrary,
    provider: Provider,
    schema: CanonicalSchema,
    end_products: Option<&'a EndProductMap>,
}

impl<'a> SchemaMapper<'a> {
    pub fn new(library: &'a SynonymLibrary, provider: Provider) -> Self {
        Self {
            library,
            provider,
            schema: CanonicalSchema::for_provider(provider),
            end_products: None,
        }
    }

    /// Enables the end-product prefill; ignored for providers without the
    /// `(Suggested) End Product` column.
    pub fn with_end_products(mut self, end_products: &'a EndProductMap) -> Self {
        self.end_products = Some(end_products);
        self
    }

    pub fn schema(&self) -> &CanonicalSchema {
        &self.schema
    }

    pub fn plan(&self, headers: &[String]) -> MappingPlan {
        MappingEngine::new(self.library, &self.schema).plan(headers)
    }

    /// Produces one canonical row per raw row, in input order.
    pub fn standardize(&self, raw: &Table) -> CanonicalTable {
        self.standardize_with_plan(raw).1
    }

    /// [`Self::standardize`], also returning the mapping plan it used.
    pub fn standardize_with_plan(&self, raw: &Table) -> (MappingPlan, CanonicalTable) {
        let span = info_span!(
            "standardize",
            provider = %self.provider.code(),
            row_count = raw.height()
        );
        let _guard = span.enter();
        let start = Instant::now();

        let plan = self.plan(&raw.headers);
        let first_name = plan.source_for(CanonicalField::FirstName);
        let last_name = plan.source_for(CanonicalField::LastName);
        let derived = DerivedField::detect(
            plan.has(CanonicalField::Quantity),
            plan.has(CanonicalField::UnitPrice),
            plan.has(CanonicalField::InvoicedDollars),
        );
        if let Some(derived) = derived {
            debug!(field = %derived.field(), "deriving missing amount column");
        }
        let end_products = self
            .end_products
            .filter(|_| self.provider.fills_end_product());

        let mut table = CanonicalTable::new(self.schema.clone());
        for row_idx in 0..raw.height() {
            let mut row = CanonicalRow::new();
            for assignment in &plan.assignments {
                if assignment.target.is_output() {
                    row.set(
                        assignment.target,
                        raw.cell(row_idx, assignment.source_index).clone(),
                    );
                }
            }

            if let (Some(first), Some(last)) = (first_name, last_name) {
                let full = format!(
                    "{} {}",
                    raw.cell(row_idx, first).render().trim(),
                    raw.cell(row_idx, last).render().trim()
                );
                row.set(CanonicalField::Name, CellValue::text(full.trim()));
            }

            if let Some(derived) = derived {
                let value = derived.compute(
                    row.get(CanonicalField::Quantity),
                    row.get(CanonicalField::UnitPrice),
                    row.get(CanonicalField::InvoicedDollars),
                );
                row.set(derived.field(), value);
            }

            if let Some(field) = self.provider.label_field() {
                row.set(field, CellValue::text(self.provider.label()));
            }

            normalize_field(&mut row, CanonicalField::ZipCode, normalize_zip);
            normalize_field(&mut row, CanonicalField::Phone, normalize_phone);

            if let Some(map) = end_products {
                let customer = row.text(CanonicalField::ReportedCustomer);
                let product = map
                    .lookup(&customer)
                    .map_or(CellValue::Missing, CellValue::text);
                row.set(CanonicalField::SuggestedEndProduct, product);
            }

            table.rows.push(row);
        }

        info!(
            mapped = plan.assignments.len(),
            unmapped = plan.unmapped_columns.len(),
            duration_ms = start.elapsed().as_millis(),
            "standardized insight table"
        );
        (plan, table)
    }
}

fn normalize_field(row: &mut CanonicalRow, field: CanonicalField, normalize: fn(&str) -> String) {
    let cell = row.get(field);
    if cell.is_missing() {
        return;
    }
    let normalized = normalize(&cell.render());
    row.set(field, CellValue::text(normalized));
}
