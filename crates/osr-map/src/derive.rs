//! Derivation of the one missing field among quantity, unit price and
//! invoiced dollars.

use osr_model::{CanonicalField, CellValue};
use osr_transform::parse_amount;

/// The amount field filled from the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedField {
    /// `quantity × unit price`
    InvoicedDollars,
    /// `invoiced / quantity`
    UnitPrice,
    /// `invoiced / unit price`
    Quantity,
}

impl DerivedField {
    pub fn field(&self) -> CanonicalField {
        match self {
            DerivedField::InvoicedDollars => CanonicalField::InvoicedDollars,
            DerivedField::UnitPrice => CanonicalField::UnitPrice,
            DerivedField::Quantity => CanonicalField::Quantity,
        }
    }

    /// Picks the field to derive given which columns the raw table has.
    ///
    /// Derivation happens only when exactly one of the three is absent.
    pub fn detect(has_quantity: bool, has_unit_price: bool, has_invoiced: bool) -> Option<Self> {
        match (has_quantity, has_unit_price, has_invoiced) {
            (true, true, false) => Some(DerivedField::InvoicedDollars),
            (true, false, true) => Some(DerivedField::UnitPrice),
            (false, true, true) => Some(DerivedField::Quantity),
            _ => None,
        }
    }

    /// Computes the derived cell; blank when an operand is blank,
    /// unparseable, or a zero divisor.
    pub fn compute(
        &self,
        quantity: &CellValue,
        unit_price: &CellValue,
        invoiced: &CellValue,
    ) -> CellValue {
        let result = match self {
            DerivedField::InvoicedDollars => {
                amount(quantity).zip(amount(unit_price)).map(|(q, p)| q * p)
            }
            DerivedField::UnitPrice => divide(amount(invoiced), amount(quantity)),
            DerivedField::Quantity => divide(amount(invoiced), amount(unit_price)),
        };
        result.map_or(CellValue::Missing, CellValue::Number)
    }
}

fn amount(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(value) if value.is_finite() => Some(*value),
        CellValue::Number(_) | CellValue::Missing => None,
        CellValue::Text(text) => parse_amount(text),
    }
}

fn divide(numerator: Option<f64>, divisor: Option<f64>) -> Option<f64> {
    let divisor = divisor.filter(|d| *d != 0.0)?;
    numerator.map(|n| n / divisor)
}
