//! Canonical report columns.
//!
//! The canonical schema is fixed: every provider's insight file is mapped
//! onto these fields, and only the provider's extension columns vary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::provider::Provider;

/// A canonical column of the standardized report.
///
/// Declaration order is canonical output order; `FirstName` and `LastName`
/// come last because they are matching targets only and never appear in
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CanonicalField {
    Name,
    ReportedCustomer,
    CustomerClass,
    MustContact,
    SuggestedEndProduct,
    HowContacted,
    InformationForDigiKey,
    Address,
    City,
    State,
    ZipCode,
    Phone,
    Email,
    PartNumber,
    Description,
    Quantity,
    UnitPrice,
    InvoicedDollars,
    InvoiceDate,
    ReportedDistributor,
    Principal,
    Representative,
    Flag,
    FirstName,
    LastName,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 25] = [
        CanonicalField::Name,
        CanonicalField::ReportedCustomer,
        CanonicalField::CustomerClass,
        CanonicalField::MustContact,
        CanonicalField::SuggestedEndProduct,
        CanonicalField::HowContacted,
        CanonicalField::InformationForDigiKey,
        CanonicalField::Address,
        CanonicalField::City,
        CanonicalField::State,
        CanonicalField::ZipCode,
        CanonicalField::Phone,
        CanonicalField::Email,
        CanonicalField::PartNumber,
        CanonicalField::Description,
        CanonicalField::Quantity,
        CanonicalField::UnitPrice,
        CanonicalField::InvoicedDollars,
        CanonicalField::InvoiceDate,
        CanonicalField::ReportedDistributor,
        CanonicalField::Principal,
        CanonicalField::Representative,
        CanonicalField::Flag,
        CanonicalField::FirstName,
        CanonicalField::LastName,
    ];

    /// Column header as written in standardized reports.
    pub fn name(&self) -> &'static str {
        match self {
            CanonicalField::Name => "Name",
            CanonicalField::ReportedCustomer => "Reported Customer",
            CanonicalField::CustomerClass => "Customer Class",
            CanonicalField::MustContact => "Must Contact",
            CanonicalField::SuggestedEndProduct => "(Suggested) End Product",
            CanonicalField::HowContacted => "How Contacted",
            CanonicalField::InformationForDigiKey => "Information for Digi-Key",
            CanonicalField::Address => "Address",
            CanonicalField::City => "City",
            CanonicalField::State => "State",
            CanonicalField::ZipCode => "Zip Code",
            CanonicalField::Phone => "Phone",
            CanonicalField::Email => "Email",
            CanonicalField::PartNumber => "Part Number",
            CanonicalField::Description => "Description",
            CanonicalField::Quantity => "Quantity",
            CanonicalField::UnitPrice => "Unit Price",
            CanonicalField::InvoicedDollars => "Invoiced Dollars",
            CanonicalField::InvoiceDate => "Invoice Date",
            CanonicalField::ReportedDistributor => "Reported Distributor",
            CanonicalField::Principal => "Principal",
            CanonicalField::Representative => "OSR",
            CanonicalField::Flag => "Flag",
            CanonicalField::FirstName => "First Name",
            CanonicalField::LastName => "Last Name",
        }
    }

    /// Case-insensitive lookup by column header.
    pub fn from_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(trimmed))
    }

    /// False for the name-part fields that are merged into `Name` instead of
    /// being written out.
    pub fn is_output(&self) -> bool {
        !matches!(self, CanonicalField::FirstName | CanonicalField::LastName)
    }

    /// Fields whose value the resolution cascade owns.
    pub fn is_resolution_output(&self) -> bool {
        matches!(self, CanonicalField::Representative | CanonicalField::Flag)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CanonicalField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ModelError::UnknownField(s.trim().to_string()))
    }
}

/// Ordered output columns for one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalSchema {
    pub provider: Provider,
    pub fields: Vec<CanonicalField>,
}

impl CanonicalSchema {
    pub fn for_provider(provider: Provider) -> Self {
        let extensions = provider.extension_fields();
        let fields = CanonicalField::ALL
            .into_iter()
            .filter(|field| field.is_output())
            .filter(|field| !is_extension(*field) || extensions.contains(field))
            .collect();
        Self { provider, fields }
    }

    pub fn contains(&self, field: CanonicalField) -> bool {
        self.fields.contains(&field)
    }

    pub fn headers(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name().to_string()).collect()
    }
}

fn is_extension(field: CanonicalField) -> bool {
    Provider::ALL
        .iter()
        .any(|provider| provider.extension_fields().contains(&field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_schema_skips_name_parts_and_extensions() {
        let schema = CanonicalSchema::for_provider(Provider::Mouser);
        assert!(!schema.contains(CanonicalField::FirstName));
        assert!(!schema.contains(CanonicalField::MustContact));
        assert_eq!(schema.fields.first(), Some(&CanonicalField::Name));
        assert_eq!(schema.fields.last(), Some(&CanonicalField::Flag));
    }

    #[test]
    fn digikey_schema_inserts_feedback_columns_after_customer_class() {
        let schema = CanonicalSchema::for_provider(Provider::DigiKey);
        let headers = schema.headers();
        assert_eq!(
            &headers[2..7],
            &[
                "Customer Class",
                "Must Contact",
                "(Suggested) End Product",
                "How Contacted",
                "Information for Digi-Key",
            ]
        );
    }

    #[test]
    fn field_lookup_is_case_insensitive() {
        assert_eq!(CanonicalField::from_name("zip code"), Some(CanonicalField::ZipCode));
        assert_eq!(CanonicalField::from_name(" osr "), Some(CanonicalField::Representative));
        assert!("Zip".parse::<CanonicalField>().is_err());
    }
}
