//! Synonym library: the raw header names accepted for each canonical field.

use std::collections::{BTreeMap, BTreeSet};

use osr_model::{CanonicalField, CanonicalSchema, fold_case};

use crate::error::MappingError;

/// Header spellings seen in distributor and principal insight files.
const BUILTIN_SYNONYMS: &[(CanonicalField, &[&str])] = &[
    (
        CanonicalField::Name,
        &["customer name", "contact name", "contact", "full name", "end user name"],
    ),
    (
        CanonicalField::ReportedCustomer,
        &[
            "customer",
            "company",
            "company name",
            "end customer",
            "account name",
            "customer company",
            "ship to company",
        ],
    ),
    (
        CanonicalField::CustomerClass,
        &["class", "customer type", "market", "segment"],
    ),
    (CanonicalField::SuggestedEndProduct, &["end product", "suggested end product"]),
    (CanonicalField::HowContacted, &["contact method"]),
    (
        CanonicalField::InformationForDigiKey,
        &["information for digikey", "notes for digi-key"],
    ),
    (
        CanonicalField::Address,
        &["address 1", "street", "street address", "ship to address"],
    ),
    (CanonicalField::City, &["ship to city", "town"]),
    (CanonicalField::State, &["st", "province", "ship to state"]),
    (
        CanonicalField::ZipCode,
        &["zip", "zipcode", "postal code", "postcode", "zip/postal code", "ship to zip"],
    ),
    (
        CanonicalField::Phone,
        &["phone number", "telephone", "tel", "contact phone"],
    ),
    (CanonicalField::Email, &["e-mail", "email address", "contact email"]),
    (
        CanonicalField::PartNumber,
        &["part", "part #", "mpn", "manufacturer part number", "mfr part number", "item"],
    ),
    (
        CanonicalField::Description,
        &["part description", "product description", "item description"],
    ),
    (
        CanonicalField::Quantity,
        &["qty", "quantity shipped", "ship qty", "units"],
    ),
    (
        CanonicalField::UnitPrice,
        &["price", "unit cost", "resale", "unit resale"],
    ),
    (
        CanonicalField::InvoicedDollars,
        &[
            "extended price",
            "ext price",
            "extended resale",
            "invoice amount",
            "sales",
            "total",
        ],
    ),
    (
        CanonicalField::InvoiceDate,
        &["date", "ship date", "order date", "invoice dt"],
    ),
    (CanonicalField::ReportedDistributor, &["distributor", "disti"]),
    (CanonicalField::Principal, &["manufacturer", "mfr", "supplier"]),
    (
        CanonicalField::FirstName,
        &["first", "fname", "contact first name"],
    ),
    (
        CanonicalField::LastName,
        &["last", "lname", "surname", "contact last name"],
    ),
];

/// Case-folded synonyms per canonical field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymLibrary {
    synonyms: BTreeMap<CanonicalField, BTreeSet<String>>,
}

impl Default for SynonymLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SynonymLibrary {
    /// A library that only matches canonical names.
    pub fn empty() -> Self {
        Self {
            synonyms: BTreeMap::new(),
        }
    }

    /// Default synonyms, used when no column library file exists.
    pub fn builtin() -> Self {
        let mut library = Self::empty();
        for (field, names) in BUILTIN_SYNONYMS {
            for name in *names {
                library.insert(*field, name);
            }
        }
        library
    }

    fn insert(&mut self, field: CanonicalField, synonym: &str) {
        let folded = fold_case(synonym);
        if folded.is_empty() {
            return;
        }
        self.synonyms.entry(field).or_default().insert(folded);
    }

    /// Adds a synonym, rejecting one already claimed by another field.
    pub fn add(&mut self, field: CanonicalField, synonym: &str) -> Result<(), MappingError> {
        if let Some(owner) = self.owner_of(synonym)
            && owner != field
        {
            return Err(MappingError::AmbiguousSynonym {
                synonym: synonym.trim().to_string(),
                first: owner.name().to_string(),
                second: field.name().to_string(),
            });
        }
        self.insert(field, synonym);
        Ok(())
    }

    /// Extends the library from `(column header, synonyms)` pairs, as laid
    /// out in a root column library file.
    pub fn extend_from_columns<I>(&mut self, columns: I) -> Result<(), MappingError>
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        for (header, names) in columns {
            let field = CanonicalField::from_name(&header).ok_or_else(|| {
                MappingError::UnknownCanonicalColumn {
                    column: header.trim().to_string(),
                }
            })?;
            for name in names {
                self.add(field, &name)?;
            }
        }
        Ok(())
    }

    pub fn synonyms(&self, field: CanonicalField) -> impl Iterator<Item = &str> {
        self.synonyms
            .get(&field)
            .into_iter()
            .flat_map(|set| set.iter().map(String::as_str))
    }

    /// Total number of synonyms across all fields.
    pub fn len(&self) -> usize {
        self.synonyms.values().map(BTreeSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn owner_of(&self, synonym: &str) -> Option<CanonicalField> {
        let folded = fold_case(synonym);
        self.synonyms
            .iter()
            .find(|(_, set)| set.contains(&folded))
            .map(|(field, _)| *field)
    }

    /// True when `raw` is the canonical name of `field` or one of its synonyms.
    pub fn matches(&self, field: CanonicalField, raw: &str) -> bool {
        let folded = fold_case(raw);
        if folded.is_empty() {
            return false;
        }
        fold_case(field.name()) == folded
            || self
                .synonyms
                .get(&field)
                .is_some_and(|set| set.contains(&folded))
    }

    /// First field in canonical order that `raw` names.
    ///
    /// Only fields of `schema` plus the name parts are candidates; the
    /// representative and flag columns belong to resolution and are never
    /// filled from input.
    pub fn match_field(&self, raw: &str, schema: &CanonicalSchema) -> Option<CanonicalField> {
        CanonicalField::ALL
            .into_iter()
            .filter(|field| !field.is_resolution_output())
            .filter(|field| !field.is_output() || schema.contains(*field))
            .find(|field| self.matches(*field, raw))
    }
}
