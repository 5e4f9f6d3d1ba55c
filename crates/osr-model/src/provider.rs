use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::schema::CanonicalField;

const DIGIKEY_FEEDBACK: [CanonicalField; 4] = [
    CanonicalField::MustContact,
    CanonicalField::SuggestedEndProduct,
    CanonicalField::HowContacted,
    CanonicalField::InformationForDigiKey,
];

/// Upstream company that produced an insight file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    DigiKey,
    Mouser,
    Abracon,
    NotAssigned,
}

impl Provider {
    pub const ALL: [Provider; 4] = [
        Provider::DigiKey,
        Provider::Mouser,
        Provider::Abracon,
        Provider::NotAssigned,
    ];

    /// Short code used on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Provider::DigiKey => "DGK",
            Provider::Mouser => "MOU",
            Provider::Abracon => "ABR",
            Provider::NotAssigned => "NA",
        }
    }

    /// Display label written into the distributor/principal column.
    pub fn label(&self) -> &'static str {
        match self {
            Provider::DigiKey => "Digi-Key",
            Provider::Mouser => "Mouser",
            Provider::Abracon => "Abracon",
            Provider::NotAssigned => "Not Assigned",
        }
    }

    /// Column that receives the provider label: distributors report through
    /// `Reported Distributor`, principals through `Principal`.
    pub fn label_field(&self) -> Option<CanonicalField> {
        match self {
            Provider::DigiKey | Provider::Mouser => Some(CanonicalField::ReportedDistributor),
            Provider::Abracon => Some(CanonicalField::Principal),
            Provider::NotAssigned => None,
        }
    }

    /// Provider-only columns added to the canonical schema.
    pub fn extension_fields(&self) -> &'static [CanonicalField] {
        match self {
            Provider::DigiKey => &DIGIKEY_FEEDBACK,
            _ => &[],
        }
    }

    pub fn fills_end_product(&self) -> bool {
        self.extension_fields()
            .contains(&CanonicalField::SuggestedEndProduct)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Provider {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Provider::ALL
            .into_iter()
            .find(|provider| {
                provider.code().eq_ignore_ascii_case(trimmed)
                    || provider.label().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| ModelError::UnknownProvider(trimmed.to_string()))
    }
}
