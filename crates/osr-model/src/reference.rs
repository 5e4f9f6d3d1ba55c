use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub key: String,
    pub value: String,
}

/// A read-only, ordered key→value lookup loaded from one reference file.
///
/// Order matters: lookups resolve ties by table position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTable {
    /// Human-readable source name (file or sheet), used in diagnostics.
    pub name: String,
    pub key_column: String,
    pub value_column: String,
    pub entries: Vec<ReferenceEntry>,
}

impl ReferenceTable {
    pub fn new(
        name: impl Into<String>,
        key_column: impl Into<String>,
        value_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            key_column: key_column.into(),
            value_column: value_column.into(),
            entries: Vec::new(),
        }
    }

    /// Builds a table from in-memory pairs; handy for fixtures.
    pub fn from_pairs<I, K, V>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new(name, "key", "value");
        for (key, value) in pairs {
            table.push(key, value);
        }
        table
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(ReferenceEntry {
            key: key.into(),
            value: value.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.value.as_str())
    }
}
