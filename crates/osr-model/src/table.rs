use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flag::Flag;
use crate::schema::{CanonicalField, CanonicalSchema};

static MISSING: CellValue = CellValue::Missing;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    /// Builds a cell from raw text; blank text becomes `Missing`.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Text(value) => value.trim().is_empty(),
            CellValue::Number(value) => value.is_nan(),
        }
    }

    /// Rendered form used for comparisons and report output.
    pub fn render(&self) -> String {
        match self {
            CellValue::Text(value) => value.clone(),
            CellValue::Number(value) => format_numeric(*value),
            CellValue::Missing => String::new(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Formats a floating-point number without trailing zeros.
///
/// ```
/// use osr_model::format_numeric;
///
/// assert_eq!(format_numeric(10.0), "10");
/// assert_eq!(format_numeric(2.50), "2.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// A header row plus ordered data rows, as read from an insight file or a
/// previously standardized report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Pushes a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.headers.len(), CellValue::Missing);
        self.rows.push(row);
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Position of a column, matched case-insensitively.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(name))
    }

    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&MISSING)
    }
}

/// One order row in canonical form.
///
/// The representative and flag are typed outputs owned by the resolution
/// cascade; every other field lives in `cells`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRow {
    pub cells: BTreeMap<CanonicalField, CellValue>,
    pub representative: Option<String>,
    pub flag: Option<Flag>,
}

impl CanonicalRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: CanonicalField) -> &CellValue {
        self.cells.get(&field).unwrap_or(&MISSING)
    }

    /// Rendered text of a field; empty when missing.
    pub fn text(&self, field: CanonicalField) -> String {
        match field {
            CanonicalField::Representative => self.representative.clone().unwrap_or_default(),
            CanonicalField::Flag => self.flag.map(|f| f.label().to_string()).unwrap_or_default(),
            _ => self.get(field).render(),
        }
    }

    pub fn set(&mut self, field: CanonicalField, value: CellValue) {
        self.cells.insert(field, value);
    }

    pub fn with(mut self, field: CanonicalField, value: impl Into<CellValue>) -> Self {
        self.set(field, value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTable {
    pub schema: CanonicalSchema,
    pub rows: Vec<CanonicalRow>,
}

impl CanonicalTable {
    pub fn new(schema: CanonicalSchema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Flattens to a generic table in schema column order.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(self.schema.headers());
        for row in &self.rows {
            let cells = self
                .schema
                .fields
                .iter()
                .map(|field| match field {
                    CanonicalField::Representative | CanonicalField::Flag => {
                        CellValue::text(row.text(*field))
                    }
                    _ => row.get(*field).clone(),
                })
                .collect();
            table.push_row(cells);
        }
        table
    }
}
