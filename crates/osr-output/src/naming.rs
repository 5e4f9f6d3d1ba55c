//! Output file names.

use std::path::Path;

/// Extension written by every output.
pub const OUTPUT_EXTENSION: &str = "csv";

/// Group name used for rows without a representative.
pub const UNASSIGNED: &str = "Unassigned";

/// Marker in the names of standardized reports.
pub const STANDARDIZED_MARKER: &str = "Standardized";

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// True when the file name marks a standardized report.
pub fn is_standardized(path: &Path) -> bool {
    file_name(path).contains(STANDARDIZED_MARKER)
}

/// `insight.csv` → `insight (Standardized).csv`
pub fn standardized_name(input: &Path) -> String {
    format!("{} ({STANDARDIZED_MARKER}).{OUTPUT_EXTENSION}", file_stem(input))
}

/// `report.csv` for `R07` → `[R07] report.csv`
///
/// Path separators in the representative are replaced with `_` so every
/// split file lands in the output directory itself.
pub fn split_name(representative: &str, input: &Path) -> String {
    let representative = representative.trim();
    let tag = if representative.is_empty() {
        UNASSIGNED.to_string()
    } else {
        representative.replace(['/', '\\'], "_")
    };
    format!("[{tag}] {}", file_name(input))
}

/// Report name shared by a set of split files: the first file's name
/// without a leading `[...]` tag, cut at the first `(` or, failing that,
/// the first `.`.
pub fn report_name(first: &Path) -> String {
    let name = file_name(first);
    let mut name = name.as_str();
    if let Some(end) = name.find(']') {
        name = &name[end + 1..];
    }
    if let Some(cut) = name.find('(') {
        name = &name[..cut];
    } else if let Some(cut) = name.find('.') {
        name = &name[..cut];
    }
    name.trim().to_string()
}

/// `[R07] report (Standardized).csv` → `report (Compiled).csv`
pub fn compiled_name(first: &Path) -> String {
    format!("{} (Compiled).{OUTPUT_EXTENSION}", report_name(first))
}
