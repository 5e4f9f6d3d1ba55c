//! Numeric normalization utilities.

pub use osr_model::format_numeric;

/// Parses an amount such as `25`, ` 2.50 `, `$1,250.00`.
///
/// Returns `None` for empty or unparseable input.
pub fn parse_amount(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed
        .trim_start_matches('$')
        .chars()
        .filter(|ch| *ch != ',')
        .collect();
    cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
