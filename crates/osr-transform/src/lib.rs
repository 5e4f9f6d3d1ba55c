//! Value normalization for standardized sales-order reports.
//!
//! - **normalization::zip**: canonical `XXXXX` / `XXXXX-XXXX` zip codes
//! - **normalization::phone**: canonical `(XXX) XXX-XXXX` phone numbers
//! - **normalization::numeric**: amount parsing and number formatting

pub mod normalization;

pub use normalization::numeric::{format_numeric, parse_amount};
pub use normalization::phone::normalize_phone;
pub use normalization::zip::normalize_zip;
pub use normalization::digits_only;
