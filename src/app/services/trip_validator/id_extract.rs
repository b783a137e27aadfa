//! Numeric identifier extraction from free-form id strings
//!
//! Source identifiers look like `id2875421`: a free-form string with an
//! embedded run of digits. The numeric key is derived from the first maximal
//! contiguous digit run; everything around it is ignored.

use crate::app::models::ExtractedId;
use regex::Regex;
use std::sync::OnceLock;

/// First maximal run of decimal digits
fn digit_run_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+").expect("digit run pattern is valid"))
}

/// Extract the numeric key from a free-form identifier
///
/// Returns `None` when the string contains no digit run, or when the run
/// does not fit a 64-bit signed integer. Leading zeros are preserved in the
/// returned digit string but do not affect the integer value.
pub fn extract_numeric_id(raw_id: &str) -> Option<ExtractedId> {
    let digits = digit_run_pattern().find(raw_id)?.as_str();
    let value = digits.parse::<i64>().ok()?;

    Some(ExtractedId {
        digits: digits.to_string(),
        value,
    })
}
