//! Tests for numeric identifier extraction

use crate::app::services::trip_validator::extract_numeric_id;

#[test]
fn test_extracts_digits_from_standard_id() {
    let extracted = extract_numeric_id("id2875421").expect("digit run exists");
    assert_eq!(extracted.digits, "2875421");
    assert_eq!(extracted.value, 2875421);
}

#[test]
fn test_plain_numeric_string() {
    let extracted = extract_numeric_id("12345").expect("digit run exists");
    assert_eq!(extracted.digits, "12345");
    assert_eq!(extracted.value, 12345);
}

#[test]
fn test_first_maximal_run_wins() {
    // Only the first contiguous run contributes; later digits are ignored
    let extracted = extract_numeric_id("a12b345").expect("digit run exists");
    assert_eq!(extracted.digits, "12");
    assert_eq!(extracted.value, 12);
}

#[test]
fn test_leading_zeros_preserved_in_digits_but_not_value() {
    let extracted = extract_numeric_id("id007").expect("digit run exists");
    assert_eq!(extracted.digits, "007");
    assert_eq!(extracted.value, 7);
}

#[test]
fn test_no_digits_fails() {
    assert!(extract_numeric_id("identifier").is_none());
    assert!(extract_numeric_id("").is_none());
    assert!(extract_numeric_id("-_-").is_none());
}

#[test]
fn test_overflowing_digit_run_fails() {
    // 20 digits cannot fit a 64-bit signed integer
    assert!(extract_numeric_id("id99999999999999999999").is_none());
}

#[test]
fn test_run_at_end_of_string() {
    let extracted = extract_numeric_id("trip-42").expect("digit run exists");
    assert_eq!(extracted.digits, "42");
    assert_eq!(extracted.value, 42);
}
