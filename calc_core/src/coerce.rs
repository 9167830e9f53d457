//! # Numeric Coercion
//!
//! Input controls hold text. Calculators want numbers. The rule is lenient:
//! surrounding whitespace is ignored, and empty or non-numeric text reads as
//! zero. Non-finite spellings (`inf`, `NaN`) also read as zero so a typed
//! word can never poison a result.
//!
//! A field that is *missing* from a group is different: see
//! [`crate::calculations::FieldValues::get`], which yields `NaN`.

/// Convert control text to a number, treating empty/invalid text as `0.0`.
///
/// ```rust
/// use calc_core::coerce::coerce;
///
/// assert_eq!(coerce("12.5"), 12.5);
/// assert_eq!(coerce("  -4 "), -4.0);
/// assert_eq!(coerce(""), 0.0);
/// assert_eq!(coerce("lots"), 0.0);
/// ```
pub fn coerce(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
