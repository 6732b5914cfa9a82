//! # Input Validation
//!
//! Raw form values arrive as text. They are parsed explicitly, never coerced:
//! an empty field is `MissingField`, text that is not a finite number is
//! `InvalidInput`. Parsed numbers then go through the guards below inside each
//! calculator's `validate()`.
//!
//! ## Example
//!
//! ```rust
//! use reckon_core::validation::{parse_number, require_positive};
//!
//! let principal = parse_number("principal", " 250000 ").unwrap();
//! assert_eq!(principal, 250000.0);
//! assert!(require_positive("principal", principal).is_ok());
//!
//! // "abc" is rejected rather than treated as 0
//! assert!(parse_number("principal", "abc").is_err());
//! ```

use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Build an `InvalidInput` error and record the rejection.
pub(crate) fn reject(field: &str, value: f64, reason: impl Into<String>) -> CalcError {
    let reason = reason.into();
    tracing::debug!(field, value, %reason, "input rejected");
    CalcError::invalid_input(field, value.to_string(), reason)
}

/// Parse a numeric form field.
///
/// Accepts surrounding whitespace and thousands separators (`1,250.50`).
pub fn parse_number(field: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field(field));
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',').collect();
    let value: f64 = cleaned.parse().map_err(|_| {
        tracing::debug!(field, raw = trimmed, "unparseable number");
        CalcError::invalid_input(field, trimmed, "Not a number")
    })?;
    require_finite(field, value)?;
    Ok(value)
}

/// Parse an optional numeric form field; empty text yields `None`.
pub fn parse_optional_number(field: &str, raw: &str) -> CalcResult<Option<f64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    parse_number(field, raw).map(Some)
}

/// Parse an enumerated form field (select, radio group).
pub fn parse_choice<T: FromStr>(field: &str, raw: &str) -> CalcResult<T> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field(field));
    }
    trimmed
        .parse()
        .map_err(|_| CalcError::invalid_input(field, trimmed, "Not a recognized option"))
}

/// Reject NaN and infinities.
pub fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(reject(field, value, "Must be a finite number"));
    }
    Ok(())
}

/// Reject a computed figure that overflowed. Finite inputs can still
/// compound past `f64::MAX`; `field` and `input` name the value to correct.
pub fn require_finite_result(field: &str, input: f64, result: f64) -> CalcResult<()> {
    if !result.is_finite() {
        return Err(reject(field, input, "Result is too large to compute"));
    }
    Ok(())
}

/// Require `value > 0`.
pub fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value <= 0.0 {
        return Err(reject(field, value, "Must be greater than zero"));
    }
    Ok(())
}

/// Require `value >= 0`.
pub fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < 0.0 {
        return Err(reject(field, value, "Cannot be negative"));
    }
    Ok(())
}

/// Require `min <= value <= max`.
pub fn require_range(field: &str, value: f64, min: f64, max: f64) -> CalcResult<()> {
    require_finite(field, value)?;
    if value < min || value > max {
        return Err(reject(field, value, format!("Must be between {} and {}", min, max)));
    }
    Ok(())
}

/// Require a percentage in `[0, 100)`. Used wherever `1 - pct/100` ends up
/// in a denominator.
pub fn require_percent_below_100(field: &str, value: f64) -> CalcResult<()> {
    require_non_negative(field, value)?;
    if value >= 100.0 {
        return Err(reject(field, value, "Must be less than 100%"));
    }
    Ok(())
}
