//! Parsing of raw text fields
//!
//! Input is rejected rather than clamped: a price of "abc" is an error, not 0.

use cashia_core::Rating;

use crate::{Result, SessionError};

/// Trimmed field contents, or `MissingField` when blank
pub fn required<'a>(field: &'static str, raw: &'a str) -> Result<&'a str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SessionError::MissingField(field));
    }
    Ok(trimmed)
}

/// Whole, non-negative currency amount
pub fn parse_amount(field: &'static str, raw: &str) -> Result<u64> {
    let value = required(field, raw)?;
    let amount: u64 = value
        .parse()
        .map_err(|_| invalid(field, value, "expected a whole, non-negative amount"))?;

    // Capacity is computed as a signed difference of two amounts.
    if amount > i64::MAX as u64 {
        return Err(invalid(field, value, "amount is too large"));
    }
    Ok(amount)
}

pub fn parse_rating(raw: &str) -> Result<Rating> {
    let value = required("rating", raw)?;
    let number: u64 = value
        .parse()
        .map_err(|_| invalid("rating", value, "expected a whole number from 0 to 10"))?;

    Rating::new(number).map_err(|e| invalid("rating", value, &e.to_string()))
}

fn invalid(field: &'static str, value: &str, reason: &str) -> SessionError {
    SessionError::InvalidInput {
        field,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
