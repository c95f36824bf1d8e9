//! Internal helpers for payload validation.
//!
//! These utilities are **not** part of the public API. A field counts as
//! filled when it is present and non-empty: strings must not be empty and
//! numbers must not be zero.

use crate::{EngineError, ResultEngine};

pub(crate) fn require_text(value: Option<String>, field: &'static str) -> ResultEngine<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(EngineError::MissingField(field)),
    }
}

pub(crate) fn require_age(value: Option<u32>, field: &'static str) -> ResultEngine<u32> {
    match value {
        Some(age) if age != 0 => Ok(age),
        _ => Err(EngineError::MissingField(field)),
    }
}

pub(crate) fn require_amount(value: Option<f64>, field: &'static str) -> ResultEngine<f64> {
    match value {
        Some(amount) if amount != 0.0 && amount.is_finite() => Ok(amount),
        _ => Err(EngineError::MissingField(field)),
    }
}

/// Drops empty strings, which query strings produce for `?name=`.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}
