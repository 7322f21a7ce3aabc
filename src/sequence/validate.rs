// Input validation for sequence analysis
//
// Rejects malformed input before any detector runs. Two entry points share
// the same rules: a typed slice of f64 (NotAnArray cannot occur) and an
// untyped JSON value as received by hosts crossing a process boundary.
//
// Check order: NotAnArray, TooShort, NonNumeric.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Minimum number of terms needed to infer anything
pub const MIN_SEQUENCE_LEN: usize = 2;

/// Machine-readable validation failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    NotAnArray,
    TooShort,
    NonNumeric,
}

/// Reasons a sequence is rejected before detection
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Input must be an array of numbers")]
    NotAnArray,

    #[error("Sequence must contain at least 2 numbers, got {len}")]
    TooShort { len: usize },

    #[error("Element at index {index} is not a finite number")]
    NonNumeric { index: usize },
}

impl ValidationError {
    /// Category of this failure
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::NotAnArray => ValidationErrorKind::NotAnArray,
            ValidationError::TooShort { .. } => ValidationErrorKind::TooShort,
            ValidationError::NonNumeric { .. } => ValidationErrorKind::NonNumeric,
        }
    }
}

/// Validate a typed sequence
///
/// NaN and ±Infinity are rejected as `NonNumeric`.
///
/// # Example
/// ```
/// use seqlens::sequence::{validate, ValidationErrorKind};
///
/// assert!(validate(&[1.0, 2.0]).is_ok());
/// assert_eq!(validate(&[5.0]).unwrap_err().kind(), ValidationErrorKind::TooShort);
/// assert_eq!(
///     validate(&[1.0, f64::NAN]).unwrap_err().kind(),
///     ValidationErrorKind::NonNumeric
/// );
/// ```
pub fn validate(sequence: &[f64]) -> Result<(), ValidationError> {
    if sequence.len() < MIN_SEQUENCE_LEN {
        return Err(ValidationError::TooShort {
            len: sequence.len(),
        });
    }

    match sequence.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ValidationError::NonNumeric { index }),
        None => Ok(()),
    }
}

/// Validate an untyped JSON value and extract its terms
///
/// Only JSON numbers are accepted as elements; numeric strings, `null`,
/// booleans and nested containers are `NonNumeric`.
pub fn validate_json(input: &Value) -> Result<Vec<f64>, ValidationError> {
    let items = input.as_array().ok_or(ValidationError::NotAnArray)?;

    if items.len() < MIN_SEQUENCE_LEN {
        return Err(ValidationError::TooShort { len: items.len() });
    }

    let values = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_f64()
                .filter(|v| v.is_finite())
                .ok_or(ValidationError::NonNumeric { index })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    validate(&values)?;
    Ok(values)
}
