//! Field-level input validation.
//!
//! A `FieldError` is data, not a fatal error: callers show it inline per
//! field (single-record mode) or fall back to imputation (batch mode).

use std::fmt;

use crate::limits::Field;
use crate::record::{ParsedInputs, RawRecord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldError {
    Required,
    NotNumeric,
    BelowMin(f64),
    AboveMax(f64),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => write!(f, "this field is required"),
            FieldError::NotNumeric => write!(f, "must be a valid number"),
            FieldError::BelowMin(min) => write!(f, "minimum value is {}", min),
            FieldError::AboveMax(max) => write!(f, "maximum value is {}", max),
        }
    }
}

/// Check a single raw value against the field's declared limits.
///
/// Bounds are inclusive: a value exactly at min or max is valid.
pub fn validate_field(field: Field, raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required);
    }
    let value: f64 = trimmed.parse().map_err(|_| FieldError::NotNumeric)?;
    if !value.is_finite() {
        return Err(FieldError::NotNumeric);
    }
    let limits = field.limits();
    if let Some(min) = limits.min {
        if value < min {
            return Err(FieldError::BelowMin(min));
        }
    }
    if let Some(max) = limits.max {
        if value > max {
            return Err(FieldError::AboveMax(max));
        }
    }
    Ok(value)
}

/// Validate every field of a record, aggregating failures per field.
pub fn validate_record(record: &RawRecord) -> Result<ParsedInputs, Vec<(Field, FieldError)>> {
    let mut errors = Vec::new();
    let mut check = |field: Field, raw: &str| -> f64 {
        match validate_field(field, raw) {
            Ok(v) => v,
            Err(e) => {
                errors.push((field, e));
                0.0
            }
        }
    };

    let parsed = match record {
        RawRecord::Form {
            kcnq1,
            linc01785,
            age,
            afp,
            alb,
            ggt,
        } => ParsedInputs::Form {
            kcnq1: check(Field::Kcnq1, kcnq1),
            linc01785: check(Field::Linc01785, linc01785),
            age: check(Field::Age, age),
            afp: check(Field::Afp, afp),
            alb: check(Field::Alb, alb),
            ggt: check(Field::Ggt, ggt),
        },
        RawRecord::Score {
            score,
            age,
            afp,
            alb,
            ggt,
        } => ParsedInputs::Score {
            score: check(Field::Score, score),
            age: check(Field::Age, age),
            afp: check(Field::Afp, afp),
            alb: check(Field::Alb, alb),
            ggt: check(Field::Ggt, ggt),
        },
    };

    if errors.is_empty() {
        Ok(parsed)
    } else {
        Err(errors)
    }
}
