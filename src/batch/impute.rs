//! Missing-value imputation policy.
//!
//! Defaults are values typical of healthy individuals, reflecting the
//! clinical observation that a missing test more often means a healthier
//! patient than a sicker one.

use crate::limits::Field;

pub fn default_for(field: Field) -> f64 {
    match field {
        Field::Kcnq1 => 1.0,
        Field::Linc01785 => 1.5,
        Field::Score => 0.8,
        Field::Age => 45.0,
        Field::Afp => 5.0,
        Field::Alb => 45.0,
        Field::Ggt => 20.0,
    }
}

/// Resolve a raw cell to a usable number. Missing, empty, and unparsable
/// values fall back to the policy default; the boolean reports whether
/// imputation happened. Range limits are deliberately not enforced here:
/// batch rows are imputed, never rejected.
pub fn resolve_field(field: Field, raw: Option<&str>) -> (f64, bool) {
    match raw {
        Some(s) if !s.trim().is_empty() => match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => (v, false),
            _ => (default_for(field), true),
        },
        _ => (default_for(field), true),
    }
}
