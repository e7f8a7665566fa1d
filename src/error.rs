//! Library error taxonomy.

use std::time::Duration;

use thiserror::Error;

use crate::limits::Field;
use crate::validate::FieldError;

#[derive(Debug, Clone, Error)]
pub enum PredictError {
    #[error("CSV contains no data rows")]
    EmptyFile,

    #[error("invalid input mode '{0}' (expected 'form' or 'score')")]
    InvalidMode(String),

    #[error("validation failed: {}", format_field_errors(.0))]
    Validation(Vec<(Field, FieldError)>),

    #[error("model load failed: {0}")]
    ModelLoad(String),

    #[error("model load timed out after {}s", .0.as_secs())]
    ModelLoadTimeout(Duration),

    #[error("inference failed: {0}")]
    Inference(String),
}

fn format_field_errors(errors: &[(Field, FieldError)]) -> String {
    errors
        .iter()
        .map(|(field, err)| format!("{}: {}", field, err))
        .collect::<Vec<_>>()
        .join("; ")
}
