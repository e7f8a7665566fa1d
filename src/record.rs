//! Raw input records and the form/score mode switch.

use std::fmt;
use std::str::FromStr;

use crate::error::PredictError;
use crate::limits::Field;

/// Which shape of input a caller supplies: the two raw biomarker
/// expression levels (form mode, score derived downstream) or a
/// pre-computed composite score (score mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Form,
    Score,
}

impl InputMode {
    /// Numeric fields of a CSV row in this mode, in column order.
    /// `sampleId` is carried separately and never imputed.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            InputMode::Form => &[
                Field::Kcnq1,
                Field::Linc01785,
                Field::Age,
                Field::Afp,
                Field::Alb,
                Field::Ggt,
            ],
            InputMode::Score => &[Field::Score, Field::Age, Field::Afp, Field::Alb, Field::Ggt],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Form => "form",
            InputMode::Score => "score",
        }
    }
}

impl FromStr for InputMode {
    type Err = PredictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "form" => Ok(InputMode::Form),
            "score" => Ok(InputMode::Score),
            other => Err(PredictError::InvalidMode(other.to_string())),
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One record as received, all fields raw strings prior to validation.
#[derive(Debug, Clone)]
pub enum RawRecord {
    Form {
        kcnq1: String,
        linc01785: String,
        age: String,
        afp: String,
        alb: String,
        ggt: String,
    },
    Score {
        score: String,
        age: String,
        afp: String,
        alb: String,
        ggt: String,
    },
}

impl RawRecord {
    pub fn mode(&self) -> InputMode {
        match self {
            RawRecord::Form { .. } => InputMode::Form,
            RawRecord::Score { .. } => InputMode::Score,
        }
    }
}

/// A record after validation, every field parsed.
#[derive(Debug, Clone, Copy)]
pub enum ParsedInputs {
    Form {
        kcnq1: f64,
        linc01785: f64,
        age: f64,
        afp: f64,
        alb: f64,
        ggt: f64,
    },
    Score {
        score: f64,
        age: f64,
        afp: f64,
        alb: f64,
        ggt: f64,
    },
}
