//! Static per-field input ranges.
//!
//! The limits bound what the validator accepts; batch imputation uses the
//! same field identities to name what it filled in.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Kcnq1,
    Linc01785,
    Score,
    Age,
    Afp,
    Alb,
    Ggt,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldLimits {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: f64,
}

impl Field {
    /// Column/flag name as it appears in CSV headers and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Kcnq1 => "kcnq1",
            Field::Linc01785 => "linc01785",
            Field::Score => "score",
            Field::Age => "age",
            Field::Afp => "afp",
            Field::Alb => "alb",
            Field::Ggt => "ggt",
        }
    }

    pub fn limits(&self) -> FieldLimits {
        match self {
            Field::Kcnq1 => FieldLimits {
                min: Some(0.0),
                max: None,
                step: 0.001,
            },
            Field::Linc01785 => FieldLimits {
                min: Some(0.0),
                max: None,
                step: 0.001,
            },
            // The composite score is a derived quantity; it carries no
            // clinical range of its own.
            Field::Score => FieldLimits {
                min: None,
                max: None,
                step: 0.001,
            },
            Field::Age => FieldLimits {
                min: Some(18.0),
                max: Some(120.0),
                step: 1.0,
            },
            // AFP can run into the tens of thousands in late disease.
            Field::Afp => FieldLimits {
                min: Some(0.0),
                max: None,
                step: 0.1,
            },
            Field::Alb => FieldLimits {
                min: Some(10.0),
                max: None,
                step: 0.1,
            },
            Field::Ggt => FieldLimits {
                min: Some(0.0),
                max: None,
                step: 1.0,
            },
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
