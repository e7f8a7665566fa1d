//! Single-record prediction pipeline: validate, derive, standardize,
//! infer, classify.

use std::sync::Arc;

use tracing::debug;

use crate::error::PredictError;
use crate::features::FeatureVector;
use crate::model::Classifier;
use crate::record::RawRecord;
use crate::risk::{afp_status, prediction_flag, risk_level, AfpStatus, RiskLevel};
use crate::standardize::standardize;
use crate::validate::validate_record;

#[derive(Debug, Clone, Copy)]
pub struct PredictionResult {
    pub probability: f64,
    pub risk_level: RiskLevel,
    pub score: f64,
    pub afp_status: AfpStatus,
    pub prediction: u8,
}

/// Runs the per-record pipeline against an injected classifier.
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
}

impl Predictor {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Rejects on any field validation error; a failed inference call is
    /// surfaced as-is and a fresh call may be attempted later.
    pub fn predict(&self, record: &RawRecord) -> Result<PredictionResult, PredictError> {
        let parsed = validate_record(record).map_err(PredictError::Validation)?;
        let features = FeatureVector::from_inputs(&parsed);
        let standardized = standardize(&features);
        debug!(score = features.score, "features standardized");

        let proba = self.classifier.predict_proba(&standardized)?;
        let probability = proba[1];
        let level = risk_level(probability);

        Ok(PredictionResult {
            probability,
            risk_level: level,
            score: features.score,
            afp_status: afp_status(features.afp),
            prediction: prediction_flag(level),
        })
    }
}
