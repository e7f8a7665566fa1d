use std::sync::Arc;

use hepascore::error::PredictError;
use hepascore::limits::Field;
use hepascore::model::Classifier;
use hepascore::predict::Predictor;
use hepascore::record::RawRecord;
use hepascore::risk::{AfpStatus, RiskLevel};
use hepascore::standardize::StandardizedVector;
use hepascore::validate::FieldError;

struct StubClassifier {
    proba: [f64; 2],
}

impl Classifier for StubClassifier {
    fn predict_proba(&self, _input: &StandardizedVector) -> Result<[f64; 2], PredictError> {
        Ok(self.proba)
    }
}

struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn predict_proba(&self, _input: &StandardizedVector) -> Result<[f64; 2], PredictError> {
        Err(PredictError::Inference("tensor shape mismatch".to_string()))
    }
}

fn form_record() -> RawRecord {
    RawRecord::Form {
        kcnq1: "2.5".to_string(),
        linc01785: "3.1".to_string(),
        age: "55".to_string(),
        afp: "4224".to_string(),
        alb: "37.6".to_string(),
        ggt: "108.3".to_string(),
    }
}

#[test]
fn form_record_end_to_end() {
    let predictor = Predictor::new(Arc::new(StubClassifier { proba: [0.1, 0.9] }));
    let result = predictor.predict(&form_record()).unwrap();

    let expected_score = 2.5 * 1.13 + 3.1 * 1.167 - 3.395;
    assert!((result.score - expected_score).abs() < 1e-12);
    assert_eq!(result.probability, 0.9);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.prediction, 1);
    assert_eq!(result.afp_status, AfpStatus::Elevated);
}

#[test]
fn score_record_skips_derivation() {
    let record = RawRecord::Score {
        score: "2.5".to_string(),
        age: "55".to_string(),
        afp: "5".to_string(),
        alb: "37.6".to_string(),
        ggt: "108.3".to_string(),
    };
    let predictor = Predictor::new(Arc::new(StubClassifier { proba: [0.8, 0.2] }));
    let result = predictor.predict(&record).unwrap();

    assert_eq!(result.score, 2.5);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.prediction, 0);
    assert_eq!(result.afp_status, AfpStatus::Normal);
}

#[test]
fn invalid_record_is_rejected_before_inference() {
    let record = RawRecord::Form {
        kcnq1: "2.5".to_string(),
        linc01785: "3.1".to_string(),
        age: "".to_string(),
        afp: "4224".to_string(),
        alb: "37.6".to_string(),
        ggt: "108.3".to_string(),
    };
    // The classifier would fail if reached; validation must reject first.
    let predictor = Predictor::new(Arc::new(FailingClassifier));
    let err = predictor.predict(&record).unwrap_err();
    match err {
        PredictError::Validation(errors) => {
            assert_eq!(errors, vec![(Field::Age, FieldError::Required)]);
        }
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn inference_failure_surfaces_as_error() {
    let predictor = Predictor::new(Arc::new(FailingClassifier));
    let err = predictor.predict(&form_record()).unwrap_err();
    assert!(matches!(err, PredictError::Inference(_)));
}

#[test]
fn classifier_stays_usable_after_a_failed_call() {
    // Same predictor, fresh call after an error on a bad record path.
    let predictor = Predictor::new(Arc::new(StubClassifier { proba: [0.5, 0.5] }));
    let bad = RawRecord::Form {
        kcnq1: "x".to_string(),
        linc01785: "3.1".to_string(),
        age: "55".to_string(),
        afp: "4224".to_string(),
        alb: "37.6".to_string(),
        ggt: "108.3".to_string(),
    };
    assert!(predictor.predict(&bad).is_err());
    assert!(predictor.predict(&form_record()).is_ok());
}
