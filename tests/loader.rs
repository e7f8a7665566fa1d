use std::time::Duration;

use hepascore::error::PredictError;
use hepascore::model::loader::{load_with_timeout, SharedClassifier};

#[test]
fn missing_model_file_fails_with_model_load() {
    let err = load_with_timeout(
        std::path::Path::new("/nonexistent/model.onnx"),
        Duration::from_secs(30),
    )
    .unwrap_err();
    assert!(matches!(err, PredictError::ModelLoad(_)));
}

#[test]
fn shared_classifier_caches_the_outcome() {
    let shared = SharedClassifier::new("/nonexistent/model.onnx", Duration::from_secs(30));
    let first = shared.get().unwrap_err();
    assert!(matches!(first, PredictError::ModelLoad(_)));
    // Load-once: a second call replays the cached outcome.
    let second = shared.get().unwrap_err();
    assert_eq!(first.to_string(), second.to_string());
}
