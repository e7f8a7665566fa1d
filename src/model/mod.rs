//! Classifier boundary: a narrow inference contract over the pre-trained
//! gradient-boosting model.
//!
//! The ONNX artifact is a frozen black box `R^5 -> [0,1]^2`; this module
//! only builds the `[1, 5]` float32 tensor, names the input, and reads the
//! two-class probability output back.

pub mod loader;

use std::path::Path;
use std::sync::Mutex;

use ndarray::Array2;
use ort::session::Session;
use ort::value::TensorRef;
use tracing::debug;

use crate::error::PredictError;
use crate::features::FeatureVector;
use crate::standardize::StandardizedVector;

/// Input tensor name baked into the exported model graph.
pub const INPUT_NAME: &str = "float_input";
/// Probability output name. The graph also emits `label`, which is unused.
pub const OUTPUT_NAME: &str = "probabilities";

/// The seam the pipeline talks to. Returns `[p_class0, p_class1]`.
pub trait Classifier: Send + Sync {
    fn predict_proba(&self, input: &StandardizedVector) -> Result<[f64; 2], PredictError>;
}

/// ONNX-backed classifier. `Session::run` takes `&mut self`, so the
/// session sits behind a mutex and concurrent calls serialize; a failed
/// run leaves the session usable for the next call.
#[derive(Debug)]
pub struct OnnxClassifier {
    session: Mutex<Session>,
}

impl OnnxClassifier {
    /// Load the model artifact. Blocking; see [`loader::load_with_timeout`]
    /// for the bounded variant.
    pub fn load(path: &Path) -> Result<Self, PredictError> {
        let session = Session::builder()
            .and_then(|b| b.with_intra_threads(2))
            .and_then(|b| b.commit_from_file(path))
            .map_err(|e| PredictError::ModelLoad(e.to_string()))?;
        debug!(model = %path.display(), "onnx session ready");
        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl Classifier for OnnxClassifier {
    fn predict_proba(&self, input: &StandardizedVector) -> Result<[f64; 2], PredictError> {
        let values: Vec<f32> = input.0.iter().map(|&v| v as f32).collect();
        let batch = Array2::<f32>::from_shape_vec((1, FeatureVector::LEN), values)
            .map_err(|e| PredictError::Inference(e.to_string()))?;
        let tensor = TensorRef::from_array_view(&batch)
            .map_err(|e| PredictError::Inference(e.to_string()))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| PredictError::Inference(format!("session lock poisoned: {e}")))?;
        let outputs = session
            .run(ort::inputs![INPUT_NAME => tensor])
            .map_err(|e| PredictError::Inference(e.to_string()))?;

        let probabilities = outputs[OUTPUT_NAME]
            .try_extract_array::<f32>()
            .map_err(|e| PredictError::Inference(e.to_string()))?;
        let probs: Vec<f32> = probabilities.iter().copied().collect();
        if probs.len() != 2 {
            return Err(PredictError::Inference(format!(
                "expected 2 class probabilities, got {}",
                probs.len()
            )));
        }
        Ok([probs[0] as f64, probs[1] as f64])
    }
}
