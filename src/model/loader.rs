//! Bounded, load-once session construction.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::{Arc, OnceLock};
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::error::PredictError;
use crate::model::OnnxClassifier;

/// Load the model on a helper thread, failing with `ModelLoadTimeout` if
/// it does not complete in time. On timeout the loader thread is left
/// detached; whatever session it eventually builds is dropped.
pub fn load_with_timeout(
    path: &Path,
    timeout: Duration,
) -> Result<OnnxClassifier, PredictError> {
    let (tx, rx) = mpsc::channel();
    let model_path = path.to_path_buf();
    thread::Builder::new()
        .name("model-load".to_string())
        .spawn(move || {
            let _ = tx.send(OnnxClassifier::load(&model_path));
        })
        .map_err(|e| PredictError::ModelLoad(e.to_string()))?;

    match rx.recv_timeout(timeout) {
        Ok(result) => {
            info!(model = %path.display(), "model loaded");
            result
        }
        Err(_) => Err(PredictError::ModelLoadTimeout(timeout)),
    }
}

/// Lazily constructed, shared classifier: exactly one load, many waiters.
///
/// The first caller of [`get`](Self::get) runs the load; concurrent
/// callers block on the same in-flight initialization rather than
/// triggering duplicates. The outcome, success or failure, is cached for
/// the lifetime of the handle.
pub struct SharedClassifier {
    path: PathBuf,
    timeout: Duration,
    cell: OnceLock<Result<Arc<OnnxClassifier>, PredictError>>,
}

impl SharedClassifier {
    pub fn new(path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            path: path.into(),
            timeout,
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Result<Arc<OnnxClassifier>, PredictError> {
        self.cell
            .get_or_init(|| load_with_timeout(&self.path, self.timeout).map(Arc::new))
            .clone()
    }
}
