//! Batch scoring over CSV files.
//!
//! A batch job moves through parse, per-row processing, and serialization
//! stages over a shared [`BatchCtx`]. Rows are processed strictly
//! sequentially in input order, so imputation notes and progress stay
//! predictable and output order matches input order.

pub mod impute;
pub mod stage1_parse;
pub mod stage2_rows;
pub mod stage3_serialize;
pub mod template;

use std::sync::Arc;

use anyhow::Result;

use crate::io::csv::CsvTable;
use crate::limits::Field;
use crate::model::Classifier;
use crate::pipeline::Pipeline;
use crate::record::InputMode;
use crate::risk::{AfpStatus, RiskLevel};

/// Mutable state threaded through the batch stages.
#[derive(Debug)]
pub struct BatchCtx {
    pub mode: InputMode,
    pub csv_text: String,
    pub table: Option<CsvTable>,
    pub results: Vec<RowResult>,
    pub output_csv: Option<String>,
    pub warnings: Vec<String>,
}

/// Outcome of one row. A row whose inference call failed keeps its
/// resolved inputs and carries the failure in `error`; it never aborts
/// the batch.
#[derive(Debug, Clone)]
pub struct RowResult {
    pub sample_id: String,
    /// Resolved numeric inputs in mode column order, post-imputation.
    pub inputs: Vec<(Field, f64)>,
    /// Composite score: derived in form mode, supplied in score mode.
    pub score: f64,
    pub probability: Option<f64>,
    pub risk_level: Option<RiskLevel>,
    pub prediction: Option<u8>,
    pub afp_status: AfpStatus,
    pub imputed: Vec<&'static str>,
    pub error: Option<String>,
}

impl BatchCtx {
    pub fn new(mode: InputMode, csv_text: String) -> Self {
        Self {
            mode,
            csv_text,
            table: None,
            results: Vec::new(),
            output_csv: None,
            warnings: Vec::new(),
        }
    }
}

impl RowResult {
    pub fn input(&self, field: Field) -> f64 {
        self.inputs
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }
}

/// Run the full batch pipeline against an injected classifier.
pub fn run_batch(
    mode: InputMode,
    csv_text: &str,
    classifier: Arc<dyn Classifier>,
) -> Result<BatchCtx> {
    let mut ctx = BatchCtx::new(mode, csv_text.to_string());
    let pipeline = Pipeline::new(vec![
        Box::new(stage1_parse::Stage1Parse::new()),
        Box::new(stage2_rows::Stage2Rows::new(classifier)),
        Box::new(stage3_serialize::Stage3Serialize::new()),
    ]);
    pipeline.run(&mut ctx)?;
    Ok(ctx)
}
