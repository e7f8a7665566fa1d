use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::batch::impute;
use crate::batch::stage1_parse::SAMPLE_ID_COLUMN;
use crate::batch::{BatchCtx, RowResult};
use crate::features::{lncrna_score, FeatureVector};
use crate::limits::Field;
use crate::model::Classifier;
use crate::pipeline::Stage;
use crate::record::InputMode;
use crate::risk::{afp_status, prediction_flag, risk_level};
use crate::standardize::standardize;

pub struct Stage2Rows {
    classifier: Arc<dyn Classifier>,
}

impl Stage2Rows {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self { classifier }
    }
}

impl Stage for Stage2Rows {
    fn name(&self) -> &'static str {
        "stage2_rows"
    }

    fn run(&self, ctx: &mut BatchCtx) -> Result<()> {
        let table = ctx.table.as_ref().context("parsed table missing")?;
        let id_col = table.column(SAMPLE_ID_COLUMN);

        let mut results = Vec::with_capacity(table.rows.len());
        let mut failed = 0usize;

        // One row at a time, in input order; the shared session is a
        // serialized resource and output rows must line up with input rows.
        for (idx, row) in table.rows.iter().enumerate() {
            let sample_id = id_col
                .and_then(|i| row.get(i))
                .cloned()
                .unwrap_or_default();

            let mut inputs = Vec::with_capacity(ctx.mode.fields().len());
            let mut imputed = Vec::new();
            for &field in ctx.mode.fields() {
                let raw = table
                    .column(field.name())
                    .and_then(|i| row.get(i))
                    .map(String::as_str);
                let (value, was_imputed) = impute::resolve_field(field, raw);
                if was_imputed {
                    imputed.push(field.name());
                }
                inputs.push((field, value));
            }

            let features = feature_vector(ctx.mode, &inputs);
            let standardized = standardize(&features);

            let mut result = RowResult {
                sample_id,
                inputs,
                score: features.score,
                probability: None,
                risk_level: None,
                prediction: None,
                afp_status: afp_status(features.afp),
                imputed,
                error: None,
            };

            match self.classifier.predict_proba(&standardized) {
                Ok(proba) => {
                    let probability = proba[1];
                    let level = risk_level(probability);
                    result.probability = Some(probability);
                    result.risk_level = Some(level);
                    result.prediction = Some(prediction_flag(level));
                    debug!(row = idx + 1, probability, "row scored");
                }
                Err(err) => {
                    failed += 1;
                    warn!(row = idx + 1, error = %err, "row inference failed");
                    result.error = Some(err.to_string());
                }
            }

            results.push(result);
        }

        info!(
            rows = results.len(),
            failed,
            imputed_rows = results.iter().filter(|r| !r.imputed.is_empty()).count(),
            "rows processed"
        );
        ctx.results = results;
        Ok(())
    }
}

fn value_of(inputs: &[(Field, f64)], field: Field) -> f64 {
    inputs
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, v)| *v)
        .unwrap_or(0.0)
}

fn feature_vector(mode: InputMode, inputs: &[(Field, f64)]) -> FeatureVector {
    let score = match mode {
        InputMode::Form => lncrna_score(
            value_of(inputs, Field::Kcnq1),
            value_of(inputs, Field::Linc01785),
        ),
        InputMode::Score => value_of(inputs, Field::Score),
    };
    FeatureVector {
        score,
        age: value_of(inputs, Field::Age),
        afp: value_of(inputs, Field::Afp),
        alb: value_of(inputs, Field::Alb),
        ggt: value_of(inputs, Field::Ggt),
    }
}
