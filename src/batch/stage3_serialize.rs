use anyhow::{Context, Result};
use tracing::info;

use crate::batch::stage1_parse::SAMPLE_ID_COLUMN;
use crate::batch::{BatchCtx, RowResult};
use crate::io::csv;
use crate::pipeline::Stage;
use crate::record::InputMode;

pub struct Stage3Serialize;

impl Stage3Serialize {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Serialize {
    fn name(&self) -> &'static str {
        "stage3_serialize"
    }

    fn run(&self, ctx: &mut BatchCtx) -> Result<()> {
        if ctx.table.is_none() {
            anyhow::bail!("parsed table missing");
        }
        let headers = output_headers(ctx.mode);
        let rows: Vec<Vec<String>> = ctx
            .results
            .iter()
            .map(|r| output_row(ctx.mode, r))
            .collect();

        let csv_text = csv::to_csv(&headers, &rows);
        info!(rows = rows.len(), "results serialized");
        ctx.output_csv = Some(csv_text);
        Ok(())
    }
}

/// Original input columns, an empty divider column, then the derived
/// outputs.
pub fn output_headers(mode: InputMode) -> Vec<String> {
    let mut headers = vec![SAMPLE_ID_COLUMN.to_string()];
    headers.extend(mode.fields().iter().map(|f| f.name().to_string()));
    headers.push(String::new());
    if mode == InputMode::Form {
        headers.push("score".to_string());
    }
    headers.push("probability".to_string());
    headers.push("riskLevel".to_string());
    headers.push("prediction".to_string());
    headers.push("imputedFields".to_string());
    headers.push("error".to_string());
    headers
}

fn output_row(mode: InputMode, result: &RowResult) -> Vec<String> {
    let mut row = vec![result.sample_id.clone()];
    for (_, value) in &result.inputs {
        row.push(value.to_string());
    }
    row.push(String::new());
    if mode == InputMode::Form {
        row.push(format!("{:.4}", result.score));
    }
    row.push(
        result
            .probability
            .map(|p| format!("{:.6}", p))
            .unwrap_or_default(),
    );
    row.push(
        result
            .risk_level
            .map(|l| l.as_str().to_string())
            .unwrap_or_default(),
    );
    row.push(
        result
            .prediction
            .map(|p| p.to_string())
            .unwrap_or_default(),
    );
    row.push(result.imputed.join(";"));
    row.push(result.error.clone().unwrap_or_default());
    row
}

impl BatchCtx {
    /// Serialized results; present once the batch has run to completion.
    pub fn output_csv(&self) -> Result<&str> {
        self.output_csv
            .as_deref()
            .context("batch output not serialized")
    }
}
