use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::batch::BatchCtx;
use crate::predict::PredictionResult;
use crate::risk::RiskLevel;
use crate::schema::v1::{BatchReportV1, BatchRowV1, BatchSummaryV1, FieldValueV1, PredictionV1};

const TOOL_NAME: &str = "hepascore";
const SCHEMA_VERSION: &str = "v1";

pub fn build_prediction(result: &PredictionResult) -> PredictionV1 {
    PredictionV1 {
        tool: TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: SCHEMA_VERSION.to_string(),
        probability: result.probability,
        risk_level: result.risk_level.as_str().to_string(),
        score: result.score,
        afp_status: result.afp_status.as_str().to_string(),
        prediction: result.prediction,
    }
}

pub fn build_batch_report(ctx: &BatchCtx) -> BatchReportV1 {
    let rows: Vec<BatchRowV1> = ctx
        .results
        .iter()
        .map(|r| BatchRowV1 {
            sample_id: r.sample_id.clone(),
            inputs: r
                .inputs
                .iter()
                .map(|(field, value)| FieldValueV1 {
                    field: field.name().to_string(),
                    value: *value,
                    imputed: r.imputed.contains(&field.name()),
                })
                .collect(),
            score: r.score,
            probability: r.probability,
            risk_level: r.risk_level.map(|l| l.as_str().to_string()),
            prediction: r.prediction,
            afp_status: r.afp_status.as_str().to_string(),
            imputed_fields: r.imputed.iter().map(|s| s.to_string()).collect(),
            error: r.error.clone(),
        })
        .collect();

    let count_level = |level: RiskLevel| -> u64 {
        ctx.results
            .iter()
            .filter(|r| r.risk_level == Some(level))
            .count() as u64
    };

    let summary = BatchSummaryV1 {
        rows: ctx.results.len() as u64,
        low: count_level(RiskLevel::Low),
        moderate: count_level(RiskLevel::Moderate),
        high: count_level(RiskLevel::High),
        imputed_rows: ctx.results.iter().filter(|r| !r.imputed.is_empty()).count() as u64,
        failed_rows: ctx.results.iter().filter(|r| r.error.is_some()).count() as u64,
    };

    BatchReportV1 {
        tool: TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: SCHEMA_VERSION.to_string(),
        mode: ctx.mode.as_str().to_string(),
        rows,
        summary,
        warnings: ctx.warnings.clone(),
    }
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
