use crate::batch::BatchCtx;
use crate::predict::PredictionResult;

pub fn format_prediction(result: &PredictionResult) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let mut out = String::new();
    out.push_str(&format!("hepascore v{}\n", version));
    out.push_str(&format!(
        "Probability: {:.1}%\n",
        result.probability * 100.0
    ));
    out.push_str(&format!(
        "Risk level: {} (prediction={})\n",
        result.risk_level, result.prediction
    ));
    out.push_str(&format!("AFP status: {}\n", result.afp_status));
    out.push_str(&format!("lncRNA score: {:.4}\n", result.score));
    out
}

pub fn format_batch_summary(ctx: &BatchCtx) -> String {
    let total = ctx.results.len();
    let high = ctx
        .results
        .iter()
        .filter(|r| r.prediction == Some(1))
        .count();
    let imputed = ctx
        .results
        .iter()
        .filter(|r| !r.imputed.is_empty())
        .count();
    let failed = ctx.results.iter().filter(|r| r.error.is_some()).count();

    let mut out = String::new();
    out.push_str(&format!("hepascore v{}\n", env!("CARGO_PKG_VERSION")));
    out.push_str(&format!(
        "Batch: {} rows, mode={}\n",
        total, ctx.mode
    ));
    out.push_str(&format!("High risk: {}\n", high));
    out.push_str(&format!("Imputed rows: {}\n", imputed));
    if failed > 0 {
        out.push_str(&format!("Failed rows: {}\n", failed));
    }
    out
}
