use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub probability: f64,
    pub risk_level: String,
    pub score: f64,
    pub afp_status: String,
    pub prediction: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldValueV1 {
    pub field: String,
    pub value: f64,
    pub imputed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRowV1 {
    pub sample_id: String,
    pub inputs: Vec<FieldValueV1>,
    pub score: f64,
    pub probability: Option<f64>,
    pub risk_level: Option<String>,
    pub prediction: Option<u8>,
    pub afp_status: String,
    pub imputed_fields: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummaryV1 {
    pub rows: u64,
    pub low: u64,
    pub moderate: u64,
    pub high: u64,
    pub imputed_rows: u64,
    pub failed_rows: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReportV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub mode: String,
    pub rows: Vec<BatchRowV1>,
    pub summary: BatchSummaryV1,
    pub warnings: Vec<String>,
}
