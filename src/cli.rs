use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hepascore", version, about = "Liver-cancer risk scoring CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Predict(PredictArgs),
    Batch(BatchArgs),
    Template(TemplateArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long, help = "Path to the ONNX model file")]
    pub model: PathBuf,

    #[arg(long, default_value_t = 120, help = "Model load timeout (seconds)")]
    pub load_timeout: u64,

    #[arg(long, help = "KCNQ1-AS1 expression level (form mode)")]
    pub kcnq1: Option<String>,

    #[arg(long, help = "LINC01785 expression level (form mode)")]
    pub linc01785: Option<String>,

    #[arg(long, help = "Pre-computed lncRNA score (score mode)")]
    pub score: Option<String>,

    #[arg(long, help = "Age (years)")]
    pub age: String,

    #[arg(long, help = "AFP level (ng/mL)")]
    pub afp: String,

    #[arg(long, help = "Albumin (g/L)")]
    pub alb: String,

    #[arg(long, help = "Gamma-GT (U/L)")]
    pub ggt: String,

    #[arg(long, default_value_t = false, help = "Emit JSON instead of a summary")]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(long, help = "Path to the ONNX model file")]
    pub model: PathBuf,

    #[arg(long, default_value_t = 120, help = "Model load timeout (seconds)")]
    pub load_timeout: u64,

    #[arg(long, help = "Input CSV file")]
    pub input: PathBuf,

    #[arg(long, help = "Output CSV file")]
    pub out: PathBuf,

    #[arg(long, value_enum)]
    pub mode: ModeArg,

    #[arg(long, help = "Also write a JSON report to this path")]
    pub json: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    #[arg(long, value_enum)]
    pub mode: ModeArg,

    #[arg(long, help = "Write to this path instead of stdout")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long, help = "Input CSV file")]
    pub input: PathBuf,

    #[arg(long, value_enum)]
    pub mode: ModeArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Form,
    Score,
}
