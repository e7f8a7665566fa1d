use anyhow::Result;
use tracing::{info, warn};

use crate::batch::BatchCtx;
use crate::io::csv;
use crate::pipeline::Stage;

pub const SAMPLE_ID_COLUMN: &str = "sampleId";

pub struct Stage1Parse;

impl Stage1Parse {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Parse {
    fn name(&self) -> &'static str {
        "stage1_parse"
    }

    fn run(&self, ctx: &mut BatchCtx) -> Result<()> {
        let table = csv::parse_csv(&ctx.csv_text)?;

        if table.column(SAMPLE_ID_COLUMN).is_none() {
            warn!("no sampleId column; sample ids will be empty");
            ctx.warnings
                .push(format!("missing '{}' column", SAMPLE_ID_COLUMN));
        }
        for field in ctx.mode.fields() {
            if table.column(field.name()).is_none() {
                warn!(field = field.name(), "column missing; all rows will be imputed");
                ctx.warnings.push(format!(
                    "missing '{}' column; every row imputes its default",
                    field.name()
                ));
            }
        }

        info!(rows = table.rows.len(), mode = %ctx.mode, "csv parsed");
        ctx.table = Some(table);
        Ok(())
    }
}
