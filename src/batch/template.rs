//! CSV upload templates: one fully-populated example row and one
//! partially-empty row demonstrating imputation.

use crate::record::InputMode;

const TEMPLATE_COMMENT: &str = "# Empty values are filled with defaults typical of healthy individuals and flagged in the imputedFields column.";

pub fn template(mode: InputMode) -> String {
    match mode {
        InputMode::Form => format!(
            "{}\nsampleId,kcnq1,linc01785,age,afp,alb,ggt\nsample1,2.5,3.1,55,4224,37.6,108.3\nsample2,,,60,,40,\n",
            TEMPLATE_COMMENT
        ),
        InputMode::Score => format!(
            "{}\nsampleId,score,age,afp,alb,ggt\nsample1,2.5,55,4224,37.6,108.3\nsample2,,60,,40,\n",
            TEMPLATE_COMMENT
        ),
    }
}
