use std::str::FromStr;

use hepascore::error::PredictError;
use hepascore::limits::Field;
use hepascore::record::InputMode;

#[test]
fn mode_parses_known_tags() {
    assert_eq!(InputMode::from_str("form").unwrap(), InputMode::Form);
    assert_eq!(InputMode::from_str("score").unwrap(), InputMode::Score);
}

#[test]
fn unknown_tag_is_invalid_mode() {
    let err = InputMode::from_str("batch").unwrap_err();
    assert!(matches!(err, PredictError::InvalidMode(ref tag) if tag == "batch"));
}

#[test]
fn form_mode_columns_in_order() {
    assert_eq!(
        InputMode::Form.fields(),
        &[
            Field::Kcnq1,
            Field::Linc01785,
            Field::Age,
            Field::Afp,
            Field::Alb,
            Field::Ggt,
        ]
    );
}

#[test]
fn score_mode_replaces_biomarkers_with_score() {
    assert_eq!(
        InputMode::Score.fields(),
        &[Field::Score, Field::Age, Field::Afp, Field::Alb, Field::Ggt]
    );
}
