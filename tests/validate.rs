use hepascore::limits::Field;
use hepascore::record::RawRecord;
use hepascore::validate::{validate_field, validate_record, FieldError};

#[test]
fn accepts_values_inside_range() {
    assert_eq!(validate_field(Field::Age, "55"), Ok(55.0));
    assert_eq!(validate_field(Field::Afp, "4224"), Ok(4224.0));
    assert_eq!(validate_field(Field::Kcnq1, "2.5"), Ok(2.5));
}

#[test]
fn bounds_are_inclusive() {
    assert_eq!(validate_field(Field::Age, "18"), Ok(18.0));
    assert_eq!(validate_field(Field::Age, "120"), Ok(120.0));
    assert_eq!(validate_field(Field::Alb, "10"), Ok(10.0));
    assert_eq!(validate_field(Field::Kcnq1, "0"), Ok(0.0));
}

#[test]
fn rejects_out_of_range() {
    assert_eq!(
        validate_field(Field::Age, "17"),
        Err(FieldError::BelowMin(18.0))
    );
    assert_eq!(
        validate_field(Field::Age, "121"),
        Err(FieldError::AboveMax(120.0))
    );
    assert_eq!(
        validate_field(Field::Alb, "9.9"),
        Err(FieldError::BelowMin(10.0))
    );
    assert_eq!(
        validate_field(Field::Kcnq1, "-0.001"),
        Err(FieldError::BelowMin(0.0))
    );
}

#[test]
fn rejects_empty_and_non_numeric() {
    assert_eq!(validate_field(Field::Age, ""), Err(FieldError::Required));
    assert_eq!(validate_field(Field::Age, "   "), Err(FieldError::Required));
    assert_eq!(
        validate_field(Field::Age, "abc"),
        Err(FieldError::NotNumeric)
    );
    assert_eq!(
        validate_field(Field::Age, "inf"),
        Err(FieldError::NotNumeric)
    );
    assert_eq!(
        validate_field(Field::Age, "NaN"),
        Err(FieldError::NotNumeric)
    );
}

#[test]
fn score_field_has_no_bounds() {
    assert_eq!(validate_field(Field::Score, "-100"), Ok(-100.0));
    assert_eq!(validate_field(Field::Score, "1e6"), Ok(1e6));
}

#[test]
fn trims_whitespace_before_parsing() {
    assert_eq!(validate_field(Field::Age, " 55 "), Ok(55.0));
}

#[test]
fn record_validation_aggregates_per_field() {
    let record = RawRecord::Form {
        kcnq1: "2.5".to_string(),
        linc01785: "".to_string(),
        age: "17".to_string(),
        afp: "4224".to_string(),
        alb: "x".to_string(),
        ggt: "108.3".to_string(),
    };
    let errors = validate_record(&record).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.contains(&(Field::Linc01785, FieldError::Required)));
    assert!(errors.contains(&(Field::Age, FieldError::BelowMin(18.0))));
    assert!(errors.contains(&(Field::Alb, FieldError::NotNumeric)));
}

#[test]
fn record_validation_passes_clean_input() {
    let record = RawRecord::Score {
        score: "2.5".to_string(),
        age: "55".to_string(),
        afp: "4224".to_string(),
        alb: "37.6".to_string(),
        ggt: "108.3".to_string(),
    };
    assert!(validate_record(&record).is_ok());
}
