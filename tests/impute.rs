use hepascore::batch::impute::{default_for, resolve_field};
use hepascore::limits::Field;

#[test]
fn defaults_reflect_healthy_values() {
    assert_eq!(default_for(Field::Kcnq1), 1.0);
    assert_eq!(default_for(Field::Linc01785), 1.5);
    assert_eq!(default_for(Field::Score), 0.8);
    assert_eq!(default_for(Field::Age), 45.0);
    assert_eq!(default_for(Field::Afp), 5.0);
    assert_eq!(default_for(Field::Alb), 45.0);
    assert_eq!(default_for(Field::Ggt), 20.0);
}

#[test]
fn missing_cell_imputes() {
    assert_eq!(resolve_field(Field::Afp, None), (5.0, true));
}

#[test]
fn empty_cell_imputes() {
    assert_eq!(resolve_field(Field::Afp, Some("")), (5.0, true));
    assert_eq!(resolve_field(Field::Afp, Some("   ")), (5.0, true));
}

#[test]
fn unparsable_cell_imputes() {
    assert_eq!(resolve_field(Field::Ggt, Some("n/a")), (20.0, true));
    assert_eq!(resolve_field(Field::Ggt, Some("NaN")), (20.0, true));
}

#[test]
fn parsable_cell_passes_through() {
    assert_eq!(resolve_field(Field::Age, Some("63")), (63.0, false));
    assert_eq!(resolve_field(Field::Alb, Some(" 37.6 ")), (37.6, false));
}

#[test]
fn out_of_range_values_are_not_imputed() {
    // Range checks belong to single-record validation; batch keeps the
    // value as given.
    assert_eq!(resolve_field(Field::Age, Some("150")), (150.0, false));
}
