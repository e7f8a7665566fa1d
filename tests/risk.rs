use hepascore::risk::{
    afp_status, prediction_flag, risk_level, AfpStatus, RiskLevel, HIGH_CUTOFF, LOW_CUTOFF,
};

#[test]
fn tiers_below_low_cutoff() {
    assert_eq!(risk_level(0.0), RiskLevel::Low);
    assert_eq!(risk_level(0.299999), RiskLevel::Low);
}

#[test]
fn boundary_probabilities_take_the_upper_tier() {
    assert_eq!(risk_level(LOW_CUTOFF), RiskLevel::Moderate);
    assert_eq!(risk_level(HIGH_CUTOFF), RiskLevel::High);
}

#[test]
fn tiers_between_cutoffs() {
    assert_eq!(risk_level(0.5), RiskLevel::Moderate);
    assert_eq!(risk_level(0.699999), RiskLevel::Moderate);
}

#[test]
fn tiers_above_high_cutoff() {
    assert_eq!(risk_level(0.9), RiskLevel::High);
    assert_eq!(risk_level(1.0), RiskLevel::High);
}

#[test]
fn prediction_flag_fires_only_on_high() {
    assert_eq!(prediction_flag(RiskLevel::Low), 0);
    assert_eq!(prediction_flag(RiskLevel::Moderate), 0);
    assert_eq!(prediction_flag(RiskLevel::High), 1);
}

#[test]
fn afp_cutoff_is_exclusive() {
    assert_eq!(afp_status(10.0), AfpStatus::Normal);
    assert_eq!(afp_status(10.1), AfpStatus::Elevated);
    assert_eq!(afp_status(4224.0), AfpStatus::Elevated);
    assert_eq!(afp_status(5.0), AfpStatus::Normal);
}

#[test]
fn display_names_match_csv_output() {
    assert_eq!(RiskLevel::Moderate.to_string(), "Moderate");
    assert_eq!(AfpStatus::Elevated.to_string(), "Elevated");
}
