//! Feature standardization matching the scaler fitted at training time.

use crate::features::FeatureVector;

/// Per-feature means of the training distribution, in
/// `[score, age, afp, alb, ggt]` order.
pub const SCALER_MEANS: [f64; FeatureVector::LEN] = [
    2.5088337412890174,
    55.01156069364162,
    4224.481387283237,
    37.57687861271676,
    108.29479768786128,
];

/// Per-feature standard deviations. All strictly positive.
pub const SCALER_SCALES: [f64; FeatureVector::LEN] = [
    5.591347357350493,
    12.830143534402424,
    15972.701775588,
    6.321121358433146,
    126.6698855890084,
];

/// A feature vector after `(x - mean) / scale`, still in
/// `[score, age, afp, alb, ggt]` order. Converted to f32 only at the
/// tensor boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardizedVector(pub [f64; FeatureVector::LEN]);

/// Component-wise standardization. No clamping: values far outside the
/// training distribution pass through at whatever magnitude they produce.
pub fn standardize(features: &FeatureVector) -> StandardizedVector {
    let raw = features.to_array();
    let mut out = [0.0; FeatureVector::LEN];
    for i in 0..FeatureVector::LEN {
        out[i] = (raw[i] - SCALER_MEANS[i]) / SCALER_SCALES[i];
    }
    StandardizedVector(out)
}
