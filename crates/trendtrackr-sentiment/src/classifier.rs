//! Fixed-threshold mapping from compound score to [`Label`].

use crate::types::Label;

/// Compound scores at or above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores at or below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Classify a compound score. Both boundaries are inclusive; NaN is neutral.
#[must_use]
pub fn classify(compound: f64) -> Label {
    if compound >= POSITIVE_THRESHOLD {
        Label::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        Label::Negative
    } else {
        Label::Neutral
    }
}
