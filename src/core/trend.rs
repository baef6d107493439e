use crate::domain::model::TrendLabel;

/// `last` must exceed `first` by more than this factor to count as upward.
pub const UPWARD_FACTOR: f64 = 1.05;
/// `last` must fall below `first` times this factor to count as downward.
pub const DOWNWARD_FACTOR: f64 = 0.95;

/// Classifies a series (oldest first) by comparing its last value against its first.
///
/// Intermediate points are ignored. Values exactly on the ±5% band edges are
/// `Stable`, as is any series with fewer than two points.
pub fn classify(observations: &[f64]) -> TrendLabel {
    let (first, last) = match (observations.first(), observations.last()) {
        (Some(&first), Some(&last)) if observations.len() >= 2 => (first, last),
        _ => return TrendLabel::Stable,
    };

    if last > first * UPWARD_FACTOR {
        TrendLabel::Upward
    } else if last < first * DOWNWARD_FACTOR {
        TrendLabel::Downward
    } else {
        TrendLabel::Stable
    }
}
