use crate::format::metrics::truncate_threshold;
use crate::model::FeatureThreshold;

/// Placeholder for a collapsed or absent value.
pub const EMPTY_CELL: &str = "-";

/// Display form of a strategy's two entry conditions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FeaturePair {
    pub first: String,
    pub second: String,
}

/// `"ES.momentum1D (0.1, 0.25)"`
pub fn describe_feature(threshold: &FeatureThreshold) -> String {
    format!(
        "{}.{} ({}, {})",
        threshold.symbol,
        threshold.name,
        truncate_threshold(threshold.min),
        truncate_threshold(threshold.max),
    )
}

/// The second descriptor collapses to `"-"` when it reads the same as the
/// first. Compared after truncation, so near-identical raw ranges collapse too.
pub fn describe_feature_pair(first: &FeatureThreshold, second: &FeatureThreshold) -> FeaturePair {
    let first = describe_feature(first);
    let second = describe_feature(second);
    if first == second {
        FeaturePair {
            first,
            second: EMPTY_CELL.to_string(),
        }
    } else {
        FeaturePair { first, second }
    }
}
