//! Feature statistics report for the archive and validation views.
//! One section per feature, model order.

use crate::format::metrics::{format_percentage, round_value, PERCENT_PRECISION};
use crate::model::stats::{FeatureStats, StatsModel};
use crate::report::types::{Cell, Row};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureStatsSection {
    pub rows: Vec<Row>,
    pub plot: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub symbol: String,
    pub plot: Option<String>,
    pub features: Vec<FeatureStatsSection>,
}

/// `missing_value_warning`: nil ratio at or above which the "Missing Values"
/// cell is flagged.
pub fn build_stats_report(model: &StatsModel, missing_value_warning: f64) -> StatsReport {
    let features = model
        .features
        .iter()
        .map(|f| feature_section(f, missing_value_warning))
        .collect::<Vec<_>>();
    let flagged = model
        .features
        .iter()
        .filter(|f| f.nil_ratio >= missing_value_warning)
        .count();
    tracing::debug!(symbol = %model.symbol, features = features.len(), flagged, "built stats report");
    StatsReport {
        symbol: model.symbol.clone(),
        plot: model.plot.clone(),
        features,
    }
}

fn feature_section(stats: &FeatureStats, missing_value_warning: f64) -> FeatureStatsSection {
    let missing = format_percentage(stats.nil_ratio, PERCENT_PRECISION);
    let missing = if stats.nil_ratio >= missing_value_warning {
        Cell::Warning(missing)
    } else {
        Cell::Numeric(missing)
    };
    FeatureStatsSection {
        rows: vec![
            Row::new("Property", Cell::text(stats.name.as_str())),
            Row::new("Missing Values", missing),
            Row::new("Minimum", Cell::Numeric(round_value(stats.min))),
            Row::new("Maximum", Cell::Numeric(round_value(stats.max))),
            Row::new("Mean", Cell::Numeric(round_value(stats.mean))),
            Row::new("Standard Deviation", Cell::Numeric(round_value(stats.std_dev))),
        ],
        plot: stats.plot.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model() -> StatsModel {
        serde_json::from_value(json!({
            "symbol": "ES",
            "plot": "file:///tmp/ES.daily.png",
            "features": [
                {"name": "momentum1D", "plot": "file:///tmp/a.png", "nilRatio": 0.02,
                 "min": -0.05, "max": 0.04, "mean": 0.0001, "stdDev": 0.0123},
                {"name": "volume", "nilRatio": 0.1,
                 "min": 12.0, "max": 90000.0, "mean": 4500.5, "stdDev": 812.25}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_rows_formatted() {
        let report = build_stats_report(&model(), 0.1);
        assert_eq!(report.plot.as_deref(), Some("file:///tmp/ES.daily.png"));
        let rows = &report.features[0].rows;
        let shown: Vec<_> = rows.iter().map(|r| r.value.display()).collect();
        assert_eq!(shown, ["momentum1D", "2.00%", "-0.050", "0.040", "0", "0.012"]);
        assert_eq!(rows[1].value, Cell::Numeric("2.00%".to_string()));
    }

    #[test]
    fn test_missing_values_flagged_at_threshold() {
        let report = build_stats_report(&model(), 0.1);
        let second = &report.features[1];
        assert_eq!(second.rows[1].value, Cell::Warning("10.00%".to_string()));
        assert_eq!(second.rows[2].value.display(), "12");
        assert!(second.plot.is_none());
    }
}
