use crate::analysis::frequency::FrequencyAggregator;
use crate::detail::dispatch::strategy_name;
use crate::errors::ReportResult;
use crate::format::metrics::{format_percentage, PERCENT_PRECISION};
use crate::model::{AssetResult, FeatureSummary, ResultModel};
use crate::report::layout::{secondary_rows, LayoutKind};
use crate::report::parameters::parameter_section;
use crate::report::types::{
    AssetSection, DetailTarget, FrequencyTable, HeatmapSection, RankedEntry, Report, RowGroup,
    Section,
};

/// Fraction digits of heatmap cell percentages.
const HEATMAP_PRECISION: usize = 1;

/// Builds the full report for one model.
///
/// Section order: parameters (when present), heatmap and one ranked table
/// per slot (feature-analysis mode only), then one section per asset in model
/// order. Any input-integrity error aborts the whole render; no partial
/// report is returned.
pub fn build_report(model: &ResultModel) -> ReportResult<Report> {
    let layout = LayoutKind::for_model(model);
    tracing::debug!(
        assets = model.assets.len(),
        layout = ?layout,
        feature_analysis = model.features.is_some(),
        "assembling report"
    );

    let mut sections = Vec::new();

    if let Some(parameters) = parameter_section(model)? {
        sections.push(Section::Parameters(parameters));
    }

    if let Some(summary) = &model.features {
        feature_sections(summary, &mut sections)?;
    }

    for (asset_index, asset) in model.assets.iter().enumerate() {
        sections.push(Section::Asset(asset_section(layout, asset_index, asset)?));
    }

    let report = Report { sections };
    tracing::info!(
        sections = report.sections.len(),
        strategies = report.row_groups().count(),
        "report assembled"
    );
    Ok(report)
}

fn feature_sections(summary: &FeatureSummary, sections: &mut Vec<Section>) -> ReportResult<()> {
    let aggregator = FrequencyAggregator::new(summary)?;

    let matrix = aggregator.combination_matrix().to_vec();
    let cells = matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(|&ratio| format_percentage(ratio, HEATMAP_PRECISION))
                .collect()
        })
        .collect();
    sections.push(Section::Heatmap(HeatmapSection {
        labels: aggregator.feature_names(),
        matrix,
        cells,
    }));

    for (slot, ranked) in aggregator.ranked_tables()?.into_iter().enumerate() {
        let entries = ranked
            .into_iter()
            .map(|feature| RankedEntry {
                display: format_percentage(feature.frequency, PERCENT_PRECISION),
                feature,
            })
            .collect();
        sections.push(Section::FrequencyTable(FrequencyTable {
            slot,
            title: format!("Feature #{}", slot + 1),
            entries,
        }));
    }
    Ok(())
}

fn asset_section(layout: LayoutKind, asset_index: usize, asset: &AssetResult) -> ReportResult<AssetSection> {
    let mut groups = Vec::with_capacity(asset.strategies.len());
    for (index, strategy) in asset.strategies.iter().enumerate() {
        let primary = layout.primary_rows(strategy).map_err(|e| {
            tracing::warn!(strategy = %strategy_name(&asset.symbol, index), error = %e, "rejecting model");
            e
        })?;
        groups.push(RowGroup {
            title: format!("{} Strategy #{}", asset.symbol, index + 1),
            primary,
            secondary: secondary_rows(strategy),
            equity_curve: strategy.plot.clone(),
            detail: DetailTarget {
                asset: asset_index,
                strategy: index,
            },
        });
    }

    Ok(AssetSection {
        symbol: asset.symbol.clone(),
        header: format!("{} ({} Strategies)", asset.symbol, asset.strategies.len()),
        plot: asset.plot.clone(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ReportError;
    use crate::report::types::Cell;
    use serde_json::{json, Value};

    fn strategy(exit: &str) -> Value {
        json!({
            "side": 0,
            "features": [
                {"symbol": "XYZ", "name": "gap", "min": 0.1, "max": 0.5},
                {"symbol": "XYZ", "name": "gap", "min": 0.1, "max": 0.5}
            ],
            "exit": exit,
            "returns": 150.5,
            "riskAdjusted": 1.2345,
            "riskAdjustedMin": 0.8,
            "riskAdjustedRecent": 1.1,
            "maxDrawdown": 0.1,
            "tradesRatio": 0.75,
            "plot": "file:///tmp/equity.png",
            "weekdayPlot": "file:///tmp/weekday.png"
        })
    }

    fn model(value: Value) -> ResultModel {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_preserves_asset_and_strategy_order() {
        let m = model(json!({
            "assets": [
                {"symbol": "NQ", "strategies": [strategy("Hold 4h"), strategy("Hold 8h")]},
                {"symbol": "ES", "strategies": [strategy("Hold 2h")]}
            ]
        }));
        let report = build_report(&m).unwrap();
        let titles: Vec<_> = report.row_groups().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["NQ Strategy #1", "NQ Strategy #2", "ES Strategy #1"]);
        let headers: Vec<_> = report.asset_sections().map(|a| a.header.as_str()).collect();
        assert_eq!(headers, ["NQ (2 Strategies)", "ES (1 Strategies)"]);
        let last = report.row_groups().last().unwrap();
        assert_eq!(last.detail, DetailTarget { asset: 1, strategy: 0 });
    }

    #[test]
    fn test_feature_sections_precede_assets() {
        let m = model(json!({
            "assets": [{"symbol": "ES", "strategies": [strategy("Hold 4h")]}],
            "features": {
                "features": [
                    {"name": "gap", "frequencies": [0.2, 0.7]},
                    {"name": "momentum", "frequencies": [0.8, 0.3]}
                ],
                "combinations": [[0.1, 0.4], [0.4, 0.1]]
            }
        }));
        let report = build_report(&m).unwrap();
        assert_eq!(report.sections.len(), 4);
        let Section::Heatmap(heatmap) = &report.sections[0] else {
            panic!("expected heatmap first, got {:?}", report.sections[0]);
        };
        assert_eq!(heatmap.labels, ["gap", "momentum"]);
        assert_eq!(heatmap.cells[0][1], "40.0%");
        let Section::FrequencyTable(first) = &report.sections[1] else {
            panic!("expected ranked table, got {:?}", report.sections[1]);
        };
        assert_eq!(first.title, "Feature #1");
        assert_eq!(first.entries[0].feature.name, "momentum");
        assert_eq!(first.entries[0].display, "80.00%");
        let Section::FrequencyTable(second) = &report.sections[2] else {
            panic!("expected ranked table, got {:?}", report.sections[2]);
        };
        assert_eq!(second.entries[0].feature.name, "gap");
        assert!(matches!(report.sections[3], Section::Asset(_)));
    }

    #[test]
    fn test_empty_feature_summary() {
        let m = model(json!({
            "assets": [{"symbol": "ES", "strategies": [strategy("Hold 4h")]}],
            "features": {"features": [], "combinations": []}
        }));
        let report = build_report(&m).unwrap();
        assert_eq!(report.sections.len(), 2);
        let Section::Heatmap(heatmap) = &report.sections[0] else {
            panic!("expected heatmap first, got {:?}", report.sections[0]);
        };
        assert!(heatmap.labels.is_empty());
        assert!(heatmap.matrix.is_empty());
        assert!(heatmap.cells.is_empty());
        assert!(!report.sections.iter().any(|s| matches!(s, Section::FrequencyTable(_))));
        assert!(matches!(report.sections[1], Section::Asset(_)));
    }

    #[test]
    fn test_bad_exit_aborts_render() {
        let m = model(json!({
            "assets": [{"symbol": "ES", "strategies": [strategy("Hold 4h"), strategy("exit")]}]
        }));
        assert!(matches!(build_report(&m), Err(ReportError::MissingHoldingTime(_))));
    }

    #[test]
    fn test_mismatched_frequencies_abort_render() {
        let m = model(json!({
            "assets": [],
            "features": {
                "features": [
                    {"name": "gap", "frequencies": [0.2, 0.7]},
                    {"name": "momentum", "frequencies": [0.8]}
                ],
                "combinations": [[0.1, 0.4], [0.4, 0.1]]
            }
        }));
        assert!(matches!(build_report(&m), Err(ReportError::FrequencyLength { .. })));
    }

    #[test]
    fn test_seasonality_mode_switches_layout() {
        let mut s = strategy("Hold 4h");
        s["weekday"] = json!(5);
        s["timeOfDay"] = json!("10:00");
        let m = model(json!({
            "seasonalityMode": true,
            "assets": [{"symbol": "ES", "strategies": [s]}]
        }));
        let report = build_report(&m).unwrap();
        let group = report.row_groups().next().unwrap();
        assert!(group.row("Feature 1").is_none());
        assert_eq!(group.row("Weekday").unwrap().value, Cell::text("Friday"));
        assert_eq!(group.row("Entry time").unwrap().value.display(), "10:00");
        assert_eq!(group.primary.len(), group.secondary.len());
    }
}
