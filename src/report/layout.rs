//! Per-strategy row sets.
//!
//! The layout is chosen once per model (`LayoutKind::for_model`) and each
//! kind has a single row builder. Both produce the same number of primary
//! rows; the secondary metric column never varies.

use crate::errors::{ReportError, ReportResult};
use crate::format::features::{describe_feature_pair, EMPTY_CELL};
use crate::format::metrics::{format_money, format_percentage, format_ratio, PERCENT_PRECISION};
use crate::model::{ResultModel, Strategy};
use crate::report::types::{Cell, Row};
use smallvec::SmallVec;

pub const WEEKDAYS: [&str; 5] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

/// Fraction digits of the stop-loss percentage in the options string.
const STOP_LOSS_PRECISION: usize = 1;

pub const PRIMARY_ROWS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Seasonality,
    Threshold,
}

impl LayoutKind {
    #[inline]
    pub fn for_model(model: &ResultModel) -> Self {
        if model.seasonality_mode {
            Self::Seasonality
        } else {
            Self::Threshold
        }
    }

    pub fn primary_rows(self, strategy: &Strategy) -> ReportResult<Vec<Row>> {
        match self {
            Self::Seasonality => seasonality_rows(strategy),
            Self::Threshold => threshold_rows(strategy),
        }
    }
}

fn seasonality_rows(strategy: &Strategy) -> ReportResult<Vec<Row>> {
    let weekday = match strategy.weekday {
        Some(day) => weekday_name(day)?,
        None => EMPTY_CELL,
    };
    Ok(vec![
        Row::new("Side", Cell::Side(strategy.side)),
        Row::new("Weekday", Cell::text(weekday)),
        Row::new("Entry time", Cell::text(entry_time(strategy))),
        Row::new("Holding time", Cell::text(holding_time(&strategy.exit)?)),
        Row::blank(),
        Row::blank(),
    ])
}

fn threshold_rows(strategy: &Strategy) -> ReportResult<Vec<Row>> {
    let [first, second] = &strategy.features;
    let pair = describe_feature_pair(first, second);
    Ok(vec![
        Row::new("Feature 1", Cell::Text(pair.first)),
        Row::new("Feature 2", Cell::Text(pair.second)),
        Row::new("Side", Cell::Side(strategy.side)),
        Row::new("Entry time", Cell::text(entry_time(strategy))),
        Row::new("Holding time", Cell::text(holding_time(&strategy.exit)?)),
        Row::new("Options", Cell::Text(options(strategy))),
    ])
}

/// Fixed metric column shared by both layouts.
pub fn secondary_rows(strategy: &Strategy) -> Vec<Row> {
    vec![
        Row::new("Returns", Cell::Numeric(format_money(strategy.returns))),
        Row::new("RAR", Cell::Numeric(format_ratio(strategy.risk_adjusted))),
        Row::new("MinRAR", Cell::Numeric(format_ratio(strategy.risk_adjusted_min))),
        Row::new("RecRAR", Cell::Numeric(format_ratio(strategy.risk_adjusted_recent))),
        Row::new(
            "Max Drawdown",
            Cell::Numeric(format_percentage(strategy.max_drawdown, PERCENT_PRECISION)),
        ),
        Row::new(
            "Days Traded",
            Cell::Numeric(format_percentage(strategy.trades_ratio, PERCENT_PRECISION)),
        ),
    ]
}

/// 1 = Monday ... 5 = Friday. Anything else means the model is corrupt.
pub fn weekday_name(day: i64) -> ReportResult<&'static str> {
    if (1..=WEEKDAYS.len() as i64).contains(&day) {
        Ok(WEEKDAYS[(day - 1) as usize])
    } else {
        Err(ReportError::InvalidWeekday(day))
    }
}

/// First digit run of the exit label as hours: `"Hold 4h then exit" -> "4h"`.
pub fn holding_time(exit: &str) -> ReportResult<String> {
    let start = exit
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| ReportError::MissingHoldingTime(exit.to_string()))?;
    let digits = &exit[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let hours = digits[..end]
        .parse::<u32>()
        .map_err(|_| ReportError::MissingHoldingTime(exit.to_string()))?;
    Ok(format!("{hours}h"))
}

fn entry_time(strategy: &Strategy) -> &str {
    strategy.time_of_day.as_deref().unwrap_or(EMPTY_CELL)
}

/// `"Weekday optimization, Stop-loss at 2.5%"`, or `"-"` when neither applies.
pub fn options(strategy: &Strategy) -> String {
    let mut parts: SmallVec<[String; 2]> = SmallVec::new();
    if strategy.optimize_weekdays {
        parts.push("Weekday optimization".to_string());
    }
    if let Some(stop_loss) = strategy.stop_loss {
        parts.push(format!(
            "Stop-loss at {}",
            format_percentage(stop_loss, STOP_LOSS_PRECISION)
        ));
    }
    if parts.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::{FeatureThreshold, Side};

    pub(crate) fn sample_strategy() -> Strategy {
        let feature = FeatureThreshold {
            symbol: "ES".to_string(),
            name: "momentum1D".to_string(),
            min: 0.1,
            max: 0.2,
        };
        Strategy {
            side: Side::Long,
            features: [feature.clone(), feature],
            time_of_day: None,
            weekday: None,
            exit: "Hold 24h".to_string(),
            returns: 150.5,
            risk_adjusted: 1.2345,
            risk_adjusted_min: 0.5,
            risk_adjusted_recent: 2.0,
            max_drawdown: 0.1,
            trades_ratio: 0.75,
            optimize_weekdays: false,
            stop_loss: None,
            plot: "file:///tmp/ES.strategy01.png".to_string(),
            weekday_plot: "file:///tmp/ES.strategy01.weekday.png".to_string(),
            recent_plot: None,
        }
    }

    fn value<'a>(rows: &'a [Row], label: &str) -> &'a Cell {
        &rows.iter().find(|r| r.label == label).unwrap().value
    }

    #[test]
    fn test_holding_time_extraction() {
        assert_eq!(holding_time("Hold 4h then exit").unwrap(), "4h");
        assert_eq!(holding_time("Returns24H").unwrap(), "24h");
        assert_eq!(holding_time("72").unwrap(), "72h");
    }

    #[test]
    fn test_holding_time_without_digits_fatal() {
        let err = holding_time("exit").unwrap_err();
        assert!(matches!(err, ReportError::MissingHoldingTime(ref s) if s == "exit"), "got {err:?}");
    }

    #[test]
    fn test_weekday_lookup() {
        assert_eq!(weekday_name(1).unwrap(), "Monday");
        assert_eq!(weekday_name(5).unwrap(), "Friday");
        assert!(matches!(weekday_name(0), Err(ReportError::InvalidWeekday(0))));
        assert!(matches!(weekday_name(6), Err(ReportError::InvalidWeekday(6))));
        assert!(matches!(weekday_name(-3), Err(ReportError::InvalidWeekday(-3))));
    }

    #[test]
    fn test_options_string() {
        let mut s = sample_strategy();
        assert_eq!(options(&s), "-");
        s.optimize_weekdays = true;
        assert_eq!(options(&s), "Weekday optimization");
        s.stop_loss = Some(0.025);
        assert_eq!(options(&s), "Weekday optimization, Stop-loss at 2.5%");
        s.optimize_weekdays = false;
        assert_eq!(options(&s), "Stop-loss at 2.5%");
    }

    #[test]
    fn test_threshold_layout() {
        let rows = LayoutKind::Threshold.primary_rows(&sample_strategy()).unwrap();
        assert_eq!(rows.len(), PRIMARY_ROWS);
        assert_eq!(value(&rows, "Feature 1").display(), "ES.momentum1D (0.1, 0.2)");
        assert_eq!(value(&rows, "Feature 2").display(), "-");
        assert_eq!(value(&rows, "Side"), &Cell::Side(Side::Long));
        assert_eq!(value(&rows, "Entry time").display(), "-");
        assert_eq!(value(&rows, "Holding time").display(), "24h");
        assert_eq!(value(&rows, "Options").display(), "-");
    }

    #[test]
    fn test_short_side_in_both_layouts() {
        let mut s = sample_strategy();
        s.side = Side::Short;
        s.weekday = Some(1);
        for layout in [LayoutKind::Threshold, LayoutKind::Seasonality] {
            let rows = layout.primary_rows(&s).unwrap();
            assert_eq!(value(&rows, "Side"), &Cell::Side(Side::Short));
            assert_eq!(value(&rows, "Side").display(), "Short");
        }
    }

    #[test]
    fn test_seasonality_layout_pads_rows() {
        let mut s = sample_strategy();
        s.weekday = Some(3);
        s.time_of_day = Some("09:00".to_string());
        let rows = LayoutKind::Seasonality.primary_rows(&s).unwrap();
        assert_eq!(rows.len(), PRIMARY_ROWS);
        assert_eq!(value(&rows, "Weekday").display(), "Wednesday");
        assert_eq!(value(&rows, "Entry time").display(), "09:00");
        assert_eq!(rows.iter().filter(|r| r.value == Cell::Blank).count(), 2);
    }

    #[test]
    fn test_seasonality_invalid_weekday_fatal() {
        let mut s = sample_strategy();
        s.weekday = Some(6);
        assert!(LayoutKind::Seasonality.primary_rows(&s).is_err());
        // threshold layout never looks at the weekday
        assert!(LayoutKind::Threshold.primary_rows(&s).is_ok());
    }

    #[test]
    fn test_secondary_rows() {
        let rows = secondary_rows(&sample_strategy());
        let shown: Vec<_> = rows.iter().map(|r| (r.label, r.value.display())).collect();
        assert_eq!(
            shown,
            [
                ("Returns", "$150.50".to_string()),
                ("RAR", "1.235".to_string()),
                ("MinRAR", "0.500".to_string()),
                ("RecRAR", "2.000".to_string()),
                ("Max Drawdown", "10.00%".to_string()),
                ("Days Traded", "75.00%".to_string()),
            ]
        );
    }
}
