use crate::errors::{ReportError, ReportResult};
use crate::format::features::EMPTY_CELL;
use crate::format::metrics::round_value;
use crate::model::ResultModel;
use crate::report::types::{Cell, ParameterSection, Row};
use chrono::{NaiveDate, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Mining parameters the model was produced with. `None` when the model
/// carries no date, time or threshold settings at all.
pub fn parameter_section(model: &ResultModel) -> ReportResult<Option<ParameterSection>> {
    let has_parameters = model.date_min.is_some()
        || model.date_max.is_some()
        || model.time_min.is_some()
        || model.time_max.is_some()
        || model.thresholds.is_some();
    if !has_parameters {
        return Ok(None);
    }

    let time_min = parse_time("timeMin", model.time_min.as_deref())?;
    let time_max = parse_time("timeMax", model.time_max.as_deref())?;

    let mut rows = vec![
        Row::new("From", Cell::text(date_text(model.date_min))),
        Row::new("To", Cell::text(date_text(model.date_max))),
        Row::new(
            "Time of day",
            Cell::text(format!("{} - {}", time_text(time_min), time_text(time_max))),
        ),
    ];
    if let Some(thresholds) = model.thresholds {
        rows.push(Row::new("Threshold range", Cell::Numeric(round_value(thresholds.range))));
        rows.push(Row::new(
            "Threshold increment",
            Cell::Numeric(round_value(thresholds.increment)),
        ));
    }
    let optimization = if model.optimize_weeks { "Enabled" } else { "Disabled" };
    rows.push(Row::new("Weekday optimization", Cell::text(optimization)));

    Ok(Some(ParameterSection { rows }))
}

fn parse_time(field: &str, value: Option<&str>) -> ReportResult<Option<NaiveTime>> {
    value
        .map(|s| {
            NaiveTime::parse_from_str(s, TIME_FORMAT)
                .map_err(|e| ReportError::InvalidModel(format!("{field} {s:?}: {e}")))
        })
        .transpose()
}

fn date_text(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}

fn time_text(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}
