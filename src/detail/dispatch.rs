//! Detail view of one strategy's plots.
//!
//! Pure: builds a self-contained descriptor and leaves window lifecycle to
//! the host. Descriptors own their data, so any number of them can be open
//! at once without touching the primary report.

use crate::errors::{ReportError, ReportResult};
use crate::model::{ResultModel, Strategy};
use crate::report::types::DetailTarget;
use serde::Serialize;

// ── Geometry ──

const WINDOW_LEFT: u32 = 100;
const WINDOW_TOP: u32 = 100;
const WINDOW_PADDING: u32 = 35;

const EQUITY_CURVE_SIZE: (u32, u32) = (1152, 768);
const WEEKDAY_PLOT_SIZE: (u32, u32) = (432, 288);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowGeometry {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl WindowGeometry {
    /// Equity curve on top, the two weekday plots side by side beneath it.
    fn detail() -> Self {
        let width = EQUITY_CURVE_SIZE.0.max(2 * WEEKDAY_PLOT_SIZE.0);
        let height = EQUITY_CURVE_SIZE.1 + WEEKDAY_PLOT_SIZE.1;
        Self {
            left: WINDOW_LEFT,
            top: WINDOW_TOP,
            width: width + WINDOW_PADDING,
            height: height + WINDOW_PADDING,
        }
    }
}

// ── Descriptor ──

/// One image slot. `image: None` renders as an empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSlot {
    pub caption: &'static str,
    pub image: Option<String>,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailViewDescriptor {
    pub title: String,
    pub window: WindowGeometry,
    pub equity_curve: DetailSlot,
    pub weekday_returns: DetailSlot,
    pub recent_weekday_returns: DetailSlot,
}

/// Selects the strategy's three plot references, passed through untouched.
/// The engine writes an empty `recentPlot` when no recent window exists, so
/// only that one treats an empty reference as absent.
pub fn open_detail(strategy: &Strategy, name: &str) -> DetailViewDescriptor {
    let slot = |caption, image: Option<String>, (width, height): (u32, u32)| DetailSlot {
        caption,
        image,
        width,
        height,
    };
    let recent_plot = strategy.recent_plot.as_deref().filter(|s| !s.is_empty());
    DetailViewDescriptor {
        title: format!("{name} - Strategy Details"),
        window: WindowGeometry::detail(),
        equity_curve: slot("Equity Curve", Some(strategy.plot.clone()), EQUITY_CURVE_SIZE),
        weekday_returns: slot(
            "Returns by Weekday (All)",
            Some(strategy.weekday_plot.clone()),
            WEEKDAY_PLOT_SIZE,
        ),
        recent_weekday_returns: slot(
            "Returns by Weekday (Recent)",
            recent_plot.map(str::to_string),
            WEEKDAY_PLOT_SIZE,
        ),
    }
}

/// Resolves a click-target binding from the report back to its strategy.
pub fn open_detail_at(model: &ResultModel, target: DetailTarget) -> ReportResult<DetailViewDescriptor> {
    let asset = model.assets.get(target.asset);
    let strategy = asset
        .and_then(|a| a.strategies.get(target.strategy))
        .ok_or(ReportError::UnknownStrategy {
            asset: target.asset,
            strategy: target.strategy,
        })?;
    let symbol = asset.map(|a| a.symbol.as_str()).unwrap_or_default();
    let name = strategy_name(symbol, target.strategy);
    tracing::debug!(strategy = %name, "opening detail view");
    Ok(open_detail(strategy, &name))
}

/// `"ES #3"` for the third strategy of ES.
pub fn strategy_name(symbol: &str, index: usize) -> String {
    format!("{symbol} #{}", index + 1)
}
