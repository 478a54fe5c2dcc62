pub mod stats;

use chrono::NaiveDate;
use serde::Deserialize;

// ── Side ──

/// Directional bias of a strategy. Encoded as 0/1 by the analytics engine,
/// written out as the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(try_from = "u8", into = "String")]
pub enum Side {
    Long,
    Short,
}

impl TryFrom<u8> for Side {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Long),
            1 => Ok(Self::Short),
            other => Err(format!("invalid side {other}, expected 0 (long) or 1 (short)")),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Long => write!(f, "Long"),
            Self::Short => write!(f, "Short"),
        }
    }
}

impl From<Side> for String {
    fn from(side: Side) -> Self {
        side.to_string()
    }
}

// ── Result model ──

/// Top-level input of the data-mining report. Read-only for one render.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultModel {
    #[serde(alias = "results")]
    pub assets: Vec<AssetResult>,
    #[serde(default)]
    pub features: Option<FeatureSummary>,
    #[serde(default)]
    pub seasonality_mode: bool,
    #[serde(default)]
    pub date_min: Option<NaiveDate>,
    #[serde(default)]
    pub date_max: Option<NaiveDate>,
    #[serde(default)]
    pub time_min: Option<String>,
    #[serde(default)]
    pub time_max: Option<String>,
    #[serde(default)]
    pub optimize_weeks: bool,
    #[serde(default)]
    pub thresholds: Option<MiningThresholds>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MiningThresholds {
    pub range: f64,
    pub increment: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetResult {
    pub symbol: String,
    #[serde(default)]
    pub plot: Option<String>,
    pub strategies: Vec<Strategy>,
}

/// One mined strategy with its pre-computed backtest metrics.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Strategy {
    pub side: Side,
    pub features: [FeatureThreshold; 2],
    #[serde(default)]
    pub time_of_day: Option<String>,
    /// 1-5, Monday to Friday. Validated when the row is built.
    #[serde(default)]
    pub weekday: Option<i64>,
    /// Exit rule label; the first digit run is the holding time in hours.
    pub exit: String,
    pub returns: f64,
    pub risk_adjusted: f64,
    pub risk_adjusted_min: f64,
    pub risk_adjusted_recent: f64,
    pub max_drawdown: f64,
    pub trades_ratio: f64,
    #[serde(default)]
    pub optimize_weekdays: bool,
    #[serde(default)]
    pub stop_loss: Option<f64>,
    pub plot: String,
    pub weekday_plot: String,
    #[serde(default)]
    pub recent_plot: Option<String>,
}

/// Numeric range on a named signal used as an entry condition.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureThreshold {
    pub symbol: String,
    pub name: String,
    pub min: f64,
    pub max: f64,
}

// ── Feature analysis ──

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureSummary {
    pub features: Vec<FeatureFrequency>,
    /// N x N co-occurrence ratios, N = `features.len()`.
    #[serde(default)]
    pub combinations: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFrequency {
    pub name: String,
    /// Ratio per slot, slot k = "used as feature #k+1".
    pub frequencies: Vec<f64>,
}
