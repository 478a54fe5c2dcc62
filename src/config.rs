use crate::errors::{ReportError, ReportResult};
use std::path::PathBuf;

/// Which report the host should build from the model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Data-mining strategy report (`ResultModel`).
    DataMine,
    /// Per-feature archive/validation statistics (`StatsModel`).
    Stats,
}

impl std::str::FromStr for ReportKind {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "datamine" | "data-mine" => Ok(Self::DataMine),
            "stats" | "archive" | "validate" => Ok(Self::Stats),
            other => Err(ReportError::Config(format!("REPORT_KIND: unknown kind {other:?}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub model_path: PathBuf,
    pub kind: ReportKind,
    pub output_path: Option<PathBuf>,
    pub pretty: bool,
    pub missing_value_warning: f64,
}

impl AppConfig {
    pub fn from_env() -> ReportResult<Self> {
        dotenvy::dotenv().ok();

        let kind = env_var_or("REPORT_KIND", "datamine").parse::<ReportKind>()?;

        let pretty = env_var_or("REPORT_PRETTY", "true")
            .parse::<bool>()
            .map_err(|e| ReportError::Config(format!("REPORT_PRETTY: {e}")))?;

        let missing_value_warning = env_var_or("MISSING_VALUE_WARNING", "0.1")
            .parse::<f64>()
            .map_err(|e| ReportError::Config(format!("MISSING_VALUE_WARNING: {e}")))?;
        if !(0.0..=1.0).contains(&missing_value_warning) {
            return Err(ReportError::Config(format!(
                "MISSING_VALUE_WARNING: {missing_value_warning} is not a ratio in [0, 1]"
            )));
        }

        Ok(Self {
            model_path: PathBuf::from(env_var("REPORT_MODEL_PATH")?),
            kind,
            output_path: std::env::var("REPORT_OUTPUT_PATH")
                .ok()
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            pretty,
            missing_value_warning,
        })
    }
}

fn env_var(key: &str) -> ReportResult<String> {
    std::env::var(key).map_err(|_| ReportError::Config(format!("missing env var: {key}")))
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
