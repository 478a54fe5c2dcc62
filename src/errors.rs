/// Domain-specific error types for report rendering.
/// Input-integrity errors abort the single render (or detail open) in
/// progress. They are never masked by a display fallback.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("invalid weekday {0}, expected 1-5")]
    InvalidWeekday(i64),

    #[error("exit rule has no holding time: {0:?}")]
    MissingHoldingTime(String),

    #[error("feature {feature} has {found} frequency slots, expected {expected}")]
    FrequencyLength {
        feature: String,
        expected: usize,
        found: usize,
    },

    #[error("combination matrix is not {expected}x{expected}: {rows} rows, row {row} has {found} columns")]
    MatrixShape {
        expected: usize,
        rows: usize,
        row: usize,
        found: usize,
    },

    #[error("frequency slot {slot} out of range ({slots} slots)")]
    SlotOutOfRange { slot: usize, slots: usize },

    #[error("no strategy #{strategy} for asset #{asset}")]
    UnknownStrategy { asset: usize, strategy: usize },

    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Parse(e.to_string())
    }
}

impl From<std::io::Error> for ReportError {
    fn from(e: std::io::Error) -> Self {
        ReportError::Io(e.to_string())
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
