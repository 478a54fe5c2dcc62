pub mod analysis;
pub mod config;
pub mod detail;
pub mod errors;
pub mod format;
pub mod model;
pub mod report;

pub use detail::dispatch::{open_detail, open_detail_at, DetailViewDescriptor};
pub use errors::{ReportError, ReportResult};
pub use model::stats::StatsModel;
pub use model::ResultModel;
pub use report::assembler::build_report;
pub use report::stats::{build_stats_report, StatsReport};
pub use report::types::Report;

/// Parses a data-mining model and builds its report in one step.
pub fn render_json(json: &str) -> ReportResult<Report> {
    let model: ResultModel = serde_json::from_str(json)?;
    build_report(&model)
}
