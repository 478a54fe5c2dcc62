use sibyl_report::config::{AppConfig, ReportKind};
use sibyl_report::{build_report, build_stats_report, ReportResult, ResultModel, StatsModel};
use std::io::Write;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cfg) {
        tracing::error!(model = %cfg.model_path.display(), "render failed: {e}");
        std::process::exit(1);
    }
}

fn run(cfg: &AppConfig) -> ReportResult<()> {
    tracing::info!(model = %cfg.model_path.display(), kind = ?cfg.kind, "rendering report");
    let json = std::fs::read_to_string(&cfg.model_path)?;

    // Whole model in, whole report out. Nothing is written on failure.
    let output = match cfg.kind {
        ReportKind::DataMine => {
            let model: ResultModel = serde_json::from_str(&json)?;
            to_json(&build_report(&model)?, cfg.pretty)?
        }
        ReportKind::Stats => {
            let model: StatsModel = serde_json::from_str(&json)?;
            to_json(&build_stats_report(&model, cfg.missing_value_warning), cfg.pretty)?
        }
    };

    match &cfg.output_path {
        Some(path) => {
            std::fs::write(path, output)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> ReportResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
