use color_eyre::eyre::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};
use super::{LogConfig, LOG_FILENAME};
use tracing::{warn, Level};
fn env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("git_persona={level}")))
}
/// Open the rolling log file under `log_dir`, creating the directory first.
pub fn open_file_appender(config: &LogConfig) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(&config.log_dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(config.rotation.clone())
        .filename_prefix(LOG_FILENAME)
        .build(&config.log_dir)?;
    Ok(appender)
}
/// Initialize logging: a rolling file under `log_dir` plus stderr.
///
/// If the log file cannot be opened only the stderr layer is installed.
/// Stdout is left alone; it carries command output.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let level = config.log_level;
    let (file_appender, file_error) = match open_file_appender(&config) {
        Ok(appender) => (Some(appender), None),
        Err(e) => (None, Some(e)),
    };
    if config.json_format {
        let json_file_layer = file_appender.map(|appender| {
            fmt::layer()
                .json().with_writer(appender).with_span_events(FmtSpan::CLOSE)
                .with_current_span(true).with_target(true)
                .with_filter(env_filter(level))
        });
        let json_stderr_layer = fmt::layer()
            .json().with_writer(std::io::stderr).with_span_events(FmtSpan::CLOSE)
            .with_current_span(true).with_target(true).with_filter(env_filter(level));
        tracing_subscriber::registry()
            .with(json_file_layer).with(json_stderr_layer).with(ErrorLayer::default()).try_init()?;
    } else {
        let file_layer = file_appender.map(|appender| {
            fmt::layer()
                .with_writer(appender).with_span_events(FmtSpan::CLOSE)
                .with_target(true).with_ansi(false)
                .with_filter(env_filter(level))
        });
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr).with_target(false)
            .with_ansi(true).with_filter(env_filter(level));
        tracing_subscriber::registry()
            .with(file_layer).with(stderr_layer).with(ErrorLayer::default()).try_init()?;
    }
    if let Some(e) = file_error {
        warn!("File logging disabled, {} is unusable: {e}", config.log_dir.display());
    }
    Ok(())
}
/// Parse rotation period from string.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
