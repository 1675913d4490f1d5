mod init;
pub use init::{init_logging, open_file_appender, parse_rotation};
use crate::utils::persona_home;
use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;
/// Log filename used by the CLI.
pub const LOG_FILENAME: &str = "git-persona.log";
/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}
/// `~/.git-persona/logs`, or `./logs` when no home directory is known.
#[must_use]
pub fn default_log_dir() -> PathBuf {
    persona_home()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("logs")
}
impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}
#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
