mod atomic;

pub use atomic::atomic_write;

use std::ffi::OsString;
use std::path::PathBuf;

/// Name of the per-user data directory under `$HOME`.
pub const PERSONA_FOLDER: &str = ".git-persona";

/// Environment variable overriding the per-user data directory.
///
/// Tests and CI point this at a temp dir so they never touch the real
/// `~/.git-persona`.
pub const PERSONA_HOME_ENV: &str = "GIT_PERSONA_HOME";

/// Resolve the per-user data directory (`~/.git-persona`).
///
/// `GIT_PERSONA_HOME` wins when set; otherwise the platform home directory is
/// used. Returns `None` when neither is available.
#[must_use]
pub fn persona_home() -> Option<PathBuf> {
    resolve_persona_home(std::env::var_os(PERSONA_HOME_ENV), dirs::home_dir())
}

fn resolve_persona_home(override_dir: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match override_dir {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => home.map(|h| h.join(PERSONA_FOLDER)),
    }
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
#[path = "utils_tests_1.rs"]
mod utils_tests_1;
