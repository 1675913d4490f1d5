//! The git subprocess boundary.
//!
//! Everything this crate learns about or changes in git goes through
//! [`GitRunner::run`], so probes and writes can be observed and scripted in
//! tests without a real `git` on `PATH`.

mod cli;
#[cfg(test)]
pub(crate) mod fake;

pub use cli::{GitCli, DEFAULT_GIT_PROGRAM};

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to execute {program}: {message}")]
    Spawn { program: String, message: String },

    #[error("git {command} did not finish within {}s", .timeout.as_secs())]
    Timeout { command: String, timeout: Duration },

    #[error("Git command output was not valid UTF-8")]
    InvalidUtf8,
}

/// Captured result of one git invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitOutput {
    /// Whether git exited with status 0.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl GitOutput {
    #[must_use]
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            success: true,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    #[must_use]
    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Runs git as an opaque subprocess.
#[async_trait]
pub trait GitRunner: Send + Sync {
    /// Run git with `args`. With `cwd` unset the process's own working
    /// directory is used, which gives the ambient configuration.
    ///
    /// A non-zero exit is not an error here; it is reported through
    /// [`GitOutput::success`]. Errors mean git could not be run at all.
    async fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<GitOutput, GitError>;
}
