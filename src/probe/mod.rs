//! Environment probe: read-only questions asked of git.
//!
//! - which identity is currently configured (`user.name` / `user.email`)
//! - whether a directory is inside an initialized repository

use crate::git::{GitError, GitRunner};
use crate::identity::Identity;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

pub const NAME_KEY: &str = "user.name";
pub const EMAIL_KEY: &str = "user.email";

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error("git config {key} failed{}", format_stderr(.stderr))]
    ReadFailed { key: &'static str, stderr: String },

    #[error("git output is missing the {0} line")]
    MissingLine(&'static str),
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        " (key not set)".to_string()
    } else {
        format!(": {stderr}")
    }
}

/// Read the configured identity as seen from `working_dir`.
///
/// With no working directory git resolves the ambient configuration. Both keys
/// must be set; a missing key fails the whole read.
pub async fn current_identity(
    git: &dyn GitRunner,
    working_dir: Option<&Path>,
) -> Result<Identity, ProbeError> {
    let mut combined = String::new();
    for key in [NAME_KEY, EMAIL_KEY] {
        let output = git.run(&["config", "--get", key], working_dir).await?;
        if !output.success {
            return Err(ProbeError::ReadFailed {
                key,
                stderr: output.stderr.trim().to_string(),
            });
        }
        combined.push_str(&output.stdout);
        if !combined.ends_with('\n') {
            combined.push('\n');
        }
    }
    parse_identity_output(&combined)
}

/// Split git's output into name (first line) and email (second line).
pub fn parse_identity_output(output: &str) -> Result<Identity, ProbeError> {
    let mut lines = output.lines();
    let name = lines.next().ok_or(ProbeError::MissingLine(NAME_KEY))?;
    let email = lines.next().ok_or(ProbeError::MissingLine(EMAIL_KEY))?;
    Ok(Identity::new(name, email))
}

/// Whether `working_dir` is inside an initialized git repository.
///
/// Never fails: if git cannot answer, the directory is treated as not being a
/// repository.
pub async fn is_repository(git: &dyn GitRunner, working_dir: &Path) -> bool {
    match git.run(&["rev-parse", "--git-dir"], Some(working_dir)).await {
        Ok(output) => output.success,
        Err(e) => {
            debug!("Repository check failed for {}: {}", working_dir.display(), e);
            false
        }
    }
}

#[cfg(test)]
#[path = "../probe_tests.rs"]
mod probe_tests;
