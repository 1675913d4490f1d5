use super::{GitError, GitOutput, GitRunner};
use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

pub const DEFAULT_GIT_PROGRAM: &str = "git";

/// [`GitRunner`] backed by the real git executable.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    timeout: Option<Duration>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(DEFAULT_GIT_PROGRAM, None)
    }
}

impl GitCli {
    /// `timeout` bounds each invocation; `None` waits indefinitely.
    #[must_use]
    pub fn new(program: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether the configured program can be found on `PATH`.
    #[must_use]
    pub fn is_available(&self) -> bool {
        which::which(&self.program).is_ok()
    }
}

#[async_trait]
impl GitRunner for GitCli {
    async fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<GitOutput, GitError> {
        let mut command = Command::new(&self.program);
        command
            .args(args)
            // Clear GIT_DIR to avoid being affected by git hooks environment
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .kill_on_drop(true);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        debug!("Running {} {} (cwd: {:?})", self.program, args.join(" "), cwd);

        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, command.output())
                .await
                .map_err(|_| GitError::Timeout {
                    command: args.join(" "),
                    timeout: limit,
                })?,
            None => command.output().await,
        }
        .map_err(|e| GitError::Spawn {
            program: self.program.clone(),
            message: e.to_string(),
        })?;

        let stdout = String::from_utf8(output.stdout).map_err(|_| GitError::InvalidUtf8)?;
        Ok(GitOutput {
            success: output.status.success(),
            stdout,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
