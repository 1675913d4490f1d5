//! Scripted [`GitRunner`] for unit tests.

use super::{GitError, GitOutput, GitRunner};
use crate::identity::Identity;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

/// Answers `git config --get`, `git rev-parse --git-dir` and `git config <key> <value>`
/// from in-memory state, recording every call.
#[derive(Debug, Default)]
pub(crate) struct FakeGit {
    /// `None` makes the config read fail as if the keys were unset.
    pub identity: Option<Identity>,
    pub repository: bool,
    /// Key (`user.name` / `user.email`) whose write exits non-zero.
    pub failing_write: Option<&'static str>,
    /// When set every invocation fails to spawn.
    pub unavailable: bool,
    pub calls: Mutex<Vec<Call>>,
}

impl FakeGit {
    pub fn with_identity(name: &str, email: &str) -> Self {
        Self {
            identity: Some(Identity::new(name, email)),
            ..Self::default()
        }
    }

    pub fn repository(mut self) -> Self {
        self.repository = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Calls that would change git configuration.
    pub fn writes(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| {
                c.args.first().map(String::as_str) == Some("config")
                    && c.args.get(1).map(String::as_str) != Some("--get")
            })
            .collect()
    }
}

#[async_trait]
impl GitRunner for FakeGit {
    async fn run(&self, args: &[&str], cwd: Option<&Path>) -> Result<GitOutput, GitError> {
        self.calls.lock().unwrap().push(Call {
            args: args.iter().map(ToString::to_string).collect(),
            cwd: cwd.map(Path::to_path_buf),
        });
        if self.unavailable {
            return Err(GitError::Spawn {
                program: "git".to_string(),
                message: "not found".to_string(),
            });
        }

        let output = match args {
            ["rev-parse", "--git-dir"] if self.repository => GitOutput::ok(".git\n"),
            ["rev-parse", "--git-dir"] => GitOutput::failed("fatal: not a git repository"),
            ["config", "--get", "user.name"] => match &self.identity {
                Some(id) => GitOutput::ok(format!("{}\n", id.name)),
                None => GitOutput::failed(""),
            },
            ["config", "--get", "user.email"] => match &self.identity {
                Some(id) => GitOutput::ok(format!("{}\n", id.email)),
                None => GitOutput::failed(""),
            },
            ["config", .., key, _value] if self.failing_write == Some(*key) => {
                GitOutput::failed(format!("error: could not lock config file for {key}"))
            }
            ["config", ..] => GitOutput::ok(""),
            _ => GitOutput::failed("unsupported"),
        };
        Ok(output)
    }
}
