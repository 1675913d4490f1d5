//! Common test utilities

#![allow(dead_code)] // each test binary uses a different subset

use async_trait::async_trait;
use git_persona::{GitError, GitOutput, GitRunner, Identity, JsonProfileStore};
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// File-backed profile store inside `dir`
pub fn profile_store(dir: &TempDir) -> JsonProfileStore {
    JsonProfileStore::new(dir.path().join("profiles.json"))
}

/// Stand-in for git that answers from fixed state and records every call.
#[derive(Default)]
pub struct ScriptedGit {
    pub identity: Option<Identity>,
    pub repository: bool,
    pub calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedGit {
    pub fn reporting(name: &str, email: &str) -> Self {
        Self {
            identity: Some(Identity::new(name, email)),
            ..Self::default()
        }
    }

    /// Invocations that would write git configuration.
    pub fn config_writes(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|args| args.first().map(String::as_str) == Some("config"))
            .filter(|args| args.get(1).map(String::as_str) != Some("--get"))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl GitRunner for ScriptedGit {
    async fn run(&self, args: &[&str], _cwd: Option<&Path>) -> Result<GitOutput, GitError> {
        self.calls
            .lock()
            .unwrap()
            .push(args.iter().map(ToString::to_string).collect());
        let output = match (args, &self.identity) {
            (["rev-parse", "--git-dir"], _) if self.repository => GitOutput::ok(".git\n"),
            (["rev-parse", "--git-dir"], _) => GitOutput::failed("fatal: not a git repository"),
            (["config", "--get", "user.name"], Some(id)) => GitOutput::ok(format!("{}\n", id.name)),
            (["config", "--get", "user.email"], Some(id)) => GitOutput::ok(format!("{}\n", id.email)),
            (["config", "--get", _], None) => GitOutput::failed(""),
            (["config", ..], _) => GitOutput::ok(""),
            _ => GitOutput::failed("unsupported"),
        };
        Ok(output)
    }
}
