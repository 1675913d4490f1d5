//! Identity and scope types.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Label rendered in place of the empty identity.
pub const UNSET_LABEL: &str = "(no identity configured)";

/// A git authorship identity (`user.name` + `user.email`).
///
/// Two identities are equal only when both fields match exactly; there is no
/// case folding or whitespace trimming. The empty identity stands for "nothing
/// configured" and is stored like any other value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// The identity reported when git has no `user.name`/`user.email`.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }

    /// `Name <email>`, or [`UNSET_LABEL`] for the empty identity.
    #[must_use]
    pub fn display_label(&self) -> String {
        if self.is_empty() {
            UNSET_LABEL.to_string()
        } else if self.email.is_empty() {
            self.name.clone()
        } else {
            format!("{} <{}>", self.name, self.email)
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}

/// Where an identity gets applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The repository at the working directory (`git config`).
    #[default]
    Local,
    /// The user's machine-wide configuration (`git config --global`).
    Global,
}

impl Scope {
    /// Local scope writes into `.git/config`, so it needs an initialized repository.
    #[must_use]
    pub fn requires_repository(self) -> bool {
        matches!(self, Self::Local)
    }

    /// Extra `git config` flag selecting this scope, if any.
    #[must_use]
    pub fn config_flag(self) -> Option<&'static str> {
        match self {
            Self::Local => None,
            Self::Global => Some("--global"),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Global => f.write_str("global"),
        }
    }
}

#[cfg(test)]
#[path = "../identity_tests.rs"]
mod identity_tests;
