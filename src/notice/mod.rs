//! User-facing notices.
//!
//! Core operations return values and typed errors; this module is the thin
//! layer that turns them into messages for whatever renders them.

use crate::applier::IdentityError;
use crate::identity::{Identity, Scope};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => f.write_str("info"),
            Self::Warning => f.write_str("warning"),
            Self::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Confirmation shown after a successful switch.
    #[must_use]
    pub fn applied(identity: &Identity, scope: Scope) -> Self {
        Self::info(format!(
            "Switched {scope} git identity to {}",
            identity.display_label()
        ))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

impl From<&IdentityError> for Notice {
    fn from(err: &IdentityError) -> Self {
        match err {
            IdentityError::Persistence(_) => Self::error(format!(
                "{err}. Git already uses the new identity; it is just missing from the profile list."
            )),
            IdentityError::NoWorkspace
            | IdentityError::UninitializedRepo(_)
            | IdentityError::Apply { .. } => Self::error(err.to_string()),
        }
    }
}
