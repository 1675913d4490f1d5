//! JSON file backend (`~/.git-persona/profiles.json`).

use super::{PersistenceError, ProfileStore};
use crate::identity::Identity;
use crate::utils::{atomic_write, now_iso, persona_home};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

pub const PROFILES_FILE: &str = "profiles.json";

/// On-disk layout: a single array-valued `users` key plus a write stamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilesFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub users: Vec<Identity>,
}

/// Default location of the profiles file.
pub fn profiles_path() -> Result<PathBuf, PersistenceError> {
    persona_home()
        .map(|home| home.join(PROFILES_FILE))
        .ok_or(PersistenceError::HomeDirNotFound)
}

/// [`ProfileStore`] persisted as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location under the per-user data directory.
    pub fn open_default() -> Result<Self, PersistenceError> {
        profiles_path().map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_file(&self) -> Result<Option<ProfilesFile>, PersistenceError> {
        if !fs::try_exists(&self.path).await? {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).await?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&content)?))
    }
}

#[async_trait]
impl ProfileStore for JsonProfileStore {
    async fn load(&self) -> Vec<Identity> {
        match self.read_file().await {
            Ok(Some(file)) => file.users,
            Ok(None) => {
                debug!("No profiles at {}; starting empty", self.path.display());
                Vec::new()
            }
            Err(e) => {
                warn!(
                    "Unreadable profiles file {} (left untouched): {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn read_for_update(&self) -> Result<Vec<Identity>, PersistenceError> {
        Ok(self.read_file().await?.map(|file| file.users).unwrap_or_default())
    }

    async fn save(&self, identities: &[Identity]) -> Result<(), PersistenceError> {
        let file = ProfilesFile {
            updated_at: Some(now_iso()),
            users: identities.to_vec(),
        };
        let content = serde_json::to_string_pretty(&file)?;
        atomic_write(&self.path, &content).await?;
        debug!(
            "Saved {} profiles to {}",
            identities.len(),
            self.path.display()
        );
        Ok(())
    }
}
