//! Profile store: the persistent registry of known identities.
//!
//! The registry is an append-only, insertion-ordered list with no two equal
//! entries. Callers never cache it; every decision starts from a fresh
//! [`ProfileStore::load`] and every append writes the whole list back.

mod file;
mod memory;

pub use file::{profiles_path, JsonProfileStore, ProfilesFile, PROFILES_FILE};
pub use memory::MemoryProfileStore;

use crate::identity::Identity;
use async_trait::async_trait;
use std::sync::OnceLock;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to determine home directory")]
    HomeDirNotFound,
}

/// Serializes load-check-save cycles within this process.
static STORE_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn store_lock() -> &'static Mutex<()> {
    STORE_LOCK.get_or_init(|| Mutex::new(()))
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Known identities in insertion order. Empty when nothing is stored yet.
    async fn load(&self) -> Vec<Identity>;

    /// Like [`ProfileStore::load`], but fails instead of falling back to an
    /// empty list when stored data exists and cannot be read. Used before
    /// writing so unreadable data is never overwritten.
    async fn read_for_update(&self) -> Result<Vec<Identity>, PersistenceError> {
        Ok(self.load().await)
    }

    /// Replace the stored list wholesale.
    async fn save(&self, identities: &[Identity]) -> Result<(), PersistenceError>;

    /// Append `identity` unless an equal entry is already stored.
    ///
    /// Returns the resulting list, unchanged when the identity was known.
    /// This is the only path that grows the registry.
    async fn add_if_absent(&self, identity: &Identity) -> Result<Vec<Identity>, PersistenceError> {
        let _guard = store_lock().lock().await;
        let mut identities = self.read_for_update().await?;
        if contains_identity(&identities, identity) {
            return Ok(identities);
        }
        identities.push(identity.clone());
        self.save(&identities).await?;
        info!("Registered identity: {}", identity);
        Ok(identities)
    }
}

/// Whether `identities` holds an entry equal to `identity`.
#[must_use]
pub fn contains_identity(identities: &[Identity], identity: &Identity) -> bool {
    identities.iter().any(|known| known == identity)
}

#[cfg(test)]
#[path = "../store_tests.rs"]
mod store_tests;
