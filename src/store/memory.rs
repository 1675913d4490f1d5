use super::{PersistenceError, ProfileStore};
use crate::identity::Identity;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Process-local [`ProfileStore`], for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    identities: RwLock<Vec<Identity>>,
}

impl MemoryProfileStore {
    #[must_use]
    pub fn new(identities: Vec<Identity>) -> Self {
        Self {
            identities: RwLock::new(identities),
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn load(&self) -> Vec<Identity> {
        self.identities.read().await.clone()
    }

    async fn save(&self, identities: &[Identity]) -> Result<(), PersistenceError> {
        *self.identities.write().await = identities.to_vec();
        Ok(())
    }
}
