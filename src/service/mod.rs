//! The surface callers use: resolve, list, apply.

use crate::applier::{apply_identity, IdentityError};
use crate::git::GitRunner;
use crate::identity::{Identity, Scope};
use crate::resolver::{resolve_current_identity, Resolution};
use crate::store::ProfileStore;
use crate::workspace::Workspace;

/// Profile store, git runner and workspace wired together.
pub struct IdentityService<S, G> {
    store: S,
    git: G,
    workspace: Workspace,
}

impl<S: ProfileStore, G: GitRunner> IdentityService<S, G> {
    #[must_use]
    pub fn new(store: S, git: G, workspace: Workspace) -> Self {
        Self {
            store,
            git,
            workspace,
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn git(&self) -> &G {
        &self.git
    }

    #[must_use]
    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// Detect the identity in effect, registering it if it is new.
    pub async fn resolve_current_identity(&self) -> Resolution {
        resolve_current_identity(&self.store, &self.git, &self.workspace).await
    }

    /// Every registered identity, oldest first.
    pub async fn list_known_identities(&self) -> Vec<Identity> {
        self.store.load().await
    }

    /// Apply `identity` at `scope`; see [`apply_identity`].
    pub async fn apply_identity(
        &self,
        identity: &Identity,
        scope: Scope,
    ) -> Result<Identity, IdentityError> {
        apply_identity(&self.store, &self.git, &self.workspace, identity, scope).await
    }

    /// The registered identity at 1-based `position`, as shown by listings.
    pub async fn known_identity_at(&self, position: usize) -> Option<Identity> {
        let known = self.list_known_identities().await;
        position
            .checked_sub(1)
            .and_then(|index| known.get(index))
            .cloned()
    }
}
