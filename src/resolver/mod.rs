//! Identity resolver: works out which identity is in effect right now.

use crate::git::GitRunner;
use crate::identity::Identity;
use crate::notice::Notice;
use crate::probe::current_identity;
use crate::store::{contains_identity, ProfileStore};
use crate::workspace::Workspace;
use serde::Serialize;
use tracing::debug;

/// The identity in effect plus anything worth telling the user about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Empty when git has no identity configured.
    pub identity: Identity,
    pub notices: Vec<Notice>,
}

/// Probe git for the current identity and make sure the profile store knows it.
///
/// Never fails. Without a workspace the ambient configuration is probed; if
/// the probe fails the empty identity is returned. Each of these, and a
/// failure to record the identity, is reported as a notice.
pub async fn resolve_current_identity(
    store: &dyn ProfileStore,
    git: &dyn GitRunner,
    workspace: &Workspace,
) -> Resolution {
    let mut notices = Vec::new();

    let working_dir = workspace.first_root();
    if working_dir.is_none() {
        notices.push(Notice::warning(
            "No workspace folder is open; showing the global git identity",
        ));
    }

    let identity = match current_identity(git, working_dir).await {
        Ok(identity) => identity,
        Err(e) => {
            debug!("Could not read git identity: {}", e);
            notices.push(Notice::error(format!("Could not read git identity: {e}")));
            Identity::empty()
        }
    };

    let known = store.load().await;
    if !contains_identity(&known, &identity) {
        if let Err(e) = store.add_if_absent(&identity).await {
            debug!("Could not record identity {}: {}", identity, e);
            notices.push(Notice::error(format!(
                "Could not save {} to the profile list: {e}",
                identity.display_label()
            )));
        }
    }

    Resolution { identity, notices }
}

#[cfg(test)]
#[path = "../resolver_tests.rs"]
mod resolver_tests;
