//! Identity applier: writes an identity into git at a given scope.

mod error;

pub use error::IdentityError;

use crate::git::GitRunner;
use crate::identity::{Identity, Scope};
use crate::probe::{is_repository, EMAIL_KEY, NAME_KEY};
use crate::store::ProfileStore;
use crate::workspace::Workspace;
use std::path::Path;
use tracing::{debug, info, warn};

/// Apply `identity` at `scope` and record it in the profile store.
///
/// Runs from the first workspace root even for [`Scope::Global`]; the scope
/// only picks which git config file is written. Local scope without an
/// initialized repository is rejected before git or the store are touched.
///
/// If `user.name` is written and `user.email` then fails, git is left
/// half-applied and the whole call fails with [`IdentityError::Apply`]. No
/// rollback is attempted.
pub async fn apply_identity(
    store: &dyn ProfileStore,
    git: &dyn GitRunner,
    workspace: &Workspace,
    identity: &Identity,
    scope: Scope,
) -> Result<Identity, IdentityError> {
    let working_dir = workspace.first_root().ok_or(IdentityError::NoWorkspace)?;

    let repository = is_repository(git, working_dir).await;
    debug!(
        "Applying {} identity in {} (repository: {})",
        scope,
        working_dir.display(),
        repository
    );
    if scope.requires_repository() && !repository {
        return Err(IdentityError::UninitializedRepo(working_dir.to_path_buf()));
    }

    write_field(git, working_dir, scope, NAME_KEY, &identity.name).await?;
    if let Err(e) = write_field(git, working_dir, scope, EMAIL_KEY, &identity.email).await {
        warn!(
            "{} was set to {:?} but {} failed; {} identity is half-applied",
            NAME_KEY, identity.name, EMAIL_KEY, scope
        );
        return Err(e);
    }
    info!("Applied {} identity: {}", scope, identity);

    store.add_if_absent(identity).await?;
    Ok(identity.clone())
}

async fn write_field(
    git: &dyn GitRunner,
    working_dir: &Path,
    scope: Scope,
    key: &'static str,
    value: &str,
) -> Result<(), IdentityError> {
    let mut args = vec!["config"];
    args.extend(scope.config_flag());
    args.extend([key, value]);

    let output = git
        .run(&args, Some(working_dir))
        .await
        .map_err(|e| IdentityError::Apply {
            field: key,
            message: e.to_string(),
        })?;
    if !output.success {
        let stderr = output.stderr.trim();
        return Err(IdentityError::Apply {
            field: key,
            message: if stderr.is_empty() {
                "git config exited with an error".to_string()
            } else {
                stderr.to_string()
            },
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../applier_tests.rs"]
mod applier_tests;
