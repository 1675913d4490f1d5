use crate::store::PersistenceError;
use std::path::PathBuf;
use thiserror::Error;

/// Why applying an identity failed.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("No workspace folder is open; open a repository before switching identity")]
    NoWorkspace,

    #[error("{} is not a git repository; run `git init` there or choose global scope", .0.display())]
    UninitializedRepo(PathBuf),

    #[error("Failed to set {field}: {message}")]
    Apply { field: &'static str, message: String },

    #[error("Identity was applied but could not be saved to the profile list: {0}")]
    Persistence(#[from] PersistenceError),
}
