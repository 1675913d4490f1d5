//! Switch between named git identities.
//!
//! Known identities (`user.name` + `user.email` pairs) live in a small
//! per-user registry. The identity git currently reports is detected and
//! registered automatically, and any registered or new identity can be
//! applied to the current repository or globally.

// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic_in_result_fn,
        clippy::unwrap_in_result,
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing
    )
)]

pub mod applier;
pub mod config;
pub mod git;
pub mod identity;
pub mod logging;
pub mod notice;
pub mod probe;
pub mod resolver;
pub mod service;
pub mod store;
pub mod utils;
pub mod workspace;

// Re-export commonly used types
pub use applier::{apply_identity, IdentityError};
pub use config::{load_config, ConfigError, PersonaConfig};
pub use git::{GitCli, GitError, GitOutput, GitRunner};
pub use identity::{Identity, Scope, UNSET_LABEL};
pub use notice::{Notice, NoticeLevel};
pub use probe::{current_identity, is_repository, ProbeError};
pub use resolver::{resolve_current_identity, Resolution};
pub use service::IdentityService;
pub use store::{
    JsonProfileStore, MemoryProfileStore, PersistenceError, ProfileStore, ProfilesFile,
};
pub use workspace::Workspace;
