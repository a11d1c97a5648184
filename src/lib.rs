//! Browse and provision bare git repositories for an authenticated web frontend.
//!
//! This crate is the storage-facing half of a small git hosting UI: route
//! handlers hand it a repository name (and optionally a branch, commit id and
//! file path) already extracted from the request, and get plain data
//! structures back. It renders nothing and performs no authentication; both
//! belong to the calling layer.
//!
//! Every operation validates the user-supplied name against the configured
//! repositories root, opens its own repository handle and drops it when done.
//! Nothing is cached across calls; the only persistent side effect is
//! repository creation, which installs and runs the `post-update` hook so a
//! fresh repository is immediately servable over the dumb HTTP transport.

pub mod blob;
pub mod config;
pub mod error;
pub mod guard;
pub mod history;
pub mod provision;
pub mod refs;
pub mod store;
pub mod tree;

pub use blob::FileContent;
pub use config::Config;
pub use error::{Error, Result};
pub use history::{CommitSummary, HISTORY_LIMIT};
pub use provision::create;
pub use refs::Reference;
pub use store::{list_repositories, open, RepoRef, Repository};
pub use tree::TreeEntry;
