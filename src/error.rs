//! Error types for repository browsing and provisioning

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A user-supplied name resolves outside the repositories root.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Repository, branch, commit or file does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository already exists: {0}")]
    AlreadyExists(String),

    /// The object database exists but cannot be read.
    #[error("Corrupt repository: {0}")]
    Corrupt(String),

    /// A history or tree walk failed partway through.
    #[error("Traversal failed: {0}")]
    Traversal(String),

    /// The post-update hook could not be written, marked executable or run.
    #[error("Hook failure: {0}")]
    Hook(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
