//! Repository enumeration and per-request handles.

use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::blob::FileContent;
use crate::config::Config;
use crate::guard;
use crate::history::CommitSummary;
use crate::refs::Reference;
use crate::tree::TreeEntry;
use crate::{Error, Result};

/// A directory under the repositories root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub name: String,
    pub path: PathBuf,
}

/// Handle to one repository, held for the duration of a single logical
/// operation and dropped when it completes. Nothing is shared or cached
/// across requests.
pub struct Repository {
    pub(crate) inner: gix::Repository,
    pub name: String,
}

/// List the immediate children of the repositories root that are directories.
///
/// Stray files are silently skipped. The result is sorted by name so
/// consecutive listings are stable.
pub fn list_repositories(config: &Config) -> Result<Vec<RepoRef>> {
    let mut repos = Vec::new();
    for entry in fs::read_dir(&config.repos_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        repos.push(RepoRef {
            name,
            path: entry.path(),
        });
    }
    repos.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(repos)
}

/// Open the named repository under the configured root.
pub fn open(config: &Config, name: &str) -> Result<Repository> {
    let path = guard::validated_path(&config.repos_dir, name)?;
    if !path.exists() {
        return Err(Error::NotFound(format!("repository {}", name)));
    }

    debug!(name, path = %path.display(), "opening repository");
    let inner = match gix::open(&path) {
        Ok(repo) => repo,
        Err(gix::open::Error::NotARepository { .. }) => {
            return Err(Error::NotFound(format!("repository {}", name)));
        }
        Err(e) => return Err(Error::Corrupt(format!("{}: {}", name, e))),
    };

    Ok(Repository {
        inner,
        name: name.to_string(),
    })
}

impl Repository {
    /// Every reference in the repository, sorted by full name. An empty list
    /// means the repository has no branches yet, distinct from a lookup
    /// failure.
    pub fn references(&self) -> Result<Vec<Reference>> {
        crate::refs::references(self)
    }

    /// Resolve a branch short name to its tip commit.
    pub fn branch_tip(&self, branch: &str) -> Result<gix::ObjectId> {
        crate::history::branch_tip(self, branch)
    }

    /// First-parent history from `start`, newest first, at most
    /// [`crate::HISTORY_LIMIT`] entries.
    pub fn history(&self, start: gix::ObjectId) -> Result<Vec<CommitSummary>> {
        crate::history::history(self, start)
    }

    /// Every blob reachable from the commit's tree, as flattened paths.
    pub fn files(&self, commit_id: gix::ObjectId) -> Result<Vec<TreeEntry>> {
        crate::tree::files(self, commit_id)
    }

    /// Raw content of `path` at `commit_id`, with an inferred content type.
    pub fn read_blob(&self, commit_id: gix::ObjectId, path: &str) -> Result<FileContent> {
        crate::blob::read(self, commit_id, path)
    }

    /// Parse a hex commit id supplied by the route layer.
    pub fn commit_id(&self, hex: &str) -> Result<gix::ObjectId> {
        gix::ObjectId::from_hex(hex.as_bytes())
            .map_err(|_| Error::NotFound(format!("commit {}", hex)))
    }
}
