//! Bounded commit history traversal.

use gix::ObjectId;
use tracing::debug;

use crate::store::Repository;
use crate::{Error, Result};

/// Number of commits returned per history walk.
pub const HISTORY_LIMIT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    /// Full hex commit id.
    pub id: String,
    pub author_name: String,
    pub author_email: String,
    /// Commit time, seconds since the unix epoch.
    pub seconds: i64,
    pub message: String,
}

/// Resolve a branch short name to its tip commit.
pub(crate) fn branch_tip(repo: &Repository, branch: &str) -> Result<ObjectId> {
    let full_name = format!("refs/heads/{}", branch);
    let reference = repo
        .inner
        .find_reference(full_name.as_str())
        .map_err(|_| Error::NotFound(format!("branch {} in {}", branch, repo.name)))?;
    reference
        .into_fully_peeled_id()
        .map(|id| id.detach())
        .map_err(|e| Error::Corrupt(format!("branch {} in {}: {}", branch, repo.name, e)))
}

/// Walk first-parent ancestry from `start`, newest first.
///
/// The walk stops once [`HISTORY_LIMIT`] commits have been collected; a
/// shorter history returns everything it has. Any error while walking or
/// decoding fails the whole call instead of truncating the result.
pub(crate) fn history(repo: &Repository, start: ObjectId) -> Result<Vec<CommitSummary>> {
    let walk = repo
        .inner
        .rev_walk(Some(start))
        .first_parent_only()
        .all()
        .map_err(|e| Error::Traversal(format!("history from {}: {}", start, e)))?;

    let mut commits = Vec::with_capacity(HISTORY_LIMIT);
    for info in walk {
        let info = info.map_err(|e| Error::Traversal(format!("history from {}: {}", start, e)))?;
        let commit = info
            .object()
            .map_err(|e| Error::Traversal(format!("commit {}: {}", info.id, e)))?;
        let author = commit
            .author()
            .map_err(|e| Error::Traversal(format!("commit {}: {}", info.id, e)))?;
        let seconds = commit
            .time()
            .map_err(|e| Error::Traversal(format!("commit {}: {}", info.id, e)))?
            .seconds;

        commits.push(CommitSummary {
            id: commit.id().to_string(),
            author_name: author.name.to_string(),
            author_email: author.email.to_string(),
            seconds,
            message: commit.message_raw_sloppy().to_string(),
        });
        if commits.len() == HISTORY_LIMIT {
            break;
        }
    }

    debug!(start = %start, count = commits.len(), "walked history");
    Ok(commits)
}
