//! Flattened tree listings.

use gix::traverse::tree::Recorder;
use gix::ObjectId;

use crate::store::Repository;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TreeEntry {
    /// Path of the blob relative to the tree root, slash-separated.
    pub path: String,
}

/// Collect every blob reachable from the commit's root tree.
///
/// Directories are not emitted; nested blobs appear under their full
/// relative path. The walk completes before anything is returned, and any
/// failure fails the whole call.
pub(crate) fn files(repo: &Repository, commit_id: ObjectId) -> Result<Vec<TreeEntry>> {
    let commit = repo
        .inner
        .find_commit(commit_id)
        .map_err(|_| Error::NotFound(format!("commit {} in {}", commit_id, repo.name)))?;
    let tree = commit
        .tree()
        .map_err(|e| Error::Traversal(format!("tree of {}: {}", commit_id, e)))?;

    let mut recorder = Recorder::default();
    tree.traverse()
        .breadthfirst(&mut recorder)
        .map_err(|e| Error::Traversal(format!("tree of {}: {}", commit_id, e)))?;

    let mut entries: Vec<TreeEntry> = recorder
        .records
        .into_iter()
        .filter(|record| record.mode.is_blob())
        .map(|record| TreeEntry {
            path: record.filepath.to_string(),
        })
        .collect();
    entries.sort();
    Ok(entries)
}
