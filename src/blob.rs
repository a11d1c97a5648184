//! Blob resolution and content-type inference.

use gix::ObjectId;

use crate::store::Repository;
use crate::{Error, Result};

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub bytes: Vec<u8>,
    /// Best-effort content type inferred from the file extension.
    pub content_type: String,
}

/// Resolve `path` within the commit's tree and return its raw bytes.
///
/// A path that is absent from the tree, or that names a directory or
/// submodule rather than a file, fails with [`Error::NotFound`].
pub(crate) fn read(repo: &Repository, commit_id: ObjectId, path: &str) -> Result<FileContent> {
    let commit = repo
        .inner
        .find_commit(commit_id)
        .map_err(|_| Error::NotFound(format!("commit {} in {}", commit_id, repo.name)))?;
    let tree = commit
        .tree()
        .map_err(|e| Error::Traversal(format!("tree of {}: {}", commit_id, e)))?;

    let entry = tree
        .lookup_entry_by_path(path)
        .map_err(|e| Error::Traversal(format!("{} at {}: {}", path, commit_id, e)))?
        .ok_or_else(|| Error::NotFound(format!("{} at {}", path, commit_id)))?;

    if !entry.mode().is_blob() {
        return Err(Error::NotFound(format!(
            "{} at {} is not a file",
            path, commit_id
        )));
    }

    let blob = repo
        .inner
        .find_blob(entry.object_id())
        .map_err(|e| Error::Corrupt(format!("blob {}: {}", entry.object_id(), e)))?;

    Ok(FileContent {
        bytes: blob.data.clone(),
        content_type: content_type(path).to_string(),
    })
}

/// Content type from the file extension; unknown extensions fall back to a
/// generic binary type rather than failing.
fn content_type(path: &str) -> &'static str {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}
