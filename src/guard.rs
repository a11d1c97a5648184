//! Containment validation for user-supplied repository names.
//!
//! Joining untrusted names onto the repositories root is the only place user
//! input reaches the filesystem, so every open and create goes through here.

use std::path::{Component, Path, PathBuf};

use crate::{Error, Result};

/// Validate `name` against `root` and return the path it resolves to.
///
/// The result is guaranteed to sit strictly inside `root`. Absolute names,
/// `..` escapes and, for paths that already exist, symlinks pointing outside
/// the root are rejected with [`Error::InvalidPath`].
pub fn validated_path(root: &Path, name: &str) -> Result<PathBuf> {
    if name.is_empty() {
        return Err(Error::InvalidPath("empty name".into()));
    }
    if name.contains('\0') {
        return Err(Error::InvalidPath("name contains NUL".into()));
    }

    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return Err(Error::InvalidPath(format!("absolute path: {}", name)));
    }

    // Lexical normalization: resolve `.` and `..` without touching the
    // filesystem, refusing any `..` that would climb above the root.
    let mut resolved = root.to_path_buf();
    let mut depth = 0usize;
    for component in candidate.components() {
        match component {
            Component::Normal(part) => {
                resolved.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(Error::InvalidPath(format!(
                        "escapes the repository root: {}",
                        name
                    )));
                }
                resolved.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(Error::InvalidPath(format!("absolute path: {}", name)));
            }
        }
    }
    if depth == 0 {
        return Err(Error::InvalidPath(format!(
            "resolves to the root itself: {}",
            name
        )));
    }

    // The normalized result, with the root as a whole-component prefix, must
    // still be inside the root.
    if !resolved.starts_with(root) {
        return Err(Error::InvalidPath(format!(
            "escapes the repository root: {}",
            name
        )));
    }

    // Symlinks can only be checked once the path exists on disk.
    if resolved.exists() {
        let canonical = resolved.canonicalize()?;
        let canonical_root = root.canonicalize()?;
        if !canonical.starts_with(&canonical_root) {
            return Err(Error::InvalidPath(format!(
                "symlink escapes the repository root: {}",
                name
            )));
        }
    }

    Ok(resolved)
}
