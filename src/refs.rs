//! Reference listing.
//!
//! Refs are named pointers to commits. Listing deliberately covers every
//! namespace, not just branches; the caller decides what to show.

use crate::store::Repository;
use crate::{Error, Result};

/// Prefix stripped to obtain a branch's short name.
const BRANCH_PREFIX: &str = "refs/heads/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Raw reference name, e.g. `refs/heads/main`.
    pub full_name: String,
    /// Name with the branch prefix stripped. References outside
    /// `refs/heads/` keep their full name.
    pub short_name: String,
}

pub(crate) fn references(repo: &Repository) -> Result<Vec<Reference>> {
    let platform = repo
        .inner
        .references()
        .map_err(|e| Error::Corrupt(format!("references of {}: {}", repo.name, e)))?;
    let iter = platform
        .all()
        .map_err(|e| Error::Corrupt(format!("references of {}: {}", repo.name, e)))?;

    let mut refs = Vec::new();
    for result in iter {
        let r = result.map_err(|e| Error::Corrupt(format!("reference in {}: {}", repo.name, e)))?;
        let full_name = r.name().as_bstr().to_string();
        refs.push(Reference {
            short_name: short_name(&full_name).to_string(),
            full_name,
        });
    }
    refs.sort_by(|a, b| a.full_name.cmp(&b.full_name));
    Ok(refs)
}

/// Strip the branch prefix when it matches; anything else keeps its full
/// name rather than being sliced at a fixed offset.
fn short_name(full_name: &str) -> &str {
    full_name.strip_prefix(BRANCH_PREFIX).unwrap_or(full_name)
}
