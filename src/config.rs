//! Immutable engine configuration.
//!
//! Constructed once at startup and passed by reference into every operation;
//! there is no ambient global state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one bare repository per subdirectory.
    pub repos_dir: PathBuf,
    /// Location of the authorized_keys file managed by the key-management
    /// frontend. Unused by this crate beyond being carried in the config.
    #[serde(default)]
    pub keys_dir: Option<PathBuf>,
    /// Upper bound for post-update hook execution, in seconds.
    #[serde(default = "default_hook_timeout_secs")]
    pub hook_timeout_secs: u64,
}

fn default_hook_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Build a configuration for the given repositories root.
    pub fn new(repos_dir: impl Into<PathBuf>) -> Self {
        Self {
            repos_dir: repos_dir.into(),
            keys_dir: None,
            hook_timeout_secs: default_hook_timeout_secs(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            Error::Io(std::io::Error::other(format!(
                "parse {}: {}",
                path.display(),
                e
            )))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let config = Config::new("/srv/repos");
        assert_eq!(config.repos_dir, PathBuf::from("/srv/repos"));
        assert_eq!(config.keys_dir, None);
        assert_eq!(config.hook_timeout_secs, 10);
    }

    #[test]
    fn test_parse_with_defaults() {
        let config: Config = toml::from_str(r#"repos_dir = "/srv/repos""#).unwrap();
        assert_eq!(config.repos_dir, PathBuf::from("/srv/repos"));
        assert_eq!(config.hook_timeout_secs, 10);
    }

    #[test]
    fn test_parse_full() {
        let config: Config = toml::from_str(
            r#"
repos_dir = "/srv/repos"
keys_dir = "/srv/keys"
hook_timeout_secs = 3
"#,
        )
        .unwrap();
        assert_eq!(config.keys_dir, Some(PathBuf::from("/srv/keys")));
        assert_eq!(config.hook_timeout_secs, 3);
    }
}
