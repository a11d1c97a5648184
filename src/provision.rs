//! Bare repository creation wired for dumb-HTTP serving.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::config::Config;
use crate::guard;
use crate::{Error, Result};

/// Script installed as `hooks/post-update`; regenerates the index files the
/// dumb HTTP transport serves.
const POST_UPDATE_HOOK: &str = "#!/bin/sh\n\nexec git update-server-info\n";

const HOOK_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Create a bare repository named `name` under the configured root.
///
/// The repository is left ready for dumb-HTTP serving: the post-update hook
/// is installed, marked executable and run once so `info/refs` exists before
/// the first push. A hook failure leaves the already-initialized repository
/// in place (no rollback) and reports [`Error::Hook`].
pub fn create(config: &Config, name: &str) -> Result<PathBuf> {
    let path = guard::validated_path(&config.repos_dir, name)?;
    if path.exists() {
        return Err(Error::AlreadyExists(name.to_string()));
    }

    debug!(name, path = %path.display(), "initializing bare repository");
    gix::init_bare(&path)
        .map_err(|e| Error::Io(std::io::Error::other(format!("init {}: {}", name, e))))?;

    install_hook(&path)?;
    run_hook(&path, Duration::from_secs(config.hook_timeout_secs))?;

    info!(name, path = %path.display(), "created repository");
    Ok(path)
}

fn install_hook(repo_path: &Path) -> Result<()> {
    let hook_path = repo_path.join("hooks").join("post-update");
    if let Some(parent) = hook_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&hook_path, POST_UPDATE_HOOK)
        .map_err(|e| Error::Hook(format!("write {}: {}", hook_path.display(), e)))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&hook_path, fs::Permissions::from_mode(0o755))
            .map_err(|e| Error::Hook(format!("chmod {}: {}", hook_path.display(), e)))?;
    }

    Ok(())
}

/// Run the freshly installed hook once, bounded by `timeout`.
fn run_hook(repo_path: &Path, timeout: Duration) -> Result<()> {
    let mut child = Command::new("/bin/sh")
        .arg("hooks/post-update")
        .current_dir(repo_path)
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| Error::Hook(format!("spawn post-update: {}", e)))?;

    let deadline = Instant::now() + timeout;
    loop {
        match child.try_wait() {
            Ok(Some(status)) => {
                if status.success() {
                    return Ok(());
                }
                let mut stderr = String::new();
                if let Some(mut pipe) = child.stderr.take() {
                    let _ = pipe.read_to_string(&mut stderr);
                }
                return Err(Error::Hook(format!(
                    "post-update exited with {}: {}",
                    status,
                    stderr.trim()
                )));
            }
            Ok(None) => {
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(Error::Hook(format!(
                        "post-update timed out after {}s",
                        timeout.as_secs()
                    )));
                }
                std::thread::sleep(HOOK_POLL_INTERVAL);
            }
            Err(e) => return Err(Error::Hook(format!("wait for post-update: {}", e))),
        }
    }
}
