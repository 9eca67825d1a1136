use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use lf_config::PROJECT_DIR;

const LOCK_FILE: &str = "write.lock";
const LOCK_RETRY_DELAY: Duration = Duration::from_millis(250);

/// Held while a command writes to the record table. Removes the lock file on drop.
#[derive(Debug)]
pub struct WriteLockGuard {
    path: PathBuf,
}

impl Drop for WriteLockGuard {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

/// Block until this process owns the project's write lock or `timeout` passes.
pub fn acquire_for_project(
    project_root: &Path,
    timeout: Duration,
) -> anyhow::Result<WriteLockGuard> {
    let lock_path = project_root.join(PROJECT_DIR).join(LOCK_FILE);
    let started = Instant::now();

    loop {
        match try_acquire(&lock_path) {
            Ok(guard) => {
                tracing::debug!(path = %lock_path.display(), "acquired write lock");
                return Ok(guard);
            }
            Err(LockState::Stale) => {
                tracing::debug!(path = %lock_path.display(), "removing stale write lock");
                let _ = std::fs::remove_file(&lock_path);
            }
            Err(state) if started.elapsed() >= timeout => {
                anyhow::bail!(state.timeout_message(&lock_path));
            }
            Err(_) => std::thread::sleep(LOCK_RETRY_DELAY),
        }
    }
}

#[derive(Debug)]
enum LockState {
    HeldBy(u32),
    Stale,
    Unknown,
}

impl LockState {
    fn timeout_message(&self, lock_path: &Path) -> String {
        match self {
            Self::HeldBy(pid) => format!(
                "another report is being written (pid {pid}); try again after it finishes"
            ),
            Self::Stale | Self::Unknown => format!(
                "could not acquire write lock at {}; remove it if no lostfound process is running",
                lock_path.display()
            ),
        }
    }
}

fn try_acquire(lock_path: &Path) -> Result<WriteLockGuard, LockState> {
    if let Some(parent) = lock_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    match OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(lock_path)
    {
        Ok(mut file) => {
            let _ = writeln!(file, "{}", std::process::id());
            Ok(WriteLockGuard {
                path: lock_path.to_path_buf(),
            })
        }
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            let mut pid_buf = String::new();
            if OpenOptions::new()
                .read(true)
                .open(lock_path)
                .and_then(|mut file| file.read_to_string(&mut pid_buf))
                .is_err()
            {
                return Err(LockState::Unknown);
            }

            match pid_buf.trim().parse::<u32>().ok() {
                Some(pid) if is_process_running(pid) => Err(LockState::HeldBy(pid)),
                Some(_) => Err(LockState::Stale),
                // Still being written by its owner.
                None => Err(LockState::Unknown),
            }
        }
        Err(_) => Err(LockState::Unknown),
    }
}

fn is_process_running(pid: u32) -> bool {
    if pid == std::process::id() {
        return true;
    }
    std::process::Command::new("kill")
        .arg("-0")
        .arg(pid.to_string())
        .status()
        .is_ok_and(|status| status.success())
}
