use crate::error::StoreError;
use std::fs::{self, TryLockError};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Exclusive, atomic replacement of one file.
///
/// Data goes to `<target>.lock` (created with `create_new` and held under an
/// exclusive OS lock while open) and is renamed over `<target>` on commit. An
/// uncommitted lock file is removed on drop and the target keeps its old
/// contents. A lock file nobody holds, left by a writer that died before
/// committing, is reclaimed by the next writer.
pub struct Lockfile {
    target: PathBuf,
    lock_path: PathBuf,
    file: Option<fs::File>,
}

impl Lockfile {
    pub fn acquire(target: impl AsRef<Path>) -> Result<Self, StoreError> {
        let target = target.as_ref().to_path_buf();
        let lock_path = lock_path_for(&target);

        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = match create_locked(&lock_path) {
            Err(StoreError::LockConflict(_)) if is_abandoned(&lock_path) => {
                tracing::warn!(lock = %lock_path.display(), "reclaiming abandoned lock file");
                match fs::remove_file(&lock_path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::NotFound => {}
                    Err(e) => return Err(StoreError::Io(e)),
                }
                create_locked(&lock_path)?
            }
            other => other?,
        };

        Ok(Self {
            target,
            lock_path,
            file: Some(file),
        })
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), StoreError> {
        let file = self.file.as_mut().ok_or_else(|| {
            StoreError::LockConflict(format!("{} already released", self.lock_path.display()))
        })?;
        file.write_all(data)?;
        file.sync_all()?;
        Ok(())
    }

    /// Rename the lock file over the target.
    pub fn commit(mut self) -> Result<(), StoreError> {
        self.file.take();
        fs::rename(&self.lock_path, &self.target)?;
        Ok(())
    }

    /// Acquire, write `data` and commit in one step.
    pub fn replace(target: impl AsRef<Path>, data: &[u8]) -> Result<(), StoreError> {
        let mut lock = Self::acquire(target)?;
        lock.write_all(data)?;
        lock.commit()
    }
}

impl Drop for Lockfile {
    fn drop(&mut self) {
        if self.file.take().is_some() {
            let _ = fs::remove_file(&self.lock_path);
        }
    }
}

/// Create the lock file and take the OS lock on it.
///
/// Losing the OS lock to a writer that reclaimed the file in between counts
/// as a conflict; the file then belongs to that writer and is left alone.
fn create_locked(lock_path: &Path) -> Result<fs::File, StoreError> {
    let file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(lock_path)
        .map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => StoreError::LockConflict(lock_path.display().to_string()),
            _ => StoreError::Io(e),
        })?;
    match file.try_lock() {
        Ok(()) => Ok(file),
        Err(TryLockError::WouldBlock) => {
            Err(StoreError::LockConflict(lock_path.display().to_string()))
        }
        // Filesystems without locking fall back to `create_new` exclusion.
        Err(TryLockError::Error(e)) if e.kind() == ErrorKind::Unsupported => Ok(file),
        Err(TryLockError::Error(e)) => Err(StoreError::Io(e)),
    }
}

/// A lock file is abandoned when it exists but no open handle holds its OS
/// lock. Any doubt (unreadable file, no locking support) counts as held.
fn is_abandoned(lock_path: &Path) -> bool {
    match fs::OpenOptions::new().write(true).open(lock_path) {
        Ok(file) => file.try_lock().is_ok(),
        Err(_) => false,
    }
}

fn lock_path_for(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".lock");
    target.with_file_name(name)
}
