use crate::error::StoreError;
use crate::lockfile::Lockfile;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A key/value medium holding string values under named slots.
pub trait SlotStore {
    /// Read a slot. An absent slot is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a slot, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: SlotStore + ?Sized> SlotStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Reject keys that could escape the slot directory or hide the file.
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    let reason = if key.is_empty() {
        "key cannot be empty"
    } else if key.contains('\0') {
        "key cannot contain null bytes"
    } else if key.starts_with('.') {
        "key cannot start with '.'"
    } else if key.contains('/') || key.contains('\\') {
        "key cannot contain path separators"
    } else {
        return Ok(());
    };
    Err(StoreError::InvalidKey(key.replace('\0', "\\0"), reason.into()))
}

/// Slots stored as `<dir>/<key>.json`, one file per key.
///
/// Writes go through a [`Lockfile`], so a reader never sees a half-written
/// slot.
#[derive(Debug, Clone)]
pub struct FileSlots {
    dir: PathBuf,
}

impl FileSlots {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileSlots {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        validate_key(key)?;
        match fs::read_to_string(self.slot_path(key)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        Lockfile::replace(self.slot_path(key), value.as_bytes())
    }
}

/// In-process slots. Writes can be switched off to simulate an
/// unavailable medium.
#[derive(Debug, Clone, Default)]
pub struct MemorySlots {
    values: HashMap<String, String>,
    refuse_writes: bool,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = Self::default();
        slots.values.insert(key.into(), value.into());
        slots
    }

    pub fn refuse_writes(&mut self, refuse: bool) {
        self.refuse_writes = refuse;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl SlotStore for MemorySlots {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.refuse_writes {
            return Err(StoreError::WriteRefused(key.to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
