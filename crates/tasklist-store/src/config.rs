use crate::bridge::DEFAULT_SLOT_KEY;
use crate::error::StoreError;
use crate::lockfile::Lockfile;
use crate::slot::validate_key;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_FILE: &str = "config.json";
pub const CONFIG_VERSION: u32 = 1;

/// Workspace settings stored in `.tasklist/config.json`.
///
/// Every field has a default, so a missing file or a partial file both
/// load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Name of the slot holding the task snapshot.
    pub slot_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            created_at: None,
            slot_key: DEFAULT_SLOT_KEY.to_string(),
        }
    }
}

impl Config {
    pub fn fresh() -> Self {
        Self {
            created_at: Some(Utc::now()),
            ..Self::default()
        }
    }

    pub fn load(dir: &Path) -> Result<Self, StoreError> {
        let config: Self = match fs::read_to_string(dir.join(CONFIG_FILE)) {
            Ok(data) => serde_json::from_str(&data)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(StoreError::Io(e)),
        };
        validate_key(&config.slot_key)?;
        Ok(config)
    }

    pub fn save(&self, dir: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        Lockfile::replace(dir.join(CONFIG_FILE), json.as_bytes())
    }
}
