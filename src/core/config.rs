//! Repository configuration loaded from `hw.toml`.
//!
//! The config is an explicit struct handed by reference into the service,
//! never a process-global. Loading failure from a directory is what drives
//! the locator's fallback, so `load` reports a missing file as
//! `ConfigurationMissing`.

use crate::core::error::HwError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "hw.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Format used by `hw add` when --format is not given.
    pub default_format: String,
    /// Format used by `hw note`.
    pub note_format: String,
    /// Editor spawned for new assignments.
    pub editor: String,
    /// Commit each new assignment to git after the editor exits.
    pub use_git: bool,
    /// Class name -> subdirectory for new assignment files.
    pub class_dirs: BTreeMap<String, PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_format: "markdown".to_string(),
            note_format: "markdown".to_string(),
            editor: "vim".to_string(),
            use_git: false,
            class_dirs: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE)
    }

    pub fn load(dir: &Path) -> Result<Config, HwError> {
        let raw = fs::read_to_string(Self::path(dir)).map_err(|_| HwError::ConfigurationMissing)?;
        toml::from_str(&raw).map_err(|e| HwError::ValidationError(format!("{}: {}", CONFIG_FILE, e)))
    }

    /// Optional relocation of a new assignment file, keyed by class.
    /// Title and format are part of the hook signature for future use.
    pub fn file_directory(
        &self,
        filename: &str,
        _title: &str,
        class: &str,
        _format: &str,
    ) -> Option<PathBuf> {
        self.class_dirs.get(class).map(|dir| dir.join(filename))
    }
}
