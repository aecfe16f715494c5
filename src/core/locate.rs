//! Repository discovery.
//!
//! `hw` can be invoked from anywhere on the filesystem: if the current
//! directory holds a loadable configuration it is the repository root;
//! otherwise the global pointer file (written by `hw init`) names the
//! fallback root. Resolution is a plain two-step function returning a
//! discriminated result, not a chdir-and-retry. Ordering is fixed: the
//! fallback is consulted only after the local attempt fails, and the
//! config retry always follows a successful fallback resolution.

use crate::core::config::Config;
use crate::core::error::HwError;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the global pointer file under `$HOME`.
pub const POINTER_FILE: &str = ".hw_default";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    /// The invocation directory held a valid configuration.
    Local,
    /// The root came from the global pointer file.
    Fallback,
}

#[derive(Debug)]
pub struct Located {
    pub root: PathBuf,
    pub source: RootSource,
    pub config: Config,
}

/// Default pointer path: `$HOME/.hw_default`.
pub fn pointer_path() -> Result<PathBuf, HwError> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(POINTER_FILE))
}

pub fn locate(initial_dir: &Path, pointer: &Path) -> Result<Located, HwError> {
    if let Ok(config) = Config::load(initial_dir) {
        return Ok(Located {
            root: initial_dir.to_path_buf(),
            source: RootSource::Local,
            config,
        });
    }

    let raw = fs::read_to_string(pointer)
        .map_err(|_| HwError::NoFallback(pointer.display().to_string()))?;
    let fallback = PathBuf::from(raw.trim());
    if !fallback.is_dir() {
        return Err(HwError::InvalidFallback(fallback.display().to_string()));
    }

    let config = Config::load(&fallback).map_err(|_| HwError::ConfigurationMissing)?;
    Ok(Located {
        root: fallback,
        source: RootSource::Fallback,
        config,
    })
}
