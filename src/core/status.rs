//! The per-repository status record (`status.json`).
//!
//! A small JSON mapping with one recognized key, `latestHW`. Unknown keys
//! are preserved across writes. Writes go through a temp file in the same
//! directory followed by a rename, so the record is never observed in a
//! partially written state.

use crate::core::error::HwError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const STATUS_FILE: &str = "status.json";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "latestHW", skip_serializing_if = "Option::is_none")]
    pub latest_hw: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

pub fn status_path(root: &Path) -> PathBuf {
    root.join(STATUS_FILE)
}

/// A missing file reads as an empty record; a file that exists but does
/// not parse is reported as corrupt.
pub fn read_status(root: &Path) -> Result<Status, HwError> {
    let path = status_path(root);
    if !path.exists() {
        return Ok(Status::default());
    }
    let raw = fs::read_to_string(&path)?;
    serde_json::from_str(&raw).map_err(|e| HwError::CorruptStatus(e.to_string()))
}

pub fn read_latest(root: &Path) -> Result<Option<String>, HwError> {
    Ok(read_status(root)?.latest_hw)
}

/// Overwrites the single field; last-writer-wins.
pub fn record_latest(root: &Path, filename: &str) -> Result<(), HwError> {
    let mut status = read_status(root)?;
    status.latest_hw = Some(filename.to_string());
    write_status(root, &status)
}

fn write_status(root: &Path, status: &Status) -> Result<(), HwError> {
    let body = serde_json::to_string(status)
        .map_err(|e| HwError::ValidationError(format!("status serialize: {}", e)))?;
    let tmp = root.join(".status.json.tmp");
    fs::write(&tmp, body)?;
    fs::rename(&tmp, status_path(root))?;
    Ok(())
}
