//! Interactive editor session for a newly created assignment.

use crate::core::error::HwError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Spawns the configured editor on `file` and blocks until it exits.
/// Stdio is inherited so terminal editors work. A nonzero exit is an
/// error; callers gate the status update and commit on success.
pub fn edit(root: &Path, editor: &str, file: &Path) -> Result<(), HwError> {
    let status = Command::new(editor)
        .arg(file)
        .current_dir(root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| HwError::EditorFailure(format!("{}: {}", editor, e)))?;

    if !status.success() {
        return Err(HwError::EditorFailure(format!(
            "{} exited with {}",
            editor,
            status
                .code()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "a signal".to_string())
        )));
    }
    Ok(())
}
