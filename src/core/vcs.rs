//! Thin git wrapper for the repository root.

use crate::core::error::HwError;
use std::path::Path;
use std::process::Command;

pub fn run_git(root: &Path, args: &[&str]) -> Result<String, HwError> {
    let output = Command::new("git")
        .args(args)
        .current_dir(root)
        .output()
        .map_err(HwError::IoError)?;

    if !output.status.success() {
        return Err(HwError::ValidationError(format!(
            "git {} failed: {}",
            args.first().copied().unwrap_or(""),
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

pub fn git_init(root: &Path) -> Result<(), HwError> {
    run_git(root, &["init", "."]).map(|_| ())
}

/// Stages the file and commits with the title as the message.
/// Double quotes are stripped from the title, matching the original tool's
/// commit messages.
pub fn commit_assignment(root: &Path, filename: &str, title: &str) -> Result<(), HwError> {
    let message = title.replace('"', "");
    run_git(root, &["add", filename])?;
    run_git(root, &["commit", "-m", &message])?;
    Ok(())
}
