//! Repository scaffolding for `hw init`.
//!
//! Creates the status record, the print template, and a seed configuration
//! in the target directory, runs `git init`, and records the directory in
//! the global pointer file so later invocations can find it from anywhere.
//! Existing files are preserved unless `--force` is passed, so re-running
//! `init` never loses the status record.

use crate::core::assets;
use crate::core::config;
use crate::core::error::HwError;
use crate::core::status;
use crate::core::vcs;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

pub struct ScaffoldOptions {
    /// Target directory for the new repository (usually the cwd).
    pub target_dir: PathBuf,
    /// Overwrite existing scaffold files.
    pub force: bool,
}

fn write_file(target_dir: &Path, force: bool, rel_path: &str, content: &str) -> Result<(), HwError> {
    let dest = target_dir.join(rel_path);
    if dest.exists() && !force {
        println!(
            "  {} {} {}",
            "✓".bright_green(),
            rel_path.bright_white(),
            "(preserved - pass --force to overwrite)".bright_black()
        );
        return Ok(());
    }
    fs::write(&dest, content)?;
    println!("  {} {}", "●".bright_green(), rel_path.bright_white());
    Ok(())
}

pub fn init_repository(opts: &ScaffoldOptions, pointer: &Path) -> Result<(), HwError> {
    fs::create_dir_all(&opts.target_dir)?;
    let target_dir = fs::canonicalize(&opts.target_dir)?;

    println!("Initializing hw repository in {}", target_dir.display());

    write_file(&target_dir, opts.force, status::STATUS_FILE, "{}")?;
    write_file(&target_dir, opts.force, "template.html", assets::TEMPLATE_HTML)?;
    write_file(&target_dir, opts.force, config::CONFIG_FILE, assets::CONFIG_SEED)?;

    // Best effort: a missing git binary should not block repository setup.
    if let Err(e) = vcs::git_init(&target_dir) {
        eprintln!("  {} git init failed: {}", "warning:".yellow(), e);
    }

    fs::write(pointer, target_dir.to_string_lossy().as_bytes())?;
    println!("  pointer: {}", pointer.display());

    println!("{}", "Repository ready.".bright_green());
    Ok(())
}
