//! Format handlers and the registry that maps identifiers to them.
//!
//! Each format supplies a fixed extension, a default document body, and a
//! print/export action that shells out to a converter. The registry is a
//! static table built at startup; registering two handlers under one
//! identifier, or two handlers claiming the same extension, is a
//! registration-time error rather than last-wins.

pub mod latex;
pub mod markdown;

use crate::core::error::HwError;
use std::path::{Path, PathBuf};
use std::process::Command;

pub trait FormatHandler {
    /// Registry identifier, e.g. `markdown`.
    fn id(&self) -> &'static str;
    /// Extension used both for naming new files and for inferring the
    /// format of existing ones.
    fn extension(&self) -> &'static str;
    /// Seed content for a newly created assignment. Pure.
    fn default_body(&self, title: &str, class: &str) -> String;
    /// Renders and prints the file, or exports a PDF artifact when `pdf`
    /// is set. The handler only invokes external tools and reports the
    /// outcome; it never renders in-process.
    fn print(&self, path: &Path, pdf: bool) -> Result<(), HwError>;
}

#[derive(Default)]
pub struct FormatRegistry {
    handlers: Vec<Box<dyn FormatHandler>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry::default()
    }

    /// The fixed set of built-in formats.
    pub fn builtin() -> Result<Self, HwError> {
        let mut registry = FormatRegistry::new();
        registry.register(Box::new(markdown::Markdown))?;
        registry.register(Box::new(latex::Latex))?;
        Ok(registry)
    }

    pub fn register(&mut self, handler: Box<dyn FormatHandler>) -> Result<(), HwError> {
        if self.handlers.iter().any(|h| h.id() == handler.id()) {
            return Err(HwError::ValidationError(format!(
                "format '{}' is already registered",
                handler.id()
            )));
        }
        if self.handlers.iter().any(|h| h.extension() == handler.extension()) {
            return Err(HwError::ValidationError(format!(
                "extension '.{}' is already claimed by another format",
                handler.extension()
            )));
        }
        self.handlers.push(handler);
        Ok(())
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.id()).collect()
    }

    pub fn resolve(&self, id: &str) -> Result<&dyn FormatHandler, HwError> {
        self.handlers
            .iter()
            .map(|h| h.as_ref())
            .find(|h| h.id() == id)
            .ok_or_else(|| {
                HwError::UnknownFormat(format!("{} (available: {})", id, self.ids().join(", ")))
            })
    }

    /// Infers the handler from the substring after the last `.` in the
    /// filename. No separator, or a trailing separator, is an unknown
    /// format, never a panic.
    pub fn infer(&self, filename: &str) -> Result<&dyn FormatHandler, HwError> {
        let ext = match filename.rfind('.') {
            Some(i) => &filename[i + 1..],
            None => "",
        };
        if ext.is_empty() {
            return Err(HwError::UnknownFormat(format!(
                "{} has no recognizable extension",
                filename
            )));
        }
        self.handlers
            .iter()
            .map(|h| h.as_ref())
            .find(|h| h.extension() == ext)
            .ok_or_else(|| HwError::UnknownFormat(format!("no format claims '.{}'", ext)))
    }
}

fn workdir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn require_source(path: &Path) -> Result<(), HwError> {
    if !path.is_file() {
        return Err(HwError::RenderFailure(format!(
            "source file not found: {}",
            path.display()
        )));
    }
    Ok(())
}

/// Runs a converter/printer and maps a missing binary or nonzero exit to
/// `RenderFailure`.
fn run_tool(tool: &str, args: &[String], cwd: &Path) -> Result<(), HwError> {
    let output = Command::new(tool)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| HwError::RenderFailure(format!("{}: {}", tool, e)))?;

    if !output.status.success() {
        return Err(HwError::RenderFailure(format!(
            "{} failed: {}",
            tool,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(())
}
