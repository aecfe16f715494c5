//! Assignment orchestration: add, note, and print.
//!
//! The only module with business logic tying the registry, status store,
//! config, editor, and git together. Side effects in `add` are strictly
//! sequential and editor-exit-gated: the status record is updated and the
//! commit runs only after the interactive edit completes successfully.

use crate::core::config::Config;
use crate::core::editor;
use crate::core::error::HwError;
use crate::core::status;
use crate::core::vcs;
use crate::formats::FormatRegistry;
use std::fs;
use std::path::Path;

pub struct AssignmentService<'a> {
    root: &'a Path,
    config: &'a Config,
    registry: &'a FormatRegistry,
}

impl<'a> AssignmentService<'a> {
    pub fn new(root: &'a Path, config: &'a Config, registry: &'a FormatRegistry) -> Self {
        AssignmentService {
            root,
            config,
            registry,
        }
    }

    /// Creates a new assignment file, hands it to the editor, and on a
    /// successful edit records it as the latest assignment (and commits it
    /// when `use_git` is set). Returns the repository-relative filename.
    pub fn add(&self, title: &str, class: &str, format_id: &str) -> Result<String, HwError> {
        let handler = self.registry.resolve(format_id)?;

        let mut filename = format!("{}.{}", title.replace(' ', "_"), handler.extension());
        if let Some(relocated) = self.config.file_directory(&filename, title, class, format_id) {
            filename = relocated.to_string_lossy().into_owned();
        }

        let path = self.root.join(&filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, handler.default_body(title, class))?;

        editor::edit(self.root, &self.config.editor, &path)?;

        status::record_latest(self.root, &filename)?;

        if self.config.use_git {
            vcs::commit_assignment(self.root, &filename, title)?;
        }

        Ok(filename)
    }

    /// Quick notetaking: an `add` with a "Notes on ..." title and the
    /// configured note format.
    pub fn note(&self, subject: &str, class: &str) -> Result<String, HwError> {
        self.add(
            &format!("Notes on {}", subject),
            class,
            &self.config.note_format,
        )
    }

    /// Prints an assignment through its format handler. With `latest`, the
    /// target comes from the status record and `filename` is ignored.
    pub fn print(&self, filename: Option<&str>, latest: bool, pdf: bool) -> Result<(), HwError> {
        let target = if latest {
            let recorded = status::read_latest(self.root)?.ok_or(HwError::NoLatestAssignment)?;
            println!("Printing {}", recorded);
            recorded
        } else {
            filename
                .ok_or_else(|| {
                    HwError::ValidationError("print needs a filename or --latest".to_string())
                })?
                .to_string()
        };

        let handler = self.registry.infer(&target)?;
        handler.print(&self.root.join(&target), pdf)
    }
}
