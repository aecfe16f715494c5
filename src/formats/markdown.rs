//! Markdown assignments, rendered with pandoc.

use crate::core::error::HwError;
use crate::formats::FormatHandler;
use std::path::Path;

pub struct Markdown;

impl FormatHandler for Markdown {
    fn id(&self) -> &'static str {
        "markdown"
    }

    fn extension(&self) -> &'static str {
        "markdown"
    }

    fn default_body(&self, title: &str, class: &str) -> String {
        format!("# {}\n#### {}\n\n", title, class)
    }

    fn print(&self, path: &Path, pdf: bool) -> Result<(), HwError> {
        super::require_source(path)?;
        let workdir = super::workdir(path);
        let pdf_path = path.with_extension("pdf");

        super::run_tool("pandoc", &pandoc_args(path, &workdir, &pdf_path), &workdir)?;

        if pdf {
            println!("Wrote {}", pdf_path.display());
            return Ok(());
        }
        super::run_tool("lpr", &[pdf_path.to_string_lossy().into_owned()], &workdir)
    }
}

/// The repository's scaffolded `template.html` is an HTML template, so
/// pandoc only honors it through an HTML-based PDF engine.
fn pandoc_args(path: &Path, workdir: &Path, pdf_path: &Path) -> Vec<String> {
    let mut args = vec!["-s".to_string(), path.to_string_lossy().into_owned()];

    let template = workdir.join("template.html");
    if template.is_file() {
        args.push("--pdf-engine=wkhtmltopdf".to_string());
        args.push(format!("--template={}", template.display()));
    }

    args.push("-o".to_string());
    args.push(pdf_path.to_string_lossy().into_owned());
    args
}
