//! LaTeX assignments, rendered with pdflatex.

use crate::core::error::HwError;
use crate::formats::FormatHandler;
use std::path::Path;

pub struct Latex;

impl FormatHandler for Latex {
    fn id(&self) -> &'static str {
        "latex"
    }

    fn extension(&self) -> &'static str {
        "tex"
    }

    fn default_body(&self, title: &str, class: &str) -> String {
        format!(
            "\\documentclass{{article}}\n\n\\title{{{}}}\n\\author{{{}}}\n\\date{{\\today}}\n\n\\begin{{document}}\n\n\\maketitle\n\n\\end{{document}}\n",
            title, class
        )
    }

    fn print(&self, path: &Path, pdf: bool) -> Result<(), HwError> {
        super::require_source(path)?;
        let workdir = super::workdir(path);
        let pdf_path = path.with_extension("pdf");

        super::run_tool(
            "pdflatex",
            &[
                "-interaction=nonstopmode".to_string(),
                "-halt-on-error".to_string(),
                path.to_string_lossy().into_owned(),
            ],
            &workdir,
        )?;

        if pdf {
            println!("Wrote {}", pdf_path.display());
            return Ok(());
        }
        super::run_tool("lpr", &[pdf_path.to_string_lossy().into_owned()], &workdir)
    }
}
