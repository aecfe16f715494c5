//! hw: a homework toolkit for hackers.
//!
//! `hw` manages a local directory of assignment files: creating new files
//! from format templates, remembering the latest assignment, committing to
//! git, and printing or exporting assignments through pluggable format
//! handlers.
//!
//! The tool can be invoked from anywhere: `hw init` records the repository
//! in a global pointer file (`$HOME/.hw_default`), and later invocations
//! fall back to it when the current directory has no configuration.
//!
//! ```bash
//! # Initialize a repository
//! hw init
//!
//! # Create an assignment and open it in the editor
//! hw add --class "Class 8" "Essay One"
//!
//! # Quick in-class notes
//! hw note fractions
//!
//! # Print the most recent assignment, or export it to PDF
//! hw print --latest
//! hw print --pdf Essay_One.markdown
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: repository discovery, config, status record, scaffolding,
//!   and the assignment service
//! - [`formats`]: per-format handlers (markdown, latex) behind one trait

pub mod core;
pub mod formats;

use core::{
    assignment::AssignmentService,
    error::HwError,
    locate,
    scaffold::{self, ScaffoldOptions},
};
use formats::FormatRegistry;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "hw",
    version = env!("CARGO_PKG_VERSION"),
    about = "A homework toolkit for hackers"
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new assignment file and open it in the editor
    Add {
        /// Class the assignment belongs to
        #[clap(short, long, default_value = "Class 8")]
        class: String,
        /// Format to use (defaults to the repository's default_format)
        #[clap(long)]
        format: Option<String>,
        /// Assignment title; spaces become underscores in the filename
        title: String,
    },
    /// Quick notetaking: an add with a "Notes on ..." title
    Note {
        /// Class the notes belong to
        #[clap(short, long, default_value = "")]
        class: String,
        /// Subject of the notes
        subject: String,
    },
    /// Print an assignment, or export it to PDF
    Print {
        /// Produce a PDF artifact instead of sending to the printer
        #[clap(long)]
        pdf: bool,
        /// Print the most recently added assignment; FILENAME is ignored
        #[clap(long)]
        latest: bool,
        filename: Option<String>,
    },
    /// Initialize a repository for hw tracking
    Init {
        /// Directory to initialize (defaults to the current working directory)
        #[clap(short, long)]
        dir: Option<PathBuf>,
        /// Overwrite existing scaffold files
        #[clap(long)]
        force: bool,
    },
}

pub fn run() -> Result<(), HwError> {
    let cli = Cli::parse();

    match cli.command {
        // init never requires an existing repository
        Command::Init { dir, force } => {
            let target_dir = match dir {
                Some(d) => d,
                None => std::env::current_dir()?,
            };
            scaffold::init_repository(
                &ScaffoldOptions { target_dir, force },
                &locate::pointer_path()?,
            )
        }
        command => {
            let current_dir = std::env::current_dir()?;
            let located = locate::locate(&current_dir, &locate::pointer_path()?)?;
            let registry = FormatRegistry::builtin()?;
            let service = AssignmentService::new(&located.root, &located.config, &registry);

            match command {
                Command::Add {
                    class,
                    format,
                    title,
                } => {
                    let format_id =
                        format.unwrap_or_else(|| located.config.default_format.clone());
                    let filename = service.add(&title, &class, &format_id)?;
                    println!("Added {}", filename);
                }
                Command::Note { class, subject } => {
                    let filename = service.note(&subject, &class)?;
                    println!("Added {}", filename);
                }
                Command::Print {
                    pdf,
                    latest,
                    filename,
                } => {
                    service.print(filename.as_deref(), latest, pdf)?;
                }
                Command::Init { .. } => unreachable!(),
            }
            Ok(())
        }
    }
}
