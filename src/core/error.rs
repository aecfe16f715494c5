use std::env;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HwError {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Environment variable error: {0}")]
    EnvVarError(#[from] env::VarError),
    #[error("The configuration file could not be loaded. Did you use `hw init` first?")]
    ConfigurationMissing,
    #[error("No default repository recorded at {0}. Did you use `hw init` first?")]
    NoFallback(String),
    #[error("The recorded default repository does not exist: {0}")]
    InvalidFallback(String),
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
    #[error("Print failed: {0}")]
    RenderFailure(String),
    #[error("The status record could not be parsed: {0}")]
    CorruptStatus(String),
    #[error("No assignment recorded yet; pass a filename instead of --latest")]
    NoLatestAssignment,
    #[error("Editor failed: {0}")]
    EditorFailure(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl HwError {
    /// Exit-code contract: 0 success, 1 configuration/locate failure,
    /// 2 unknown format, 3 render/print failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            HwError::UnknownFormat(_) => 2,
            HwError::RenderFailure(_) => 3,
            _ => 1,
        }
    }
}
