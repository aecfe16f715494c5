//! Core modules: repository discovery, configuration, status record,
//! scaffolding, and the assignment service.

pub mod assets;
pub mod assignment;
pub mod config;
pub mod editor;
pub mod error;
pub mod locate;
pub mod scaffold;
pub mod status;
pub mod vcs;
