//! Embedded repository seed files.
//!
//! The files written by `hw init` are baked into the binary, so a
//! repository can be initialized without any external assets.

pub const TEMPLATE_HTML: &str = include_str!("../../templates/template.html");
pub const CONFIG_SEED: &str = include_str!("../../templates/hw.toml");
