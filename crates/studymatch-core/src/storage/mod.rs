mod config;

pub use config::{Config, Defaults};

use std::path::PathBuf;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "STUDYMATCH_CONFIG";

/// Returns `<config dir>/studymatch/`, e.g. `~/.config/studymatch/` on Linux.
///
/// Falls back to `./studymatch` when the platform has no config directory.
/// Nothing is created; the tool never writes state to disk.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("studymatch")
}
