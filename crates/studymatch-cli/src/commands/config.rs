use std::io::Write;

use clap::Subcommand;
use studymatch_core::Config;

use super::{CommandResult, Output};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Dot-separated key (e.g. "defaults.max_group_size", "roster.0.name")
        key: String,
    },
    /// Show the effective configuration
    Show,
    /// Print the path the config is read from
    Path,
}

pub fn run<W: Write>(action: ConfigAction, config: &Config, out: &mut Output<W>) -> CommandResult {
    match action {
        ConfigAction::Get { key } => match config.get(&key) {
            Some(value) => out.line(value)?,
            None => return Err(format!("unknown key: {key}").into()),
        },
        ConfigAction::Show => {
            if out.is_json() {
                out.json(config)?;
            } else {
                out.line(toml::to_string_pretty(config)?)?;
            }
        }
        ConfigAction::Path => out.line(Config::path().display().to_string())?,
    }
    Ok(())
}
