use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use studymatch_core::{Config, Roster};
use tracing_subscriber::EnvFilter;

mod commands;

/// Environment variable holding the log filter, e.g. `studymatch_core=debug`.
const LOG_ENV: &str = "STUDYMATCH_LOG";

#[derive(Parser)]
#[command(name = "studymatch", version, about = "StudyMatch: find your study crew")]
struct Cli {
    /// Config file (default: $STUDYMATCH_CONFIG or ~/.config/studymatch/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session reading commands from stdin (default)
    Shell,
    /// Show the configured courses, spots, years, time slots and styles
    Catalog,
    /// Show the candidate roster
    Roster {
        /// Only show this person
        name: Option<String>,
    },
    /// Configuration inspection
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config)?;
    let mut out = commands::Output::new(std::io::stdout().lock(), cli.json);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = std::io::stdin();
            let interactive = stdin.is_terminal();
            commands::shell::run(config, stdin.lock(), interactive, &mut out)
        }
        Commands::Catalog => commands::catalog::show_catalog(&config.catalog, &mut out),
        Commands::Roster { name } => {
            let roster = Roster::new(config.roster);
            commands::catalog::show_roster(&roster, name.as_deref(), &mut out)
        }
        Commands::Config { action } => commands::config::run(action, &config, &mut out),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
