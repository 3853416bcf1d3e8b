//! Roster — in-memory employee registry CLI.
//!
//! Every command builds a fresh registry from a read-only YAML seed roster.
//! Nothing is written back.
//!
//! # Usage
//!
//! ```text
//! roster list <seed> [--json]
//! roster show <seed> <id> [--json]
//! roster search <seed> [--first-name N] [--last-name N] [--position P] [--page N] [--size N] [--json]
//! roster run <seed> <script> [--json]
//! ```

mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{list::ListArgs, run::RunArgs, search::SearchArgs, show::ShowArgs};
use roster_core::{config, RegistryError, RosterConfig};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Query and exercise an in-memory employee registry",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every employee, oldest hire first.
    List(ListArgs),

    /// Show one employee by id.
    Show(ShowArgs),

    /// Filter employees by name or position, one page at a time.
    Search(SearchArgs),

    /// Replay a YAML script of registry operations against the seed.
    Run(RunArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;
    init_tracing(&config);

    match cli.command {
        Commands::List(args) => args.run(),
        Commands::Show(args) => args.run(),
        Commands::Search(args) => args.run(&config),
        Commands::Run(args) => args.run(&config),
    }
}

/// No home directory is not fatal; a broken config file is.
fn load_config() -> Result<RosterConfig> {
    match config::load_config() {
        Ok(config) => Ok(config),
        Err(RegistryError::HomeNotFound) => Ok(RosterConfig::default()),
        Err(err) => Err(err).context("failed to load ~/.roster/config.yaml"),
    }
}

fn init_tracing(config: &RosterConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_env("ROSTER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
