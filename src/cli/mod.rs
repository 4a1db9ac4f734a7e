//! CLI for the lobby data layer
//!
//! The command surface is the crate's presentation layer: commands drive
//! the stores and read their derived state.

mod commands;
mod output;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

use crate::app::App;
use crate::config::Config;

/// Lobby - casino game lobby data layer
#[derive(Parser, Debug)]
#[command(name = "lobby")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Games catalogue and category filters
    Games {
        #[command(subcommand)]
        command: commands::games::GamesCommands,
    },

    /// Jackpot amounts and live updates
    Jackpots {
        #[command(subcommand)]
        command: commands::jackpots::JackpotsCommands,
    },

    /// Combined games-with-jackpots view
    Overview,

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let format = cli.output.format();
    let quiet = cli.output.quiet;

    let config = Config::load()?;
    let app = App::new(&config)?;

    match cli.command {
        Commands::Games { command } => commands::games::run(command, &app, format, quiet).await,
        Commands::Jackpots { command } => {
            commands::jackpots::run(command, &app, format, quiet).await
        }
        Commands::Overview => commands::overview::run(&app, format, quiet).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
    }
}
