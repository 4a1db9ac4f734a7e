//! Jackpot feed commands

use std::time::Duration;

use anyhow::Result;
use clap::Subcommand;
use serde::Serialize;

use crate::app::App;
use crate::cli::output::{format_jackpot, print_formatted, print_success, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum JackpotsCommands {
    /// List current jackpot amounts
    List,

    /// Show the total jackpot pool
    Total,

    /// Follow live jackpot updates for a while
    Watch {
        /// How long to watch before stopping
        #[arg(long, default_value_t = 30)]
        seconds: u64,
    },
}

/// JSON-serializable jackpot pool summary
#[derive(Serialize)]
struct TotalResult {
    total: f64,
    count: usize,
}

pub async fn run(
    command: JackpotsCommands,
    app: &App,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match command {
        JackpotsCommands::List => list(app, format).await,
        JackpotsCommands::Total => total(app, format).await,
        JackpotsCommands::Watch { seconds } => watch(app, seconds, quiet).await,
    }
}

async fn list(app: &App, format: OutputFormat) -> Result<()> {
    app.jackpots.fetch_jackpots().await;
    if let Some(err) = app.jackpots.error() {
        anyhow::bail!("Failed to fetch jackpots: {}", err);
    }

    let jackpots = app.jackpots.jackpots();
    print_formatted(&jackpots, format, |jackpots| {
        jackpots
            .iter()
            .map(|jackpot| format!("{:<12} {}", jackpot.game, format_jackpot(jackpot.amount)))
            .collect::<Vec<_>>()
            .join("\n")
    });

    Ok(())
}

async fn total(app: &App, format: OutputFormat) -> Result<()> {
    app.jackpots.fetch_jackpots().await;
    if let Some(err) = app.jackpots.error() {
        anyhow::bail!("Failed to fetch jackpots: {}", err);
    }

    let result = TotalResult {
        total: app.jackpots.total_jackpot_amount(),
        count: app.jackpots.jackpots_count(),
    };
    print_formatted(&result, format, |r| {
        format!(
            "Total jackpot pool: {} across {} games",
            format_jackpot(r.total),
            r.count
        )
    });

    Ok(())
}

/// Poll the feed and print the pool total whenever it changes
async fn watch(app: &App, seconds: u64, quiet: bool) -> Result<()> {
    app.jackpots.fetch_jackpots().await;
    if let Some(err) = app.jackpots.error() {
        anyhow::bail!("Failed to fetch jackpots: {}", err);
    }

    let mut last_total = app.jackpots.total_jackpot_amount();
    println!("Total jackpot pool: {}", format_jackpot(last_total));

    app.jackpots.start_real_time_updates();
    print_success(&format!("Watching for {} seconds...", seconds), quiet);

    for _ in 0..seconds {
        tokio::time::sleep(Duration::from_secs(1)).await;

        if let Some(err) = app.jackpots.error() {
            print_success(&format!("Refresh failed: {}", err), quiet);
            app.jackpots.clear_error();
            continue;
        }

        let total = app.jackpots.total_jackpot_amount();
        if total != last_total {
            println!("Total jackpot pool: {}", format_jackpot(total));
            last_total = total;
        }
    }

    app.jackpots.stop_real_time_updates();
    Ok(())
}
