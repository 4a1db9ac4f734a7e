//! Combined games-with-jackpots view

use anyhow::Result;
use serde::Serialize;

use crate::app::App;
use crate::cli::output::{format_jackpot, print_formatted, print_success, OutputFormat};

/// One catalogue row merged with its jackpot, when it has one
#[derive(Serialize)]
struct OverviewRow {
    id: String,
    name: String,
    categories: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    jackpot: Option<f64>,
}

pub async fn run(app: &App, format: OutputFormat, quiet: bool) -> Result<()> {
    app.refresh_all().await;

    // The merged view needs both feeds; either failure leaves nothing to show
    if let Some(err) = app.games.error() {
        anyhow::bail!("Failed to fetch games: {}", err);
    }
    if let Some(err) = app.jackpots.error() {
        anyhow::bail!("Failed to fetch jackpots: {}", err);
    }

    let rows: Vec<OverviewRow> = app
        .games
        .games()
        .into_iter()
        .map(|game| {
            let jackpot = app.jackpots.jackpot_for_game(&game.id);
            OverviewRow {
                id: game.id,
                name: game.name,
                categories: game.categories,
                jackpot,
            }
        })
        .collect();

    print_formatted(&rows, format, |rows| {
        rows.iter()
            .map(|row| {
                let jackpot = row
                    .jackpot
                    .map(format_jackpot)
                    .unwrap_or_else(|| "-".to_string());
                format!("{:<12} {:<28} {}", row.id, row.name, jackpot)
            })
            .collect::<Vec<_>>()
            .join("\n")
    });

    if format == OutputFormat::Text {
        print_success(&format!("{} games", rows.len()), quiet);
    }

    Ok(())
}
