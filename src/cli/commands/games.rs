//! Games catalogue commands

use anyhow::Result;
use clap::Subcommand;

use crate::app::App;
use crate::cli::output::{capitalize, print_formatted, print_success, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum GamesCommands {
    /// List the catalogue, optionally filtered by display category
    List {
        /// Display category to filter by (e.g. "slots", "other")
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the display categories derived from the catalogue
    Categories,
}

pub async fn run(command: GamesCommands, app: &App, format: OutputFormat, quiet: bool) -> Result<()> {
    match command {
        GamesCommands::List { category } => list(app, category, format, quiet).await,
        GamesCommands::Categories => categories(app, format).await,
    }
}

async fn list(app: &App, category: Option<String>, format: OutputFormat, quiet: bool) -> Result<()> {
    app.games.fetch_games().await;
    if let Some(err) = app.games.error() {
        anyhow::bail!("Failed to fetch games: {}", err);
    }

    if let Some(category) = category {
        app.games.set_selected_category(category);
    }

    let games = app.games.filtered_games();
    print_formatted(&games, format, |games| {
        games
            .iter()
            .map(|game| format!("{:<12} {:<28} [{}]", game.id, game.name, game.categories.join(", ")))
            .collect::<Vec<_>>()
            .join("\n")
    });

    if format == OutputFormat::Text {
        print_success(
            &format!(
                "{} games ({})",
                app.games.games_count(),
                capitalize(&app.games.selected_category())
            ),
            quiet,
        );
    }

    Ok(())
}

async fn categories(app: &App, format: OutputFormat) -> Result<()> {
    app.games.fetch_games().await;
    if let Some(err) = app.games.error() {
        anyhow::bail!("Failed to fetch games: {}", err);
    }

    let categories = app.games.categories();
    print_formatted(&categories, format, |categories| {
        categories
            .iter()
            .map(|category| capitalize(category))
            .collect::<Vec<_>>()
            .join("\n")
    });

    Ok(())
}
