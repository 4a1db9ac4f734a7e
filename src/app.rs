//! Application context owning the stores and the shared backend client.
//!
//! Constructed once at startup and passed to consumers by reference; there
//! is no ambient global state.

use std::time::Duration;

use anyhow::Result;

use crate::api::ApiClient;
use crate::config::Config;
use crate::state::{GamesStore, JackpotsStore};

/// The lobby data layer: one store per backend feed, sharing one client
pub struct App {
    pub games: GamesStore,
    pub jackpots: JackpotsStore,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let client = ApiClient::new(&config.api)?;
        let interval = Duration::from_millis(config.polling.jackpot_interval_ms);

        Ok(Self {
            games: GamesStore::new(client.clone()),
            jackpots: JackpotsStore::new(client, interval),
        })
    }

    /// Trigger the initial fetch on both stores concurrently.
    ///
    /// Each store handles its own failure; a failed leg leaves its error
    /// recorded on that store without affecting the other.
    pub async fn refresh_all(&self) {
        tokio::join!(self.games.fetch_games(), self.jackpots.fetch_jackpots());
    }
}
