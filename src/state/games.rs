//! Games catalogue state

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::api::{ApiClient, Game};
use crate::category::{self, ALL_CATEGORIES};

/// Games-related state slice
#[derive(Debug)]
struct GamesState {
    /// Current catalogue, replaced wholesale on each successful fetch
    games: Vec<Game>,
    /// Whether a fetch is in flight
    loading: bool,
    /// Error message from the last failed fetch
    error: Option<String>,
    /// Active category filter
    selected_category: String,
}

impl Default for GamesState {
    fn default() -> Self {
        Self {
            games: Vec::new(),
            loading: false,
            error: None,
            selected_category: ALL_CATEGORIES.to_string(),
        }
    }
}

/// Store owning the games catalogue and its category filter.
///
/// Clones share the same state slice. All getters are synchronous; the
/// internal lock is never held across an await point. Concurrent fetches
/// are not fenced: whichever call resolves last wins the state update.
#[derive(Clone)]
pub struct GamesStore {
    client: ApiClient,
    state: Arc<RwLock<GamesState>>,
}

impl GamesStore {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(GamesState::default())),
        }
    }

    /// Fetch the catalogue, replacing it on success.
    ///
    /// On failure the error message is stored and the previous catalogue
    /// is kept; stale-but-present data is preferred over clearing.
    pub async fn fetch_games(&self) {
        {
            let mut state = self.write();
            state.loading = true;
            state.error = None;
        }

        let result = self.client.fetch_games().await;

        let mut state = self.write();
        match result {
            Ok(games) => {
                tracing::info!("Loaded {} games", games.len());
                state.games = games;
            }
            Err(e) => {
                tracing::warn!("Failed to fetch games: {}", e);
                state.error = Some(e.to_string());
            }
        }
        state.loading = false;
    }

    /// Set the active category filter.
    ///
    /// No validation against known categories; an unknown value simply
    /// yields an empty filtered list.
    pub fn set_selected_category(&self, category: impl Into<String>) {
        self.write().selected_category = category.into();
    }

    pub fn clear_error(&self) {
        self.write().error = None;
    }

    pub fn games(&self) -> Vec<Game> {
        self.read().games.clone()
    }

    pub fn loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    pub fn selected_category(&self) -> String {
        self.read().selected_category.clone()
    }

    /// Catalogue under the active filter, preserving original order
    pub fn filtered_games(&self) -> Vec<Game> {
        let state = self.read();
        if state.selected_category == ALL_CATEGORIES {
            return state.games.clone();
        }
        state
            .games
            .iter()
            .filter(|game| category::game_matches_category(game, &state.selected_category))
            .cloned()
            .collect()
    }

    /// Ordered display taxonomy for the current catalogue
    pub fn categories(&self) -> Vec<String> {
        category::display_categories(&self.read().games)
    }

    /// Number of games under the active filter
    pub fn games_count(&self) -> usize {
        self.filtered_games().len()
    }

    fn read(&self) -> RwLockReadGuard<'_, GamesState> {
        self.state.read().expect("games state lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, GamesState> {
        self.state.write().expect("games state lock poisoned")
    }

    #[cfg(test)]
    fn replace_games(&self, games: Vec<Game>) {
        self.write().games = games;
    }
}
