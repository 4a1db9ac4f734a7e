//! Jackpot feed state and polling lifecycle

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::api::{ApiClient, Jackpot};

/// Jackpots-related state slice
#[derive(Debug, Default)]
struct JackpotsState {
    /// Current amounts, replaced wholesale on each successful fetch
    jackpots: Vec<Jackpot>,
    /// Whether a fetch is in flight
    loading: bool,
    /// Error message from the last failed fetch
    error: Option<String>,
}

/// Owner of the single recurring polling task.
///
/// At most one timer is armed per store; arming a new one first aborts the
/// existing one, and dropping the last store clone aborts it too.
struct Poller {
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for Poller {
    fn drop(&mut self) {
        if let Ok(task) = self.task.get_mut() {
            if let Some(task) = task.take() {
                task.abort();
            }
        }
    }
}

/// Store owning the jackpot feed and its periodic resynchronization.
///
/// Clones share the same state slice and timer handle. All getters are
/// synchronous; the internal lock is never held across an await point.
#[derive(Clone)]
pub struct JackpotsStore {
    client: ApiClient,
    state: Arc<RwLock<JackpotsState>>,
    poller: Arc<Poller>,
    interval: Duration,
}

impl JackpotsStore {
    pub fn new(client: ApiClient, interval: Duration) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(JackpotsState::default())),
            poller: Arc::new(Poller {
                task: Mutex::new(None),
            }),
            interval,
        }
    }

    /// Fetch the jackpot feed, replacing it on success.
    ///
    /// On failure the error message is stored and the previous amounts are
    /// kept; stale-but-present data is preferred over clearing.
    pub async fn fetch_jackpots(&self) {
        refresh(&self.client, &self.state).await;
    }

    /// Arm the recurring jackpot refresh.
    ///
    /// Cancels any timer already armed, then schedules a refresh every
    /// `interval`; the first refresh happens one full interval from now,
    /// not immediately. Each tick runs its refresh as a detached task, so
    /// stopping the timer never aborts a request already in flight.
    pub fn start_real_time_updates(&self) {
        let mut task = self.lock_task();
        if let Some(existing) = task.take() {
            existing.abort();
        }

        let client = self.client.clone();
        let state = Arc::clone(&self.state);
        let period = self.interval;

        *task = Some(tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut ticker = tokio::time::interval_at(start, period);
            loop {
                ticker.tick().await;
                let client = client.clone();
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    refresh(&client, &state).await;
                });
            }
        }));

        tracing::info!("Started jackpot updates every {:?}", period);
    }

    /// Cancel the recurring refresh; a no-op when no timer is armed
    pub fn stop_real_time_updates(&self) {
        if let Some(task) = self.lock_task().take() {
            task.abort();
            tracing::info!("Stopped jackpot updates");
        }
    }

    /// Whether a recurring refresh is currently armed
    pub fn is_polling(&self) -> bool {
        self.lock_task().is_some()
    }

    pub fn clear_error(&self) {
        self.write().error = None;
    }

    pub fn jackpots(&self) -> Vec<Jackpot> {
        self.read().jackpots.clone()
    }

    pub fn loading(&self) -> bool {
        self.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.read().error.clone()
    }

    /// Lookup map from game id to amount; a duplicated id keeps the entry
    /// appearing later in the feed
    pub fn jackpots_map(&self) -> HashMap<String, f64> {
        let state = self.read();
        let mut map = HashMap::with_capacity(state.jackpots.len());
        for jackpot in &state.jackpots {
            map.insert(jackpot.game.clone(), jackpot.amount);
        }
        map
    }

    /// Amount for a game, or `None` when the game has no jackpot.
    ///
    /// A recorded amount of zero also yields `None`; the feed cannot
    /// distinguish a legitimately empty pot from an absent one.
    pub fn jackpot_for_game(&self, game_id: &str) -> Option<f64> {
        self.read()
            .jackpots
            .iter()
            .rev()
            .find(|jackpot| jackpot.game == game_id)
            .map(|jackpot| jackpot.amount)
            .filter(|amount| *amount != 0.0)
    }

    /// Sum of every amount in the feed
    pub fn total_jackpot_amount(&self) -> f64 {
        self.read().jackpots.iter().map(|jackpot| jackpot.amount).sum()
    }

    pub fn jackpots_count(&self) -> usize {
        self.read().jackpots.len()
    }

    fn read(&self) -> RwLockReadGuard<'_, JackpotsState> {
        self.state.read().expect("jackpots state lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, JackpotsState> {
        self.state.write().expect("jackpots state lock poisoned")
    }

    fn lock_task(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.poller.task.lock().expect("poller lock poisoned")
    }

    #[cfg(test)]
    fn replace_jackpots(&self, jackpots: Vec<Jackpot>) {
        self.write().jackpots = jackpots;
    }
}

/// One fetch cycle: mark loading, call the backend, apply the outcome.
///
/// Shared by direct fetches and timer ticks so both paths follow the same
/// loading/error lifecycle.
async fn refresh(client: &ApiClient, state: &RwLock<JackpotsState>) {
    {
        let mut state = state.write().expect("jackpots state lock poisoned");
        state.loading = true;
        state.error = None;
    }

    let result = client.fetch_jackpots().await;

    let mut state = state.write().expect("jackpots state lock poisoned");
    match result {
        Ok(jackpots) => {
            tracing::debug!("Refreshed {} jackpots", jackpots.len());
            state.jackpots = jackpots;
        }
        Err(e) => {
            tracing::warn!("Failed to fetch jackpots: {}", e);
            state.error = Some(e.to_string());
        }
    }
    state.loading = false;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::tests::{client_for, spawn_stub};
    use std::sync::atomic::Ordering;

    fn jackpot(game: &str, amount: f64) -> Jackpot {
        Jackpot {
            game: game.to_string(),
            amount,
        }
    }

    fn store_with(jackpots: Vec<Jackpot>) -> JackpotsStore {
        let store = JackpotsStore::new(client_for("http://127.0.0.1:1"), Duration::from_secs(5));
        store.replace_jackpots(jackpots);
        store
    }

    #[test]
    fn map_round_trip_and_missing_lookup() {
        let store = store_with(vec![jackpot("g1", 1000.0), jackpot("g2", 5000.0)]);

        assert_eq!(store.jackpot_for_game("g1"), Some(1000.0));
        assert_eq!(store.jackpot_for_game("g2"), Some(5000.0));
        assert_eq!(store.jackpot_for_game("missing"), None);

        let map = store.jackpots_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("g1"), Some(&1000.0));
    }

    #[test]
    fn duplicated_game_keeps_later_entry() {
        let store = store_with(vec![jackpot("g1", 100.0), jackpot("g1", 250.0)]);

        assert_eq!(store.jackpots_map().get("g1"), Some(&250.0));
        assert_eq!(store.jackpot_for_game("g1"), Some(250.0));
    }

    #[test]
    fn zero_amount_collapses_to_none() {
        let store = store_with(vec![jackpot("g1", 0.0)]);

        assert_eq!(store.jackpot_for_game("g1"), None);
        // The raw feed still carries the entry
        assert_eq!(store.jackpots_count(), 1);
    }

    #[test]
    fn total_sums_all_amounts() {
        let store = store_with(vec![jackpot("g1", 100.0), jackpot("g2", 200.0)]);
        assert_eq!(store.total_jackpot_amount(), 300.0);

        let empty = store_with(Vec::new());
        assert_eq!(empty.total_jackpot_amount(), 0.0);
        assert_eq!(empty.jackpots_count(), 0);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_stale_feed() {
        let store = store_with(vec![jackpot("g1", 100.0)]);

        store.fetch_jackpots().await;

        assert!(!store.loading());
        assert_eq!(
            store.error().as_deref(),
            Some("Network error. Please check your connection.")
        );
        assert_eq!(store.jackpots_count(), 1);
    }

    #[tokio::test]
    async fn successful_fetch_replaces_feed() {
        let (url, _) = spawn_stub("200 OK", r#"[{"game":"g1","amount":750.5}]"#).await;
        let store = JackpotsStore::new(client_for(&url), Duration::from_secs(5));

        store.fetch_jackpots().await;

        assert_eq!(store.error(), None);
        assert_eq!(store.jackpot_for_game("g1"), Some(750.5));
    }

    #[tokio::test]
    async fn stopped_timer_triggers_no_fetches() {
        let (url, hits) = spawn_stub("200 OK", "[]").await;
        let store = JackpotsStore::new(client_for(&url), Duration::from_millis(25));

        store.start_real_time_updates();
        store.stop_real_time_updates();
        assert!(!store.is_polling());

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn restarting_arms_exactly_one_timer() {
        let (url, hits) = spawn_stub("200 OK", "[]").await;
        let store = JackpotsStore::new(client_for(&url), Duration::from_millis(40));

        // Arming twice replaces the timer rather than doubling it
        store.start_real_time_updates();
        store.start_real_time_updates();
        assert!(store.is_polling());

        tokio::time::sleep(Duration::from_millis(220)).await;
        let ticks = hits.load(Ordering::SeqCst);
        assert!(ticks >= 2, "timer never fired (saw {} ticks)", ticks);
        assert!(ticks <= 7, "duplicate timers armed (saw {} ticks)", ticks);

        store.stop_real_time_updates();
        assert!(!store.is_polling());
    }

    #[tokio::test]
    async fn stop_without_timer_is_a_noop() {
        let store = store_with(Vec::new());
        store.stop_real_time_updates();
        store.stop_real_time_updates();
        assert!(!store.is_polling());
    }

    #[tokio::test]
    async fn dropping_the_store_aborts_the_timer() {
        let (url, hits) = spawn_stub("200 OK", "[]").await;
        let store = JackpotsStore::new(client_for(&url), Duration::from_millis(25));

        store.start_real_time_updates();
        drop(store);

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }
}
