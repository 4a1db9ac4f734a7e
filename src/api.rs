//! HTTP client for the lobby backend.
//!
//! This module provides:
//!
//! - `ApiClient`: HTTP client wrapper over the two lobby endpoints
//! - `Game` and `Jackpot`: deserialized backend responses
//! - `ApiError`: the classified error every failed call maps to
//!
//! The games catalogue and the jackpot feed live on two independent
//! endpoints. Each fetch returns the full list; callers replace their
//! state wholesale rather than patching it. Failures are always
//! re-raised as exactly one `ApiError` kind, never swallowed here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User agent for API requests
const USER_AGENT: &str = concat!("Lobby/", env!("CARGO_PKG_VERSION"));

/// Fallback message for failures with no usable description
const UNKNOWN_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// A game in the lobby catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// A jackpot amount keyed by game id.
///
/// `game` correlates to `Game::id` but the backend does not guarantee
/// referential integrity; a jackpot for an unknown game is simply never
/// looked up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jackpot {
    pub game: String,
    pub amount: f64,
}

/// Errors from a failed backend call, classified into exactly one kind
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Server error: {status}")]
    Server { status: u16, code: Option<String> },

    #[error("Network error. Please check your connection.")]
    Network,

    #[error("{0}")]
    Unknown(String),
}

impl ApiError {
    /// Classify a transport-level failure.
    ///
    /// Total and side-effect-free: every `reqwest::Error` maps to exactly
    /// one kind and this never panics.
    ///
    /// - A response with an error status becomes `Server`
    /// - A request that was sent but got no usable response (connect
    ///   failure, timeout) becomes `Network`
    /// - Everything else (request construction, body decode) becomes
    ///   `Unknown` with the underlying message
    pub fn from_transport(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ApiError::Server {
                status: status.as_u16(),
                code: status.canonical_reason().map(str::to_string),
            };
        }

        if err.is_timeout() || err.is_connect() || err.is_request() {
            return ApiError::Network;
        }

        let message = err.to_string();
        if message.is_empty() {
            ApiError::Unknown(UNKNOWN_ERROR_MESSAGE.to_string())
        } else {
            ApiError::Unknown(message)
        }
    }
}

/// Lobby backend client
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    games_url: String,
    jackpots_url: String,
}

impl ApiClient {
    /// Create a new client from endpoint configuration
    pub fn new(config: &crate::config::ApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let base = config.base_url.trim_end_matches('/');

        Ok(Self {
            client,
            games_url: format!("{}{}", base, config.games_path),
            jackpots_url: format!("{}{}", base, config.jackpots_path),
        })
    }

    /// Fetch the full games catalogue
    pub async fn fetch_games(&self) -> Result<Vec<Game>, ApiError> {
        let games: Vec<Game> = self.get_json(&self.games_url).await?;
        tracing::debug!("Fetched {} games", games.len());
        Ok(games)
    }

    /// Fetch the current jackpot amounts
    pub async fn fetch_jackpots(&self) -> Result<Vec<Jackpot>, ApiError> {
        let jackpots: Vec<Jackpot> = self.get_json(&self.jackpots_url).await?;
        tracing::debug!("Fetched {} jackpots", jackpots.len());
        Ok(jackpots)
    }

    /// Fetch games and jackpots concurrently.
    ///
    /// Fails as soon as either leg fails; there is no partial result.
    pub async fn fetch_all(&self) -> Result<(Vec<Game>, Vec<Jackpot>), ApiError> {
        tokio::try_join!(self.fetch_games(), self.fetch_jackpots())
    }

    /// GET a URL and decode the JSON body, classifying every failure
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(ApiError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Server {
                status: status.as_u16(),
                code: status.canonical_reason().map(str::to_string),
            });
        }

        response.json().await.map_err(ApiError::from_transport)
    }
}
