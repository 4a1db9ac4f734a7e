use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the configured API base URL
const BASE_URL_ENV: &str = "LOBBY_API_BASE_URL";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub polling: PollingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            polling: PollingConfig::default(),
        }
    }
}

/// Backend endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the lobby backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the games catalogue endpoint
    #[serde(default = "default_games_path")]
    pub games_path: String,
    /// Path of the jackpots endpoint
    #[serde(default = "default_jackpots_path")]
    pub jackpots_path: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            games_path: default_games_path(),
            jackpots_path: default_jackpots_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://stage.whgstage.com/front-end-test".to_string()
}

fn default_games_path() -> String {
    "/games.php".to_string()
}

fn default_jackpots_path() -> String {
    "/jackpots.php".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

/// Jackpot refresh settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Milliseconds between jackpot refreshes
    #[serde(default = "default_jackpot_interval_ms")]
    pub jackpot_interval_ms: u64,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            jackpot_interval_ms: default_jackpot_interval_ms(),
        }
    }
}

fn default_jackpot_interval_ms() -> u64 {
    5000
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "lobby", "Lobby")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, with the base URL overridable from
    /// the environment
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            tracing::info!("Loaded configuration from {:?}", path);
            config
        } else {
            tracing::info!("No configuration file found, using defaults");
            Self::default()
        };

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.is_empty() {
                config.api.base_url = base_url;
            }
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        tracing::info!("Saved configuration to {:?}", path);
        Ok(())
    }
}
