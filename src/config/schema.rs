use std::time::Duration;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/spotideck/config.toml` or `~/.config/spotideck/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SPOTIDECK__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub auth: AuthSettings,
    pub queue: QueueSettings,
    pub search: SearchSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// Root of the Web API, without a trailing slash.
    pub base_url: String,
    /// Number of tracks requested per search.
    pub search_limit: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.spotify.com/v1".to_string(),
            search_limit: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    pub client_id: String,
    /// Where the accounts service sends the browser back, with the token in the fragment.
    pub redirect_uri: String,
    pub authorize_endpoint: String,
    pub scopes: Vec<String>,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            client_id: "492e1e45ea814fa3ac555fe1576aaf5b".to_string(),
            redirect_uri: "http://127.0.0.1:8898/callback".to_string(),
            authorize_endpoint: "https://accounts.spotify.com/authorize".to_string(),
            scopes: [
                "user-read-playback-state",
                "user-modify-playback-state",
                "user-read-currently-playing",
                "playlist-read-private",
                "playlist-read-collaborative",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    /// Length of the window during which further queue intents are dropped (milliseconds).
    pub throttle_ms: u64,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self { throttle_ms: 1500 }
    }
}

impl QueueSettings {
    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Quiet period after the last keystroke before a search is sent (milliseconds).
    pub debounce_ms: u64,
    /// Longest a burst of keystrokes may postpone the search (milliseconds).
    pub max_wait_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: 800,
            max_wait_ms: 1000,
        }
    }
}

impl SearchSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn max_wait(&self) -> Duration {
        Duration::from_millis(self.max_wait_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Input poll timeout of the event loop (milliseconds).
    pub tick_ms: u64,
    pub now_playing_refresh_secs: u64,
    /// Max playlists shown in the sidebar.
    pub playlist_limit: u32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: 50,
            now_playing_refresh_secs: 5,
            playlist_limit: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub dir: String,
    pub file_prefix: String,
    /// Filter used when `RUST_LOG` is not set.
    pub default_filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            dir: ".logs".to_string(),
            file_prefix: "spotideck".to_string(),
            default_filter: "spotideck=debug,rspotify=info,reqwest=info,warn".to_string(),
        }
    }
}
