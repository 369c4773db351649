use std::{env, path::PathBuf};

use ::config::{Config, ConfigError, Environment, File};

use super::schema::Settings;

/// Env prefix for overrides: `SPOTIDECK__SEARCH__DEBOUNCE_MS=500` sets `search.debounce_ms`.
const ENV_PREFIX: &str = "SPOTIDECK";
/// Points at an explicit config file, bypassing the XDG lookup.
const CONFIG_PATH_VAR: &str = "SPOTIDECK_CONFIG_PATH";
const APP_DIR: &str = "spotideck";

impl Settings {
    /// Struct defaults, then the TOML file if it exists, then `SPOTIDECK__*`
    /// variables. A later layer wins key by key, so a file only needs the
    /// timings or endpoints it changes.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// The pipelines divide by or sleep on these values, so zero is rejected.
    /// A search ceiling below the quiet period would make the quiet period moot.
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            ("queue.throttle_ms", self.queue.throttle_ms),
            ("search.debounce_ms", self.search.debounce_ms),
            ("ui.tick_ms", self.ui.tick_ms),
        ];
        if let Some((key, _)) = positive.iter().find(|(_, value)| *value == 0) {
            return Err(format!("{} must be >= 1", key));
        }
        if self.search.max_wait_ms < self.search.debounce_ms {
            return Err("search.max_wait_ms must be >= search.debounce_ms".to_string());
        }
        Ok(())
    }
}

/// `SPOTIDECK_CONFIG_PATH` if set, otherwise the per-user default.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_VAR)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `$XDG_CONFIG_HOME/spotideck/config.toml`, or `~/.config/spotideck/config.toml`
/// without `XDG_CONFIG_HOME`. `None` when neither variable is set.
pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|dir| dir.join(APP_DIR).join("config.toml"))
}
