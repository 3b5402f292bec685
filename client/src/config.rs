//! Build-time application configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use mapview::MapViewConfig;

/// Environment variable holding the Maps JavaScript API key at build time.
pub const API_KEY_VAR: &str = "GOOGLE_MAPS_API_KEY";

/// Configuration errors surfaced to the user instead of a map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} was not set when this build was compiled")]
    MissingApiKey { var: &'static str },
}

/// Everything the app needs before it can mount the map.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub maps_api_key: String,
    pub map: MapViewConfig,
}

impl AppConfig {
    /// Read the API key baked in by the build.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingApiKey`] when the key was unset or blank.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_key(option_env!("GOOGLE_MAPS_API_KEY"))
    }

    /// Build from an optional raw key with default map settings.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingApiKey`] when `key` is `None` or only whitespace.
    pub fn from_key(key: Option<&str>) -> Result<Self, ConfigError> {
        let key = key.map(str::trim).filter(|k| !k.is_empty());
        let Some(key) = key else {
            return Err(ConfigError::MissingApiKey { var: API_KEY_VAR });
        };
        Ok(Self { maps_api_key: key.to_owned(), map: MapViewConfig::default() })
    }
}
