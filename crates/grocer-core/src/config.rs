//! Layered configuration loading with figment.
//!
//! Sources, lowest to highest priority:
//!
//! 1. Built-in defaults
//! 2. `$XDG_CONFIG_HOME/grocer/config.toml`
//! 3. Environment variables prefixed `GROCER_`, with `__` separating nested
//!    keys (`GROCER_REMOTE__URL` sets `remote.url`)
//!
//! ```toml
//! missed_items = "reset"
//!
//! [remote]
//! url = "https://project.supabase.co"
//! api_key = "anon-key"
//! access_token = "user-jwt"
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{
    error::{GroceryError, Result},
    models::MissedItemPolicy,
    store::{RemoteEndpoint, Session},
};

const ENV_PREFIX: &str = "GROCER_";

/// Settings for the remote-synced backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RemoteSettings {
    /// Base URL of the service
    pub url: Option<String>,
    /// Public project key sent as the `apikey` header
    pub api_key: Option<String>,
    /// Bearer token of the signed-in user
    pub access_token: Option<String>,
}

impl RemoteSettings {
    /// The endpoint, when both URL and key are configured.
    pub fn endpoint(&self) -> Option<RemoteEndpoint> {
        match (non_blank(&self.url), non_blank(&self.api_key)) {
            (Some(url), Some(api_key)) => Some(RemoteEndpoint {
                url: url.to_string(),
                api_key: api_key.to_string(),
            }),
            _ => None,
        }
    }

    /// Authenticated when an access token is present, otherwise guest.
    pub fn session(&self) -> Session {
        match non_blank(&self.access_token) {
            Some(token) => Session::Authenticated {
                access_token: token.to_string(),
            },
            None => Session::Guest,
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GrocerConfig {
    /// Local database file; defaults to `$XDG_DATA_HOME/grocer/grocer.db`
    #[serde(default)]
    pub database_file: Option<PathBuf>,

    /// What happens to items still needed when a trip finishes
    #[serde(default)]
    pub missed_items: MissedItemPolicy,

    #[serde(default)]
    pub remote: RemoteSettings,
}

impl GrocerConfig {
    /// Load configuration from the user config file and environment.
    pub fn load() -> Result<Self> {
        Self::figment(Self::config_file_path().as_deref())
            .extract()
            .map_err(|e| GroceryError::Configuration {
                message: e.to_string(),
            })
    }

    /// Build the provider chain over an optional TOML file.
    ///
    /// Public so callers and tests can point it at a specific file.
    pub fn figment(config_file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path of the user config file, if one exists.
    pub fn config_file_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("grocer").find_config_file("config.toml")
    }
}
