//! Configuration for the host server.
//!
//! Loaded with figment from, in increasing precedence:
//! 1. Built-in defaults
//! 2. `alunos.toml` in the working directory (or the file named by `ALUNOS_CONFIG`)
//! 3. Environment variables prefixed with `ALUNOS_`, nested with `__`
//!    (e.g. `ALUNOS_STORE__URL`, `ALUNOS_SERVER__PORT`)

use std::path::PathBuf;

use common::model::store::{StoreConfig, DEFAULT_TABLE};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const CONFIG_FILE_NAME: &str = "alunos.toml";
const CONFIG_PATH_VAR: &str = "ALUNOS_CONFIG";
const ENV_PREFIX: &str = "ALUNOS_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreSettings,
}

/// Where the host listens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the app once the server is up.
    pub open_browser: bool,
}

/// Hosted record store the frontend should talk to.
///
/// `url` and `anon_key` have no sensible defaults; while either is blank the
/// config endpoint answers 503 and the frontend reports the failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            table: DEFAULT_TABLE.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_config_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "server.host must not be empty".to_string(),
            });
        }

        if self.server.port == 0 {
            return Err(Error::ConfigValidation {
                message: "server.port must be greater than 0".to_string(),
            });
        }

        if self.store.table.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "store.table must not be empty".to_string(),
            });
        }

        let url = self.store.url.trim();
        if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::ConfigValidation {
                message: format!("store.url must be an http(s) URL, got {url}"),
            });
        }

        Ok(())
    }

    /// What the frontend needs to reach the store, if it has been configured.
    pub fn store_config(&self) -> Option<StoreConfig> {
        let url = self.store.url.trim();
        let anon_key = self.store.anon_key.trim();
        if url.is_empty() || anon_key.is_empty() {
            return None;
        }

        Some(StoreConfig {
            url: url.to_string(),
            anon_key: anon_key.to_string(),
            table: self.store.table.trim().to_string(),
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.server.host, self.server.port)
    }
}
