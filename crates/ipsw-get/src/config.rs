//! Layered configuration: defaults, an optional TOML file, then
//! `IPSW_GET_*` environment variables.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use ipsw_fetch::ClientSetting;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.ipsw.me/v2.1/firmwares.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Endpoint serving the firmware metadata document.
    pub api_url: String,
    #[serde(default)]
    pub proxies: Vec<String>,
    pub user_agent: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            proxies: Vec::new(),
            user_agent: Some(concat!("ipsw-get/", env!("CARGO_PKG_VERSION")).to_string()),
        }
    }
}

impl Config {
    const ENV_PREFIX: &'static str = "IPSW_GET_";

    pub fn figment(path: Option<&Path>) -> Figment {
        let mut fig = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            fig = fig.merge(Toml::file(path));
        }
        fig.merge(Env::prefixed(Self::ENV_PREFIX))
    }

    /// A path given explicitly must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingConfigFile(PathBuf::from(path)));
            }
        }
        Ok(Self::figment(path).extract()?)
    }

    pub fn client_setting(&self) -> ClientSetting {
        ClientSetting {
            proxies: self.proxies.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}
