use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_ENV: &str = "LEAGUECLI_CONFIG";
pub const API_KEY_ENV: &str = "RIOT_API_KEY";

/// Settings for the shell and the Riot API client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: String,
    /// Platform routing value, e.g. `na1`, `euw1`, `kr`
    pub platform: String,
    /// Regional routing value for account lookups; derived from the platform when unset
    pub region: Option<String>,
    pub default_tag: String,
    pub mastery_count: usize,
    pub timeout_secs: u64,
    pub history_file: Option<PathBuf>,
    pub prompt: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            platform: "na1".to_string(),
            region: None,
            default_tag: "NA1".to_string(),
            mastery_count: 5,
            timeout_secs: 10,
            history_file: None,
            prompt: "> ".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Loads the config from `path`, or from the default location when `path` is `None`.
    ///
    /// An explicit path must exist; a missing default file yields the defaults.
    /// `RIOT_API_KEY` overrides the key from the file.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                config.api_key = key.trim().to_string();
            }
        }

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("leaguecli").join("config.toml"))
    }

    /// Regional routing value used by account-v1
    pub fn region(&self) -> String {
        if let Some(region) = &self.region {
            return region.clone();
        }

        let platform = self.platform.to_lowercase();
        let region = match platform.as_str() {
            "na1" | "br1" | "la1" | "la2" | "oc1" => "americas",
            "euw1" | "eun1" | "tr1" | "ru" | "me1" => "europe",
            _ => "asia",
        };
        region.to_string()
    }

    pub fn history_path(&self) -> PathBuf {
        self.history_file.clone().unwrap_or_else(|| {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".leaguecli_history")
        })
    }
}
