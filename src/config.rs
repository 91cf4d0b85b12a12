//! Configuration: where the WordNet dictionary lives.
//!
//! Resolution order is command-line flag, then environment, then config
//! file. The config file is `<config dir>/mnemonic/config.toml` under the
//! platform config directory (`~/.config` on Linux unless
//! `XDG_CONFIG_HOME` overrides it).

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Environment variable naming the dictionary directory.
pub const DICTIONARY_ENV: &str = "MNEMONIC_DICTIONARY";

/// On-disk and environment configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// WordNet dictionary directory used when `--dictionary` is not given.
    pub dictionary: Option<PathBuf>,
}

impl Config {
    /// Read the config file if one exists, then merge environment
    /// variables on top of it.
    pub fn load() -> Result<Self> {
        let mut config = match config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                let config: Config = toml::from_str(&content)?;
                debug!(path = %path.display(), "loaded config file");
                config
            }
            _ => Config::default(),
        };
        config.merge_env_vars();
        Ok(config)
    }

    /// Environment overrides the config file.
    fn merge_env_vars(&mut self) {
        if let Some(dir) = env::var_os(DICTIONARY_ENV) {
            self.dictionary = Some(PathBuf::from(dir));
        }
    }

    /// Resolve the dictionary directory, giving an explicit flag value
    /// precedence over whatever the environment or config file supplied.
    pub fn resolve_dictionary(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        flag.or_else(|| self.dictionary.clone())
            .ok_or(Error::DictionaryNotConfigured)
    }
}

/// `<config dir>/mnemonic/config.toml`, if a config directory exists.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("mnemonic").join("config.toml"))
}
