//! AstraCli Config
//!
//! See instructions in `commands.rs` to specify the path to your
//! application's configuration file and/or command-line options
//! for specifying it.
use crate::error::Error;
use abscissa_core::tracing::debug;
use astra_config::constants;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// AstraCli Configuration
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AstraCliConfig {
    /// Chain id commands fall back to when none is given
    pub default_chain: String,
    /// Locale code used when printing message bundles
    pub locale: String,
}

impl Default for AstraCliConfig {
    fn default() -> Self {
        Self {
            default_chain: constants::ASTRA_CHAIN_ID.to_string(),
            locale: "en".to_string(),
        }
    }
}

/// Builds the config path in the user's home directory
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::home_dir().unwrap_or_default();
    path.push(".astra");
    path.push("config.toml");

    path
}

/// Initializes the astra config dir and file if they do not exist.
pub fn init() -> Result<PathBuf, Error> {
    let path = get_config_path();
    if let Some(config_dir) = path.parent() {
        if !config_dir.exists() {
            debug!("config directory does not exist. creating!");
            fs::create_dir_all(config_dir)?;
        }
    }
    if !path.exists() {
        debug!("creating config file with defaults");
        let config_content = toml::to_string(&AstraCliConfig::default())?;
        fs::write(&path, config_content)?;
    }

    Ok(path)
}
