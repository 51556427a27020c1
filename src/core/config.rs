//! Runtime configuration loaded from `orgfolders.toml`.
//!
//! A missing file is not an error: every field has a default, and command-line flags
//! override whatever the file provides.

use crate::core::error::OrgFoldersError;
use crate::core::matching::PathMatch;
use crate::core::sample;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

pub const CONFIG_FILE_NAME: &str = "orgfolders.toml";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Organization used when a command does not name one.
    pub default_org: Uuid,
    /// JSON folder dataset; the embedded sample is used when unset.
    pub data_file: Option<PathBuf>,
    pub match_mode: PathMatch,
    /// Reject datasets with a name repeated inside one organization.
    pub strict: bool,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_org: sample::default_org_id(),
            data_file: None,
            match_mode: PathMatch::default(),
            strict: false,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

/// Load configuration from `explicit` if given, else `./orgfolders.toml` when present.
///
/// An explicit path that does not exist is an error; an absent default file is not.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config, OrgFoldersError> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(OrgFoldersError::NotFound(format!(
                    "config file {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = cwd.join(CONFIG_FILE_NAME);
            if !candidate.exists() {
                return Ok(Config::default());
            }
            candidate
        }
    };

    let content = fs::read_to_string(&config_path).map_err(OrgFoldersError::IoError)?;
    let mut config: Config = toml::from_str(&content)
        .map_err(|e| OrgFoldersError::ConfigError(format!("{}: {}", config_path.display(), e)))?;

    // Relative data files resolve against the config file's directory.
    if let (Some(data), Some(parent)) = (config.data_file.as_ref(), config_path.parent())
        && data.is_relative()
    {
        config.data_file = Some(parent.join(data));
    }
    Ok(config)
}

/// Install the global tracing subscriber. `RUST_LOG` takes precedence over the
/// configured level. Output goes to stderr.
pub fn init_tracing(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    // A subscriber may already be installed (tests, embedding); keep the first one.
    if config.json {
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init();
    }
}
