//! Configuration resolution
//!
//! Each value resolves environment variable first, then the optional TOML
//! config file, then the built-in default. The aviationstack access key has
//! no default: it is a secret and must come from the environment or the
//! config file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";
pub const DEFAULT_PROVIDER_BASE_URL: &str = "http://api.aviationstack.com/v1/flights";
pub const DEFAULT_OCR_LANGUAGE: &str = "eng";
pub const DEFAULT_CONFIG_PATH: &str = "flightscan.toml";

/// Default airline prefix allow-list for flight code extraction
pub fn default_airline_prefixes() -> Vec<String> {
    ["AF", "U2", "FR", "KL", "DL"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },

    #[error(
        "aviationstack access key not configured. Please configure using one of:\n\
         1. Environment: FLIGHTSCAN_API_KEY=your-key-here\n\
         2. TOML config: flightscan.toml (api_key = \"your-key\")\n\
         \n\
         Obtain an access key at: https://aviationstack.com"
    )]
    MissingApiKey,
}

/// On-disk TOML configuration; every field is optional
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub upload_dir: Option<PathBuf>,
    pub api_key: Option<String>,
    pub provider_base_url: Option<String>,
    pub airline_prefixes: Option<Vec<String>>,
    pub ocr_language: Option<String>,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub upload_dir: PathBuf,
    pub api_key: String,
    pub provider_base_url: String,
    pub airline_prefixes: Vec<String>,
    pub ocr_language: String,
}

impl Config {
    /// Load configuration from the environment and the config file.
    ///
    /// The config file path itself is overridable via `FLIGHTSCAN_CONFIG`;
    /// a missing file is not an error, the defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("FLIGHTSCAN_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

        let file = if path.exists() {
            let config = read_toml(&path)?;
            info!("Loaded config file: {}", path.display());
            config
        } else {
            TomlConfig::default()
        };

        Self::resolve(file)
    }

    /// Resolve the final configuration: ENV beats file beats default.
    pub fn resolve(file: TomlConfig) -> Result<Self, ConfigError> {
        let port = match env_var("FLIGHTSCAN_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "FLIGHTSCAN_PORT",
                value,
            })?,
            None => file.port.unwrap_or(DEFAULT_PORT),
        };

        let upload_dir = env_var("FLIGHTSCAN_UPLOAD_DIR")
            .map(PathBuf::from)
            .or(file.upload_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR));

        let api_key = resolve_api_key(env_var("FLIGHTSCAN_API_KEY"), file.api_key)?;

        let provider_base_url = env_var("FLIGHTSCAN_PROVIDER_URL")
            .or(file.provider_base_url)
            .unwrap_or_else(|| DEFAULT_PROVIDER_BASE_URL.to_string());

        let airline_prefixes = match env_var("FLIGHTSCAN_AIRLINE_PREFIXES") {
            Some(value) => value
                .split(',')
                .map(|p| p.trim().to_uppercase())
                .filter(|p| !p.is_empty())
                .collect(),
            None => file.airline_prefixes.unwrap_or_else(default_airline_prefixes),
        };
        if airline_prefixes.is_empty() {
            return Err(ConfigError::Invalid {
                name: "airline_prefixes",
                value: "(empty)".to_string(),
            });
        }

        let ocr_language = env_var("FLIGHTSCAN_OCR_LANGUAGE")
            .or(file.ocr_language)
            .unwrap_or_else(|| DEFAULT_OCR_LANGUAGE.to_string());

        Ok(Self {
            port,
            upload_dir,
            api_key,
            provider_base_url,
            airline_prefixes,
            ocr_language,
        })
    }
}

/// Resolve the access key: ENV, then the config file.
fn resolve_api_key(
    env_key: Option<String>,
    file_key: Option<String>,
) -> Result<String, ConfigError> {
    let env_valid = env_key.as_deref().is_some_and(is_valid_key);
    let file_valid = file_key.as_deref().is_some_and(is_valid_key);

    if env_valid && file_valid {
        warn!("aviationstack access key found in environment and config file. Using environment (highest priority).");
    }

    if let Some(key) = env_key {
        if is_valid_key(&key) {
            info!("aviationstack access key loaded from environment variable");
            return Ok(key);
        }
    }

    if let Some(key) = file_key {
        if is_valid_key(&key) {
            info!("aviationstack access key loaded from config file");
            return Ok(key);
        }
    }

    Err(ConfigError::MissingApiKey)
}

/// Validate an access key (non-empty, non-whitespace)
pub fn is_valid_key(key: &str) -> bool {
    !key.trim().is_empty()
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn read_toml(path: &Path) -> Result<TomlConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
