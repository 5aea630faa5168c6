//! # Application Configuration
//!
//! Loads the server configuration in layers: built-in defaults, an optional
//! `config.yml` (with `${VAR}` substitution), plain environment variables for
//! top-level keys, and `SOCIALYZE_`-prefixed variables for nested keys.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use socialyze::constants::DEFAULT_DB_FILE;
use socialyze::types::ProviderConfig;
use std::env;
use std::fs;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::info;

static ENV_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}").expect("valid placeholder regex"));

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `config.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT` env var.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The path to the SQLite database holding document records. An empty
    /// value disables persistence. Loaded from `DB_URL` env var.
    #[serde(default = "default_db_url")]
    pub db_url: String,
    /// Directory uploads are written to. Loaded from `UPLOAD_DIR` env var.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Largest accepted upload. Loaded from `MAX_UPLOAD_BYTES` env var.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Settings for the generative model.
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Settings for the suggestion model.
#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    /// The provider to call. Absent means suggestions always use the local fallback.
    #[serde(default)]
    pub provider: Option<ProviderConfig>,
    /// Upper bound on one model call; expiry is treated as a failed call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl GenerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_port() -> u16 {
    5000
}

fn default_db_url() -> String {
    DEFAULT_DB_FILE.to_string()
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_timeout_secs() -> u64 {
    30
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let expanded_content = ENV_PLACEHOLDER.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// - With `config_path_override`, that file must exist.
/// - Otherwise `config.yml` next to this crate's manifest is used when present.
/// - Top-level keys like `port` and `db_url` are overridden by `PORT` and `DB_URL`.
/// - Nested keys are overridden by `SOCIALYZE_...` variables
///   (e.g., `SOCIALYZE_GENERATION__TIMEOUT_SECS`).
/// - When no provider is configured, a non-empty `GEMINI_API` variable
///   configures a Gemini provider with the default model.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    match config_path_override {
        Some(path) => {
            let content = read_and_substitute(path)?.ok_or_else(|| {
                ConfigError::NotFound(format!("Config file not found at '{path}'."))
            })?;
            info!("Loading configuration from '{path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None => {
            let user_config_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
            if let Some(content) = read_and_substitute(&user_config_path)? {
                info!("Loading user-defined configuration from '{user_config_path}'.");
                builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
            } else {
                info!("'{user_config_path}' not found. Using defaults and environment.");
            }
        }
    }

    let settings = builder
        .add_source(Environment::default())
        .add_source(
            Environment::with_prefix("SOCIALYZE")
                .prefix_separator("_")
                .try_parsing(true)
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    if config.generation.provider.is_none() {
        if let Ok(key) = env::var("GEMINI_API") {
            if !key.is_empty() {
                info!("Configuring Gemini from the GEMINI_API environment variable.");
                config.generation.provider = Some(ProviderConfig {
                    provider: "gemini".to_string(),
                    api_url: None,
                    api_key: Some(key),
                    model_name: None,
                    max_output_tokens: None,
                });
            }
        }
    }

    Ok(config)
}
