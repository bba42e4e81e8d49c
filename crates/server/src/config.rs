//! # Application Configuration
//!
//! This module defines the configuration of `brs-server` and loads it once at
//! startup from an optional `config.yml` file and the process environment.
//! The resulting [`AppConfig`] is handed to the state builder; nothing else
//! reads the environment afterwards.

use brs::constants::{gemini_endpoint, DEFAULT_GEMINI_MODEL};
use brs::GeminiConfig;
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use std::time::Duration;
use tracing::info;

/// The file read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates a required configuration file was not found.
    NotFound(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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

/// The root configuration structure.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// The Gemini API key. Loaded from `GEMINI_API_KEY`. Optional at startup.
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    /// The Gemini model name. Loaded from `GEMINI_MODEL`.
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// Overrides the endpoint derived from `gemini_model`. Loaded from `GEMINI_API_URL`.
    #[serde(default)]
    pub gemini_api_url: Option<String>,
    /// Maximum accepted request body. Loaded from `BODY_LIMIT_BYTES`.
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
    /// Upstream request timeout in seconds. Loaded from `REQUEST_TIMEOUT_SECS`.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_port() -> u16 {
    3000
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

/// 25 MiB, enough for a base64-inflated PDF of roughly 18 MiB.
fn default_body_limit_bytes() -> usize {
    25 * 1024 * 1024
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            gemini_api_url: None,
            body_limit_bytes: default_body_limit_bytes(),
            request_timeout_secs: None,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_url", &self.gemini_api_url)
            .field("body_limit_bytes", &self.body_limit_bytes)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// The endpoint requests are sent to: the explicit URL, or the one derived from the model.
    pub fn gemini_api_url(&self) -> String {
        self.gemini_api_url
            .clone()
            .unwrap_or_else(|| gemini_endpoint(&self.gemini_model))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Settings for the Gemini client built from this configuration.
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_url: self.gemini_api_url(),
            api_key: self.gemini_api_key.clone(),
            timeout: self.request_timeout(),
        }
    }
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(format!("Invalid substitution pattern: {e}")))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from a file and environment variables.
///
/// - Layer 1: the defaults declared on [`AppConfig`].
/// - Layer 2: a YAML file. An explicit `config_path_override` must exist;
///   otherwise `config.yml` in the working directory is used when present.
///   `${VAR}` placeholders in the file are replaced with environment values.
/// - Layer 3: environment variables named after the fields (`PORT`, `GEMINI_API_KEY`, ...).
///
/// An empty API key is treated as absent.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder();

    let file_content = match config_path_override {
        Some(path) => Some(read_and_substitute(path)?.ok_or_else(|| {
            ConfigError::NotFound(format!("Config file not found at '{path}'."))
        })?),
        None => read_and_substitute(DEFAULT_CONFIG_FILE)?,
    };

    if let Some(content) = file_content {
        info!(
            "Loading configuration from '{}'.",
            config_path_override.unwrap_or(DEFAULT_CONFIG_FILE)
        );
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    let settings = builder.add_source(Environment::default()).build()?;

    let mut config: AppConfig = settings.try_deserialize()?;
    config.gemini_api_key = config
        .gemini_api_key
        .filter(|key| !key.trim().is_empty());

    Ok(config)
}
