//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The state is immutable once built, so handlers
//! running concurrently never contend on it.

use crate::config::AppConfig;
use brs::{GeminiProvider, GenerativeContentProvider, RelayClient, RelayClientBuilder};
use std::sync::Arc;
use tracing::{info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The configuration the server was started with.
    pub config: Arc<AppConfig>,
    /// The client that pairs prompts with documents and calls the provider.
    pub relay: Arc<RelayClient>,
}

/// Builds the shared application state from the configuration.
///
/// A missing Gemini API key is logged but does not stop the server; each
/// generation request reports it instead.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let provider = GeminiProvider::new(config.gemini_config())?;
    if provider.has_api_key() {
        info!(model = %config.gemini_model, "Configured Gemini provider.");
    } else {
        warn!("GEMINI_API_KEY is not set. Generation requests will fail until it is configured.");
    }

    build_app_state_with_provider(config, Box::new(provider))
}

/// Builds the application state around an already constructed provider.
pub fn build_app_state_with_provider(
    config: AppConfig,
    provider: Box<dyn GenerativeContentProvider>,
) -> anyhow::Result<AppState> {
    let relay = RelayClientBuilder::new().provider(provider).build()?;

    Ok(AppState {
        config: Arc::new(config),
        relay: Arc::new(relay),
    })
}
