//! HTTP request handlers for the chatrelay API

use crate::completion::{ENDPOINT_MODEL, MaskAndFail, OneShotCompletion};
use crate::config::Config;
use crate::error::AppResult;
use crate::metrics::{Component, Metrics};
use crate::vendor::{CompletionProvider, GroqProvider};
use std::sync::Arc;

pub mod chat_completion;
pub mod health;
pub mod metrics;

/// Application state shared across all handlers
///
/// All fields are Arc'd for cheap cloning across Axum handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    completion: Arc<OneShotCompletion<MaskAndFail>>,
    metrics: Arc<Metrics>,
}

impl AppState {
    /// Create a new AppState from configuration
    ///
    /// Builds the Groq provider, which reads the API key from the environment.
    ///
    /// # Errors
    ///
    /// Fails if the API key is missing, the HTTP client cannot be built, or
    /// metrics registration fails.
    pub fn new(config: Arc<Config>) -> AppResult<Self> {
        let provider = GroqProvider::from_config(&config.vendor)?;
        Self::with_provider(config, Arc::new(provider))
    }

    /// Create an AppState around an existing provider
    pub fn with_provider(
        config: Arc<Config>,
        provider: Arc<dyn CompletionProvider>,
    ) -> AppResult<Self> {
        let metrics = Metrics::new()?;
        let completion = OneShotCompletion::new(
            provider,
            ENDPOINT_MODEL,
            MaskAndFail,
            Component::Endpoint,
        )
        .with_metrics(metrics.clone());

        Ok(Self {
            config,
            completion: Arc::new(completion),
            metrics: Arc::new(metrics),
        })
    }

    /// Get reference to the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get reference to the metrics collector
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The endpoint's one-shot completion (fixed model, fail-with-500 policy)
    pub fn completion(&self) -> &OneShotCompletion<MaskAndFail> {
        &self.completion
    }
}
