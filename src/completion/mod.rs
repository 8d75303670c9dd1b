//! One-shot chat completions
//!
//! Both the in-process client and the HTTP endpoint do the same thing: wrap
//! one message as a user turn, call a fixed model once, and hand the result
//! to an [`ErrorPolicy`]. `OneShotCompletion` is that shared capability; each
//! call site picks its model and policy explicitly.

use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::Instrument;

use crate::metrics::{Component, Metrics, Outcome};
use crate::vendor::{ChatCompletionRequest, CompletionProvider, VendorError};

pub mod client;
pub mod policy;

pub use client::CompletionClient;
pub use policy::{APOLOGY_MESSAGE, ErrorPolicy, GENERIC_ERROR_MESSAGE, MaskAndDefault, MaskAndFail};

/// Model used by [`CompletionClient`]
pub const CLIENT_MODEL: &str = "llama3-8b-8192";

/// Model used by `POST /api/chat-completion`
pub const ENDPOINT_MODEL: &str = "llama3-70b-8192";

/// Anything that can go wrong in a one-shot completion
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Request body is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Vendor(#[from] VendorError),
}

/// A single-message completion against a fixed model, with a fixed error policy
pub struct OneShotCompletion<P> {
    provider: Arc<dyn CompletionProvider>,
    model: &'static str,
    policy: P,
    component: Component,
    metrics: Option<Metrics>,
}

impl<P: ErrorPolicy> OneShotCompletion<P> {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        model: &'static str,
        policy: P,
        component: Component,
    ) -> Self {
        Self {
            provider,
            model,
            policy,
            component,
            metrics: None,
        }
    }

    /// Record call counts and latency into `metrics`
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn model(&self) -> &'static str {
        self.model
    }

    /// Send `content` as the only user message and apply the policy to the result
    pub async fn run(&self, content: Option<String>) -> P::Output {
        let span = tracing::info_span!(
            "one_shot_completion",
            model = self.model,
            component = self.component.as_str()
        );

        async move {
            let request = ChatCompletionRequest::one_shot(self.model, content);
            let started = Instant::now();
            let result = self.provider.create(&request).await;
            let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;

            match result {
                Ok(completion) => {
                    self.record(Outcome::Success, elapsed_ms);
                    self.policy.on_success(completion)
                }
                Err(e) => {
                    self.record(Outcome::Error, elapsed_ms);
                    self.policy.on_error(&CompletionError::Vendor(e))
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Route a failure that happened before the API call through the policy
    pub fn fail(&self, error: CompletionError) -> P::Output {
        let _guard = tracing::info_span!(
            "one_shot_completion",
            model = self.model,
            component = self.component.as_str()
        )
        .entered();

        self.record(Outcome::Error, 0.0);
        self.policy.on_error(&error)
    }

    fn record(&self, outcome: Outcome, elapsed_ms: f64) {
        let Some(metrics) = &self.metrics else {
            return;
        };
        if let Err(e) = metrics.record_completion(self.component, outcome, elapsed_ms) {
            tracing::warn!(
                error = %e,
                component = self.component.as_str(),
                outcome = outcome.as_str(),
                "Metrics recording failed (non-fatal)"
            );
        }
    }
}
