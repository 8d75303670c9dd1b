//! In-process completion client
//!
//! `get_completion` never fails: errors are logged and replaced with
//! [`APOLOGY_MESSAGE`](super::APOLOGY_MESSAGE).

use std::sync::Arc;

use super::{CLIENT_MODEL, MaskAndDefault, OneShotCompletion};
use crate::metrics::{Component, Metrics};
use crate::vendor::CompletionProvider;

pub struct CompletionClient {
    inner: OneShotCompletion<MaskAndDefault>,
}

impl CompletionClient {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self {
            inner: OneShotCompletion::new(provider, CLIENT_MODEL, MaskAndDefault, Component::Client),
        }
    }

    pub fn with_metrics(self, metrics: Metrics) -> Self {
        Self {
            inner: self.inner.with_metrics(metrics),
        }
    }

    /// Ask the model for a completion of `message`.
    ///
    /// Returns the first choice's content, `""` if the response carries none,
    /// or the apology message if the call failed for any reason.
    pub async fn get_completion(&self, message: &str) -> String {
        self.inner.run(Some(message.to_string())).await
    }
}
