//! Error policies for one-shot completions.
//!
//! A policy decides what a caller sees on success and on failure. Neither
//! policy lets error detail through: the error is logged and replaced.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::CompletionError;
use crate::vendor::ChatCompletion;

/// Returned by [`MaskAndDefault`] whenever the completion call fails.
pub const APOLOGY_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

/// Error body returned by [`MaskAndFail`] with a 500.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";

/// Maps the result of a completion call to what the caller receives.
pub trait ErrorPolicy: Send + Sync {
    type Output;

    fn on_success(&self, completion: ChatCompletion) -> Self::Output;

    fn on_error(&self, error: &CompletionError) -> Self::Output;
}

/// Fail soft: the caller always gets a string.
///
/// Success yields the first choice's content (or `""` when there is none).
/// Any failure yields [`APOLOGY_MESSAGE`], so callers cannot tell an API
/// error from a legitimately empty completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskAndDefault;

impl ErrorPolicy for MaskAndDefault {
    type Output = String;

    fn on_success(&self, completion: ChatCompletion) -> String {
        completion.first_content().unwrap_or_default().to_string()
    }

    fn on_error(&self, error: &CompletionError) -> String {
        tracing::error!(error = %error, "Error calling chat completions API");
        APOLOGY_MESSAGE.to_string()
    }
}

/// Fail hard with a generic HTTP 500.
///
/// Success relays the vendor object verbatim with 200. Failure returns
/// `{"error": GENERIC_ERROR_MESSAGE}` with 500. Both are `application/json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaskAndFail;

impl ErrorPolicy for MaskAndFail {
    type Output = Response;

    fn on_success(&self, completion: ChatCompletion) -> Response {
        (StatusCode::OK, Json(completion.into_json())).into_response()
    }

    fn on_error(&self, error: &CompletionError) -> Response {
        tracing::error!(error = %error, "Error in POST /api/chat-completion");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": GENERIC_ERROR_MESSAGE })),
        )
            .into_response()
    }
}
