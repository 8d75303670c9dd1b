//! Chat completion endpoint
//!
//! Handles `POST /api/chat-completion` with a `{"content": string}` body.
//! Relays the API's completion object verbatim on success; any failure,
//! including a malformed body, becomes a generic 500.

use axum::{
    Extension,
    body::Bytes,
    extract::State,
    response::Response,
};
use serde::Deserialize;
use tracing::Instrument;

use crate::handlers::AppState;
use crate::middleware::RequestId;

/// Request body for `POST /api/chat-completion`
///
/// `content` is not validated. A body without it is still forwarded, and
/// the API's rejection comes back as a 500.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// POST /api/chat-completion handler
///
/// The body is read raw and parsed here, not by the `Json` extractor, so
/// parse failures take the same 500 path as API failures.
pub async fn handler(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> Response {
    let span = tracing::info_span!("chat_completion", request_id = %request_id);

    async move {
        let completion = state.completion();
        match serde_json::from_slice::<ChatRequest>(&body) {
            Ok(request) => {
                if request.content.is_none() {
                    tracing::warn!("Request body has no content field; forwarding anyway");
                }
                completion.run(request.content).await
            }
            Err(e) => completion.fail(e.into()),
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_parses_content() {
        let request: ChatRequest = serde_json::from_str(r#"{"content": "hello"}"#).unwrap();
        assert_eq!(request.content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_chat_request_missing_content_is_none() {
        let request: ChatRequest = serde_json::from_str(r#"{"other": 1}"#).unwrap();
        assert!(request.content.is_none());
    }

    #[test]
    fn test_chat_request_rejects_non_object() {
        assert!(serde_json::from_str::<ChatRequest>("not json").is_err());
        assert!(serde_json::from_str::<ChatRequest>("[1, 2]").is_err());
    }

    #[test]
    fn test_chat_request_rejects_non_string_content() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"content": 5}"#).is_err());
        assert!(serde_json::from_str::<ChatRequest>(r#"{"content": {"text": "hi"}}"#).is_err());
    }
}
