//! In-memory provider double for unit tests.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

use crate::vendor::{ChatCompletion, ChatCompletionRequest, CompletionProvider, VendorError};

enum Reply {
    Completion(Value),
    ApiError(u16),
}

/// Records every request and answers each one the same way.
pub struct StubProvider {
    reply: Reply,
    requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl StubProvider {
    pub fn replying(raw: Value) -> Self {
        Self {
            reply: Reply::Completion(raw),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Reply::ApiError(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for StubProvider {
    async fn create(&self, request: &ChatCompletionRequest) -> Result<ChatCompletion, VendorError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Completion(raw) => Ok(ChatCompletion::new(raw.clone())),
            Reply::ApiError(status) => Err(VendorError::Api {
                status: *status,
                message: "stubbed failure".to_string(),
            }),
        }
    }
}
