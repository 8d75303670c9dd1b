//! chatrelay - one-shot chat completion relay
//!
//! Forwards a single user message to a Groq chat model, either through the
//! `POST /api/chat-completion` HTTP endpoint or in-process through
//! [`completion::CompletionClient`].

pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod telemetry;
pub mod vendor;

#[cfg(test)]
mod test_support;
