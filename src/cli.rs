//! Command-line interface for chatrelay
//!
//! Provides argument parsing and subcommand handling for the chatrelay binary.

use clap::{Parser, Subcommand};

/// One-shot chat completion relay for the Groq API
#[derive(Parser)]
#[command(name = "chatrelay")]
#[command(version)]
#[command(about = "One-shot chat completion relay for the Groq API")]
#[command(
    long_about = "chatrelay serves POST /api/chat-completion, which forwards a single user \
    message to a Groq chat model and relays the response. The `ask` subcommand runs the \
    same kind of call in-process and prints the answer."
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a template configuration file
    Config {
        /// Output file path (prints to stdout if not specified)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Send one message to the model and print the reply
    Ask {
        /// Message to send as the user turn
        message: String,
    },
}

/// Generate template configuration content
pub fn generate_config_template() -> &'static str {
    r#"# chatrelay configuration
#
# The API key is never stored here. Export it in the environment variable
# named by vendor.api_key_env (GROQ_API_KEY by default).

[server]
# IP address to bind to (0.0.0.0 for all interfaces, 127.0.0.1 for localhost only)
host = "0.0.0.0"

# Port to listen on
port = 3000

[vendor]
# OpenAI-compatible API base URL; requests go to {base_url}/chat/completions
base_url = "https://api.groq.com/openai/v1"

# Environment variable holding the API key
api_key_env = "GROQ_API_KEY"

# Per-call HTTP timeout in seconds, (0, 300]
timeout_seconds = 60

[observability]
# Log level: "trace", "debug", "info", "warn", "error" (RUST_LOG overrides)
log_level = "info"
"#
}
