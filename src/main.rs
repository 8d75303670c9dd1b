//! chatrelay HTTP server
//!
//! Starts an Axum web server that relays chat completion requests to Groq.

use chatrelay::{
    cli::{Cli, Command, generate_config_template},
    completion::CompletionClient,
    config::{ClientSettings, Config},
    handlers::AppState,
    server, telemetry,
    vendor::GroqProvider,
};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Config { output }) => {
            let template = generate_config_template();
            match output {
                Some(path) => {
                    std::fs::write(&path, template)?;
                    eprintln!("Wrote config template to {}", path);
                }
                None => print!("{}", template),
            }
            Ok(())
        }
        Some(Command::Ask { message }) => {
            let settings = ClientSettings::load(&cli.config)?;
            telemetry::init(&settings.observability.log_level);
            let provider = GroqProvider::from_config(&settings.vendor)?;
            let reply = CompletionClient::new(Arc::new(provider))
                .get_completion(&message)
                .await;
            println!("{}", reply);
            Ok(())
        }
        None => serve(&cli.config).await,
    }
}

async fn serve(config_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_file(config_path)?;
    telemetry::init(&config.observability.log_level);
    let state = AppState::new(Arc::new(config))?;
    let addr = state.config().server.socket_addr();

    tracing::info!(
        base_url = %state.config().vendor.base_url(),
        "Starting chatrelay server on {}",
        addr
    );

    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    tracing::info!("Chat completions available at http://{}/api/chat-completion", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
