use std::sync::Arc;

use astra_core::{generate, AstraConfig, ConversationStore};
use clap::Parser;
use tokio::sync::broadcast;
use tracing_subscriber::{fmt, EnvFilter};

use astra_server::http::{self, HttpState};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "astra.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience — production uses real env vars)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Init logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    // Load config
    let config = match AstraConfig::load(&args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config from {}: {}", args.config, e);
            std::process::exit(1);
        }
    };

    // Select the response generator backend
    let generator = match generate::create_generator(&config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Failed to create response generator: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(backend = generator.name(), "response generator ready");

    let state = Arc::new(HttpState {
        store: Arc::new(ConversationStore::new()),
        generator: Arc::from(generator),
    });

    let (tx, _rx) = broadcast::channel(1);
    let shutdown_tx = tx.clone();

    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
        tracing::info!("Shutdown signal received");
        let _ = shutdown_tx.send(());
    });

    http::start_http_server(state, &config, tx.subscribe()).await?;

    Ok(())
}
