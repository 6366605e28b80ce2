//! astra-cli — terminal client for the Astra advisory HTTP API
//!
//! # Subcommands
//! - `chat <message> [--conversation <id>] [--profile <file>] [--json]`
//!   — send one message; an empty message with a fresh profile requests the
//!   initial greeting
//! - `status` — show server health

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::json;

const DEFAULT_SERVER: &str = "http://127.0.0.1:8780";

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Debug, Parser)]
#[command(
    name = "astra-cli",
    version,
    about = "Astra college-admissions advisor — HTTP API client"
)]
struct Cli {
    /// Astra HTTP server URL (overrides ASTRA_HTTP_URL env var)
    #[arg(long, env = "ASTRA_HTTP_URL", default_value = DEFAULT_SERVER)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Send one chat message and print the advisor's reply
    Chat {
        /// Message text; pass "" together with --profile for the greeting
        message: String,

        /// Resume an existing conversation by id
        #[arg(long)]
        conversation: Option<String>,

        /// Path to a JSON onboarding profile (honored for new conversations)
        #[arg(long)]
        profile: Option<String>,

        /// Print the raw JSON response instead of just the reply text
        #[arg(long)]
        json: bool,
    },

    /// Show server health
    Status,
}

// ============================================================================
// Response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatReply {
    message: ReplyMessage,
    conversation_id: String,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::blocking::Client::new();

    match cli.command {
        Commands::Chat {
            message,
            conversation,
            profile,
            json: raw,
        } => {
            let mut body = json!({ "message": message });
            if let Some(id) = conversation {
                body["conversationId"] = json!(id);
            }
            if let Some(path) = profile {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading profile {path}"))?;
                body["profile"] = serde_json::from_str(&text)
                    .with_context(|| format!("parsing profile {path}"))?;
            }

            let response = client
                .post(format!("{}/chat", cli.server))
                .json(&body)
                .send()
                .with_context(|| format!("sending chat request to {}", cli.server))?;

            let status = response.status();
            let text = response.text()?;
            if !status.is_success() {
                bail!("server returned {status}: {text}");
            }

            if raw {
                println!("{text}");
                return Ok(());
            }

            let reply: ChatReply = serde_json::from_str(&text)
                .context("parsing chat response")?;
            println!("{}", reply.message.content);
            eprintln!("\n[conversation {}]", reply.conversation_id);
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.server))
                .send()
                .with_context(|| format!("querying {}", cli.server))?;
            println!("{}", response.text()?);
        }
    }

    Ok(())
}
