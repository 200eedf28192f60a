//! Frontdesk application binary - composition root.
//!
//! Ties the Frontdesk crates into a single executable:
//! 1. Parse CLI args and initialize tracing
//! 2. Load configuration from TOML
//! 3. Build the rule-based reply engine and open a chat session
//! 4. Run the terminal widget loop (stand-in for the web chat widget)

mod cli;

use std::io::{self, BufRead, Write};

use clap::Parser;

use frontdesk_chat::{ChatSession, ReplyEngine};
use frontdesk_core::config::FrontdeskConfig;

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Config.
    let config_file = args.resolve_config_path();
    let mut config = FrontdeskConfig::load_or_default(&config_file);
    if let Some(ms) = args.delay_ms {
        config.chat.thinking_delay_ms = ms;
    }

    // Tracing.
    let log_level = args.resolve_log_level(&config.general.log_level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    tracing::info!("Starting Frontdesk v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), "Configuration resolved");

    // Engine and session.
    let engine = ReplyEngine::new();
    let assistant_name = config.chat.assistant_name.clone();
    let mut session = ChatSession::new(engine, config.chat);
    tracing::info!(session = %session.id, "Chat session opened");

    println!("Ask {} (type 'exit' or Ctrl+D to quit, 'transcript' to review the conversation)", assistant_name);
    println!();
    if let Some(opening) = session.transcript().last() {
        println!("{}> {}", assistant_name, opening.text);
    }

    // Widget loop: read one utterance per turn, print one reply.
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("you> ");
        stdout.flush().ok();

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read input");
                continue;
            }
        }

        let line = input.trim();
        match line {
            "" => continue, // do not submit empty input
            "exit" | "quit" => break,
            "transcript" => {
                for turn in session.transcript().turns() {
                    let speaker = match turn.origin {
                        frontdesk_chat::Origin::User => "you",
                        frontdesk_chat::Origin::Assistant => assistant_name.as_str(),
                    };
                    println!("{}> {}", speaker, turn.text);
                }
            }
            _ => match session.submit(line).await {
                Ok(reply) => println!("{}> {}", assistant_name, reply),
                Err(e) => {
                    tracing::warn!(error = %e, "Submission rejected");
                    println!("({})", e);
                }
            },
        }
    }

    tracing::info!(turns = session.transcript().len(), "Session closed");
    Ok(())
}
