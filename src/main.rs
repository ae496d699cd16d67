//! Blur - AI text cleanup on a global hotkey
//!
//! Captures selected or clipboard text, sends it to a completion service
//! for improvement, and writes the result back in place or to the
//! clipboard.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use blur::capture::{self, SystemTextSource};
use blur::config::Config;
use blur::console;
use blur::core::openai::OpenAiClient;
use blur::hotkeys;
use blur::notify::SystemNotifier;
use blur::pipeline::Pipeline;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    // Setup logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("✍️ Blur v{} starting...", env!("CARGO_PKG_VERSION"));

    let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set - cleanup requests will fail");
    }

    if !capture::accessibility_trusted() {
        warn!("Accessibility permission missing - selection cleanup will not work");
        warn!("Enable it in System Settings > Privacy & Security > Accessibility");
    }

    let pipeline = Pipeline::new(
        Arc::new(SystemTextSource::new()),
        Arc::new(OpenAiClient::new(&config, api_key)),
        Arc::new(SystemNotifier::new()),
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    hotkeys::spawn_listener(tx);
    info!("⌨️ Global hotkey listener registered");

    console::print_banner();
    info!("✅ Blur ready - select text and press Cmd+Opt+E");

    // The listener thread holds the sender for the lifetime of the process,
    // so this loop runs until the process is killed.
    while let Some(action) = rx.recv().await {
        pipeline.handle(action);
    }

    Ok(())
}
