use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use coach_core::conversation::RejectReason;
use coach_core::credit::CreditLedger;
use coach_infrastructure::ConfigLoader;
use coach_interaction::{InteractionController, InteractionEvent, open_conversation};

mod prompt;
mod render;

use prompt::{CoachHelper, suggested_prompt};

#[derive(Parser)]
#[command(name = "coach")]
#[command(about = "AI Income Coach - simulated chat REPL", long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/coach/config.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the simulated reply delay in milliseconds
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Start without the welcome message
    #[arg(long)]
    no_greeting: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints events until the outstanding reply has landed or failed.
///
/// Every accepted turn ends with `PendingChanged(false)`, so nothing is left
/// in the channel between turns.
async fn render_turn(events: &mut mpsc::UnboundedReceiver<InteractionEvent>) {
    while let Some(event) = events.recv().await {
        render::print_event(&event);
        if event == InteractionEvent::PendingChanged(false) {
            break;
        }
    }
}

/// Maps a bare number to the matching suggested prompt while suggestions
/// are on screen.
fn expand_suggestion<'a>(controller: &InteractionController, input: &'a str) -> Cow<'a, str> {
    if !controller.shows_suggestions() {
        return Borrowed(input);
    }
    match suggested_prompt(input) {
        Some(prompt) => Owned(prompt.to_string()),
        None => Borrowed(input),
    }
}

fn report_rejection(reason: RejectReason) {
    let hint = match reason {
        RejectReason::EmptyInput | RejectReason::InputTooLong { .. } => reason.to_string(),
        RejectReason::AlreadyPending => "Please wait for the current reply.".to_string(),
        RejectReason::NoCreditsRemaining => {
            "No AI credits remaining. Use /reset to start a new billing cycle.".to_string()
        }
    };
    println!("{}", hint.yellow());
}

/// The main entry point for the coach REPL.
///
/// Loads configuration, opens a conversation against the configured agent,
/// and relays each line to the interaction controller, rendering its events.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // ===== Backend Initialization =====
    let loader = match cli.config {
        Some(path) => ConfigLoader::new(path),
        None => ConfigLoader::default_location()?,
    };
    let mut config = loader.load()?;
    if let Some(latency_ms) = cli.latency_ms {
        config.latency_ms = latency_ms;
    }
    if cli.no_greeting {
        config.greeting = false;
    }
    tracing::info!(
        path = %loader.path().display(),
        tier = %config.tier,
        agent = ?config.agent,
        "configuration loaded"
    );

    let ledger = Arc::new(CreditLedger::for_tier(config.tier));
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let controller = open_conversation(&config, Arc::clone(&ledger)).with_event_sender(event_tx);

    // ===== REPL Setup =====
    let suggestions = Arc::new(AtomicBool::new(controller.shows_suggestions()));
    let mut rl: Editor<CoachHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(CoachHelper::new(Arc::clone(&suggestions))));

    render::print_banner();
    for message in controller.messages() {
        render::print_message(&message);
    }
    if controller.shows_suggestions() {
        render::print_suggestions();
    }

    // ===== Main REPL Loop =====
    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" || trimmed == "/quit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                match trimmed {
                    "/help" => render::print_help(),
                    "/credits" => render::print_credits(&ledger, config.tier),
                    "/reset" => {
                        ledger.reset();
                        render::print_credits(&ledger, config.tier);
                    }
                    "/history" => {
                        for message in controller.messages() {
                            render::print_message(&message);
                        }
                    }
                    command if command.starts_with('/') => {
                        println!("{}", "Unknown command".bright_black());
                    }
                    _ => {
                        let text = expand_suggestion(&controller, trimmed);
                        match controller.submit(&text) {
                            Ok(()) => {
                                suggestions.store(false, Ordering::Relaxed);
                                render_turn(&mut event_rx).await;
                            }
                            Err(reason) => report_rejection(reason),
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    controller.teardown();
    Ok(())
}
