//! Terminal rendering for conversation events.

use coach_core::conversation::{Message, MessageRole};
use coach_core::credit::CreditLedger;
use coach_core::response::SUGGESTED_PROMPTS;
use coach_interaction::InteractionEvent;
use colored::Colorize;

pub fn print_banner() {
    println!("{}", "=== AI Income Coach ===".bright_magenta().bold());
    println!(
        "{}",
        "Type a question, '/help' for commands, or 'quit' to exit.".bright_black()
    );
    println!(
        "{}",
        "AI responses are suggestions, not financial advice. Uses 1 AI credit per message."
            .bright_black()
    );
    println!();
}

pub fn print_suggestions() {
    println!("{}", "Try these prompts:".bright_black());
    for (index, prompt) in SUGGESTED_PROMPTS.iter().enumerate() {
        println!("  {}", format!("{}. {}", index + 1, prompt).cyan());
    }
    println!();
}

pub fn print_help() {
    println!("{}", "/credits   show remaining AI credits".bright_black());
    println!("{}", "/reset     start a new billing cycle".bright_black());
    println!("{}", "/history   replay the conversation".bright_black());
    println!("{}", "/quit      leave".bright_black());
}

pub fn print_message(message: &Message) {
    match message.role {
        MessageRole::User => {
            println!("{}", format!("> {}", message.content).green());
        }
        MessageRole::Assistant => {
            if let Some(badge) = message.agent_badge() {
                println!("{}", format!("[{badge}]").bright_magenta());
            }
            for line in message.content.lines() {
                println!("{}", line.bright_blue());
            }
            println!(
                "{}",
                message
                    .created_at
                    .format("%H:%M:%S")
                    .to_string()
                    .bright_black()
            );
            println!();
        }
    }
}

pub fn print_credits(ledger: &CreditLedger, tier: impl std::fmt::Display) {
    let text = format!(
        "{} / {} AI credits remaining ({tier} tier)",
        ledger.remaining(),
        ledger.capacity()
    );
    if ledger.is_exhausted() {
        println!("{}", text.red());
    } else {
        println!("{}", text.bright_black());
    }
}

/// Renders one event. User messages are not echoed; the line editor already
/// shows them.
pub fn print_event(event: &InteractionEvent) {
    match event {
        InteractionEvent::MessageAppended(message) if message.is_assistant() => {
            print_message(message)
        }
        InteractionEvent::MessageAppended(_) => {}
        InteractionEvent::PendingChanged(true) => {
            println!("{}", "coach is typing...".bright_black().italic());
        }
        InteractionEvent::PendingChanged(false) => {}
        InteractionEvent::CreditsChanged { remaining } => {
            println!("{}", format!("({remaining} credits left)").bright_black());
        }
        InteractionEvent::Failed { message } => {
            println!("{}", format!("Error: {message}").red());
        }
    }
}
