//! Chat mode UI components.

use super::command::COMMANDS;
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(model: &str) {
    println!(
        "{} {} - Ollama Terminal Chat",
        Style::header("🤖 MyGPT"),
        Style::version(format!("v{VERSION}"))
    );
    println!("Chatting with model: {}", Style::value(model));
    println!(
        "{}",
        Style::hint(
            "Type 'exit' to quit, 'models' to list available models, \
             'setmodel <model_name>' to change model, 'testmodel' to run speed test"
        )
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Bye Bye 👋👋👋..."));
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (cmd, desc) in COMMANDS {
        println!(
            "  {} {}",
            Style::command(format!("{cmd:<10}")),
            Style::secondary(desc)
        );
    }
    println!(
        "  {}",
        Style::hint("Anything else is sent to the current model as a single prompt.")
    );
    println!();
}

pub fn print_interrupted() {
    println!();
    println!("{}", Style::warning("Interrupted. Type 'exit' to quit."));
}

pub fn print_model_changed(model: &str) {
    println!(
        "{} Changing model to {}",
        Style::success("✓"),
        Style::value(model)
    );
}

pub fn print_models(listing: &str) {
    println!("{}", Style::header("Available Ollama Models:"));
    println!("{}", listing.trim_end());
}

pub fn print_testmodel(model: &str) {
    println!(
        "{}",
        Style::warning(format!("Running speed test for model {model}..."))
    );
}

pub fn reply_line(reply: &str) -> String {
    format!("{} {reply}", Style::assistant("🤖 MyGPT:"))
}

pub fn request_error_line(error: &anyhow::Error) -> String {
    format!("{} {error:#}", Style::error("❌ Error:"))
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
