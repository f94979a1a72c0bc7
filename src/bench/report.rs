//! Terminal output for benchmark runs.

use std::path::Path;

use super::BenchmarkSummary;
use crate::ui::{GlyphStyle, Style};

const RULE_WIDTH: usize = 50;

pub fn print_header(model: &str, prompt: &str, iterations: usize, style: GlyphStyle) {
    let rule = "=".repeat(RULE_WIDTH);
    println!();
    println!("{}", Style::header(&rule));
    println!("{}", Style::header(format!("🌟 Running Test for Model: {model} 🌟")));
    println!("{}", Style::header(&rule));
    println!();
    println!("📝 Prompt: {prompt}");
    println!("🔄 Total Iterations: {iterations}");
    println!("✨ Spinner Style: {style}");
    println!();
}

/// Plain-text summary of a finished run.
pub fn summary_text(summary: &BenchmarkSummary) -> String {
    let Ok(average) = summary.average_tokens_per_second() else {
        return format!(
            "⚠️ Speed test for {} had no successful iterations; no average computed.",
            summary.model()
        );
    };

    let mut lines = vec![format!("🏆 Average Tokens per Second: {average:.2}")];

    if let (Some(min), Some(max)) = (
        summary.min_tokens_per_second(),
        summary.max_tokens_per_second(),
    ) {
        lines.push(format!("📉 Slowest: {min:.2} tokens/sec"));
        lines.push(format!("📈 Fastest: {max:.2} tokens/sec"));
    }
    if let Ok(elapsed) = summary.average_elapsed_secs() {
        lines.push(format!("⏱️ Average Time: {elapsed:.2} sec"));
    }
    lines.push(format!("🔢 Total Tokens: {}", summary.total_tokens()));

    if !summary.is_complete() {
        lines.push(format!(
            "⚠️ Completed {} of {} iterations",
            summary.results().len(),
            summary.requested_iterations()
        ));
    }

    lines.join("\n")
}

pub fn print_summary(summary: &BenchmarkSummary) {
    println!();
    println!("{}", Style::summary("📊 Speed Test Summary:"));
    if summary.results().is_empty() {
        println!("{}", Style::warning(summary_text(summary)));
    } else {
        println!("{}", summary_text(summary));
    }
}

pub fn print_chart_saved(path: &Path) {
    println!(
        "{}",
        Style::artifact(format!("🖼️ Graph saved as '{}'", path.display()))
    );
}
