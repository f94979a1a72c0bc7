//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. Every helper is a
//! pure function of its input; nothing here holds terminal state.

use owo_colors::OwoColorize;
use std::fmt::Display;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    /// Style for section headers and banners
    pub fn header<T: Display>(text: T) -> String {
        format!("{}", text.blue().bold())
    }

    /// Style for primary values (e.g., model names)
    pub fn value<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Style for secondary/supplementary info (e.g., descriptions)
    pub fn secondary<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        format!("{}", text.red().bold())
    }

    /// Style for warning messages
    pub fn warning<T: Display>(text: T) -> String {
        format!("{}", text.yellow())
    }

    /// Style for built-in commands (e.g., "setmodel", "exit")
    pub fn command<T: Display>(text: T) -> String {
        format!("{}", text.green())
    }

    /// Style for the assistant's name in replies
    pub fn assistant<T: Display>(text: T) -> String {
        format!("{}", text.bright_red().bold())
    }

    /// Style for summary lines of a benchmark
    pub fn summary<T: Display>(text: T) -> String {
        format!("{}", text.cyan())
    }

    /// Style for file paths of written artifacts
    pub fn artifact<T: Display>(text: T) -> String {
        format!("{}", text.magenta())
    }

    /// Style for hints/help text
    pub fn hint<T: Display>(text: T) -> String {
        format!("{}", text.dimmed().italic())
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        format!("{}", text.dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_keep_text() {
        assert!(Style::value("llama3.2:1b").contains("llama3.2:1b"));
        assert!(Style::error("Error:").contains("Error:"));
        assert!(Style::artifact("ollama_speed_test.svg").contains("ollama_speed_test.svg"));
    }

    #[test]
    fn test_styles_add_escape_codes() {
        assert_ne!(Style::success("ok"), "ok");
    }
}
