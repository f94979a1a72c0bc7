//! # mygpt - Ollama Terminal Chat
//!
//! `mygpt` is a terminal client for a local Ollama server. It sends prompts,
//! shows a spinner while the model works, and can benchmark a model's
//! generation speed across repeated requests.
//!
//! ## Quick Start
//!
//! ```bash
//! # Chat with the default model
//! mygpt
//!
//! # Pick a model and spinner style
//! mygpt --model qwen2.5:7b --style braille
//!
//! # Benchmark without entering the chat
//! mygpt bench --iterations 10
//! ```
//!
//! ## Chat commands
//!
//! - `exit` - quit
//! - `models` - list installed models
//! - `setmodel <name>` - switch model
//! - `testmodel` - run a speed test and save `ollama_speed_test.svg`
//!
//! ## Configuration
//!
//! Settings are read from `~/.config/mygpt/config.toml`:
//!
//! ```toml
//! [mygpt]
//! model = "llama3.2:1b"
//! style = "dots"
//! endpoint = "http://localhost:11434"
//!
//! [benchmark]
//! prompt = "Tell me about the world"
//! iterations = 5
//! output = "ollama_speed_test.svg"
//! ```

/// Speed benchmark: measurement, statistics and charts.
pub mod bench;

/// Interactive chat mode.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Model server access.
pub mod client;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Tracing subscriber setup.
pub mod logging;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, glyph styles, colors).
pub mod ui;
