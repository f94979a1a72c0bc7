use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info, warn};

use super::command::{Command, CommandCompleter, Input, parse_input};
use super::ui;
use crate::bench::{BenchmarkEngine, BenchmarkSummary};
use crate::client::ModelClient;
use crate::config::{BenchmarkSettings, ResolvedConfig};
use crate::ui::{GlyphStyle, Spinner, is_prompt_cancelled};

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The model prompts are sent to. Changed by `setmodel`.
    pub model: String,
    /// Spinner glyph style.
    pub style: GlyphStyle,
    /// Parameters for `testmodel`.
    pub benchmark: BenchmarkSettings,
}

impl From<ResolvedConfig> for SessionConfig {
    fn from(resolved: ResolvedConfig) -> Self {
        Self {
            model: resolved.model,
            style: resolved.style,
            benchmark: resolved.benchmark,
        }
    }
}

/// What the loop does after handling one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An interactive chat session.
///
/// Each prompt is sent on its own; the session keeps no conversation history.
pub struct ChatSession<C: ModelClient> {
    config: SessionConfig,
    client: C,
    show_progress: bool,
    interrupted: Option<Arc<AtomicBool>>,
}

impl<C: ModelClient> ChatSession<C> {
    /// Creates a new chat session with the given configuration.
    pub const fn new(config: SessionConfig, client: C) -> Self {
        Self {
            config,
            client,
            show_progress: true,
            interrupted: None,
        }
    }

    /// Keeps spinners off the terminal.
    #[must_use]
    pub const fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Registers a flag set by a Ctrl+C handler while a request is in flight.
    #[must_use]
    pub fn with_interrupt_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupted = Some(flag);
        self
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config.model);

        let prompt_style = Styled::new("🙂 You:")
            .with_fg(Color::LightGreen)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(CommandCompleter)
                .with_help_message("Type a prompt, 'help' for commands, 'exit' to quit")
                .prompt();

            match input {
                Ok(line) => {
                    if self.dispatch(parse_input(&line)).await == Flow::Exit {
                        break;
                    }
                }
                Err(e) if is_prompt_cancelled(&e) => {
                    debug!("prompt interrupted");
                    ui::print_interrupted();
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    /// Handles one classified line of input.
    pub async fn dispatch(&mut self, input: Input) -> Flow {
        match input {
            Input::Empty => {}
            Input::Command(Command::Exit) => return Flow::Exit,
            Input::Command(Command::Help) => ui::print_help(),
            Input::Command(Command::Models) => self.list_models().await,
            Input::Command(Command::SetModel(name)) => self.set_model(name),
            Input::Command(Command::TestModel) => {
                self.test_model().await;
            }
            Input::Prompt(text) => self.ask(&text).await,
        }

        self.report_interrupt();
        Flow::Continue
    }

    fn set_model(&mut self, name: Option<String>) {
        match name {
            None => ui::print_error("Usage: setmodel <model_name>"),
            Some(model) => {
                info!(from = %self.config.model, to = %model, "model changed");
                ui::print_model_changed(&model);
                self.config.model = model;
            }
        }
    }

    async fn list_models(&self) {
        match self.client.list_models().await {
            Ok(listing) => ui::print_models(&listing),
            Err(e) => {
                warn!(error = %format!("{e:#}"), "model listing failed");
                ui::print_error(&format!("Unable to list Ollama models: {e:#}"));
            }
        }
    }

    async fn test_model(&self) -> BenchmarkSummary {
        ui::print_testmodel(&self.config.model);

        let settings = &self.config.benchmark;
        let mut engine =
            BenchmarkEngine::new(&self.client).with_chart_path(Some(settings.chart_path.clone()));
        if !self.show_progress {
            engine = engine.without_progress();
        }

        engine
            .run(
                &self.config.model,
                &settings.prompt,
                settings.iterations,
                self.config.style,
            )
            .await
    }

    async fn ask(&self, prompt: &str) {
        let spinner = if self.show_progress {
            Spinner::new("Thinking...", self.config.style)
        } else {
            Spinner::hidden("Thinking...", self.config.style)
        };

        debug!(model = %self.config.model, "forwarding prompt");
        match self.client.chat(&self.config.model, prompt).await {
            Ok(reply) => spinner.stop(Some(&ui::reply_line(&reply))),
            Err(e) => {
                warn!(model = %self.config.model, error = %format!("{e:#}"), "chat request failed");
                spinner.stop(Some(&ui::request_error_line(&e)));
            }
        }
    }

    fn report_interrupt(&self) {
        if let Some(flag) = &self.interrupted
            && flag.swap(false, Ordering::Relaxed)
        {
            ui::print_interrupted();
        }
    }
}
