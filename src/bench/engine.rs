use std::path::PathBuf;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{info, warn};

use super::{BenchmarkSummary, IterationResult, chart, report};
use crate::client::{ModelClient, count_tokens};
use crate::ui::{GlyphStyle, Spinner, Style};

pub const DEFAULT_PROMPT: &str = "Tell me about the world";
pub const DEFAULT_ITERATIONS: usize = 5;

/// Pause between consecutive requests.
pub const ITERATION_DELAY: Duration = Duration::from_millis(500);

/// Runs speed benchmarks against a [`ModelClient`].
pub struct BenchmarkEngine<'a, C: ModelClient + ?Sized> {
    client: &'a C,
    delay: Duration,
    chart_path: Option<PathBuf>,
    show_progress: bool,
}

impl<'a, C: ModelClient + ?Sized> BenchmarkEngine<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self {
            client,
            delay: ITERATION_DELAY,
            chart_path: Some(PathBuf::from(chart::DEFAULT_CHART_PATH)),
            show_progress: true,
        }
    }

    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Where to write the chart; `None` skips it.
    #[must_use]
    pub fn with_chart_path(mut self, path: Option<PathBuf>) -> Self {
        self.chart_path = path;
        self
    }

    /// Keeps spinners off the terminal. Result lines are still printed.
    #[must_use]
    pub const fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Sends `prompt` to `model` up to `iterations` times.
    ///
    /// Stops at the first failed request. Prints a summary and, when at least
    /// one iteration completed, writes the chart.
    pub async fn run(
        &self,
        model: &str,
        prompt: &str,
        iterations: usize,
        style: GlyphStyle,
    ) -> BenchmarkSummary {
        report::print_header(model, prompt, iterations, style);
        info!(model, iterations, "benchmark started");

        let mut results = Vec::new();
        let mut error = None;

        for i in 1..=iterations {
            let spinner = self.spinner(&format!("Iteration {i}/{iterations} - Generating"), style);

            let start = Instant::now();
            match self.client.chat(model, prompt).await {
                Ok(text) => {
                    let result = IterationResult::new(i, count_tokens(&text), start.elapsed());
                    spinner.stop(Some(&Style::success(format!(
                        "✅ Iteration {i}: {} tokens in {:.2} sec ({:.2} tokens/sec)",
                        result.tokens(),
                        result.elapsed_secs(),
                        result.tokens_per_second()
                    ))));
                    info!(
                        iteration = i,
                        tokens = result.tokens(),
                        elapsed_secs = result.elapsed_secs(),
                        "iteration completed"
                    );
                    results.push(result);
                }
                Err(err) => {
                    spinner.stop(Some(&Style::error(format!(
                        "❌ Error in iteration {i}: {err:#}"
                    ))));
                    warn!(iteration = i, error = %format!("{err:#}"), "benchmark aborted");
                    error = Some(format!("{err:#}"));
                    break;
                }
            }

            if i < iterations {
                tokio::time::sleep(self.delay).await;
            }
        }

        let summary = BenchmarkSummary::new(model, iterations, results, error);
        report::print_summary(&summary);

        if let Some(path) = &self.chart_path
            && !summary.results().is_empty()
        {
            match chart::write_chart(&summary, path) {
                Ok(()) => report::print_chart_saved(path),
                Err(err) => {
                    warn!(path = %path.display(), error = %format!("{err:#}"), "chart not written");
                    eprintln!(
                        "{} Could not write chart: {err:#}",
                        Style::warning("Warning:")
                    );
                }
            }
        }

        summary
    }

    fn spinner(&self, message: &str, style: GlyphStyle) -> Spinner {
        if self.show_progress {
            Spinner::new(message, style)
        } else {
            Spinner::hidden(message, style)
        }
    }
}
