//! Repeated-sampling speed benchmark.
//!
//! A benchmark sends the same prompt to a model a fixed number of times,
//! measuring wall-clock latency and an approximate token count for each
//! reply. The first failed request ends the run; statistics are computed
//! over the iterations that completed before it.

mod chart;
mod engine;
mod report;

use std::time::Duration;
use thiserror::Error;

pub use chart::{DEFAULT_CHART_PATH, render_svg, write_chart};
pub use engine::{BenchmarkEngine, DEFAULT_ITERATIONS, DEFAULT_PROMPT, ITERATION_DELAY};
pub use report::summary_text;

/// Smallest elapsed time an iteration may record.
const MIN_ELAPSED: Duration = Duration::from_nanos(1);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BenchmarkError {
    #[error("no successful iterations")]
    NoSuccessfulIterations,
}

/// Measurements from one completed benchmark request.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationResult {
    iteration: usize,
    tokens: usize,
    elapsed: Duration,
    tokens_per_second: f64,
}

impl IterationResult {
    /// Records an iteration. A zero `elapsed` is clamped to 1ns.
    pub fn new(iteration: usize, tokens: usize, elapsed: Duration) -> Self {
        let elapsed = elapsed.max(MIN_ELAPSED);
        Self {
            iteration,
            tokens,
            elapsed,
            tokens_per_second: tokens as f64 / elapsed.as_secs_f64(),
        }
    }

    /// 1-based position of this iteration in the run.
    pub const fn iteration(&self) -> usize {
        self.iteration
    }

    pub const fn tokens(&self) -> usize {
        self.tokens
    }

    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub const fn tokens_per_second(&self) -> f64 {
        self.tokens_per_second
    }
}

/// Outcome of a benchmark run.
#[derive(Debug, Clone)]
pub struct BenchmarkSummary {
    model: String,
    requested_iterations: usize,
    results: Vec<IterationResult>,
    error: Option<String>,
}

impl BenchmarkSummary {
    pub fn new(
        model: impl Into<String>,
        requested_iterations: usize,
        results: Vec<IterationResult>,
        error: Option<String>,
    ) -> Self {
        Self {
            model: model.into(),
            requested_iterations,
            results,
            error,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub const fn requested_iterations(&self) -> usize {
        self.requested_iterations
    }

    /// Completed iterations, in the order they ran.
    pub fn results(&self) -> &[IterationResult] {
        &self.results
    }

    /// The error that aborted the run, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `true` when every requested iteration completed.
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.results.len() == self.requested_iterations
    }

    /// Mean of the per-iteration rates over completed iterations.
    pub fn average_tokens_per_second(&self) -> Result<f64, BenchmarkError> {
        if self.results.is_empty() {
            return Err(BenchmarkError::NoSuccessfulIterations);
        }
        let total: f64 = self.results.iter().map(IterationResult::tokens_per_second).sum();
        Ok(total / self.results.len() as f64)
    }

    pub fn min_tokens_per_second(&self) -> Option<f64> {
        self.rates().reduce(f64::min)
    }

    pub fn max_tokens_per_second(&self) -> Option<f64> {
        self.rates().reduce(f64::max)
    }

    pub fn average_elapsed_secs(&self) -> Result<f64, BenchmarkError> {
        if self.results.is_empty() {
            return Err(BenchmarkError::NoSuccessfulIterations);
        }
        let total: f64 = self.results.iter().map(IterationResult::elapsed_secs).sum();
        Ok(total / self.results.len() as f64)
    }

    pub fn total_tokens(&self) -> usize {
        self.results.iter().map(IterationResult::tokens).sum()
    }

    fn rates(&self) -> impl Iterator<Item = f64> + '_ {
        self.results.iter().map(IterationResult::tokens_per_second)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn summary_with(results: Vec<IterationResult>, error: Option<&str>) -> BenchmarkSummary {
        BenchmarkSummary::new("llama3.2:1b", 5, results, error.map(str::to_string))
    }

    #[test]
    fn test_iteration_rate_is_tokens_over_elapsed() {
        let result = IterationResult::new(1, 2, Duration::from_millis(500));
        assert_eq!(result.tokens(), 2);
        assert!((result.elapsed_secs() - 0.5).abs() < f64::EPSILON);
        assert!((result.tokens_per_second() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_elapsed_is_clamped() {
        let result = IterationResult::new(1, 10, Duration::ZERO);
        assert!(result.elapsed() > Duration::ZERO);
        assert!(result.tokens_per_second().is_finite());
    }

    #[test]
    fn test_zero_tokens_gives_zero_rate() {
        let result = IterationResult::new(1, 0, Duration::from_secs(2));
        assert!(result.tokens_per_second().abs() < f64::EPSILON);
    }

    #[test]
    fn test_average_over_completed_iterations() {
        let summary = summary_with(
            vec![
                IterationResult::new(1, 10, Duration::from_secs(1)),
                IterationResult::new(2, 30, Duration::from_secs(1)),
            ],
            Some("connection refused"),
        );

        assert!((summary.average_tokens_per_second().unwrap() - 20.0).abs() < 1e-9);
        assert!((summary.min_tokens_per_second().unwrap() - 10.0).abs() < 1e-9);
        assert!((summary.max_tokens_per_second().unwrap() - 30.0).abs() < 1e-9);
        assert_eq!(summary.total_tokens(), 40);
        assert!(!summary.is_complete());
    }

    #[test]
    fn test_average_is_mean_of_rates_not_ratio_of_totals() {
        let summary = summary_with(
            vec![
                IterationResult::new(1, 10, Duration::from_secs(1)),
                IterationResult::new(2, 10, Duration::from_secs(4)),
            ],
            None,
        );

        // (10 + 2.5) / 2, not 20 / 5
        assert!((summary.average_tokens_per_second().unwrap() - 6.25).abs() < 1e-9);
        assert!((summary.average_elapsed_secs().unwrap() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_summary_reports_no_successful_iterations() {
        let summary = summary_with(vec![], Some("model not found"));

        assert_eq!(
            summary.average_tokens_per_second(),
            Err(BenchmarkError::NoSuccessfulIterations)
        );
        assert_eq!(
            summary.average_elapsed_secs(),
            Err(BenchmarkError::NoSuccessfulIterations)
        );
        assert!(summary.min_tokens_per_second().is_none());
        assert_eq!(summary.total_tokens(), 0);
        assert_eq!(summary.error(), Some("model not found"));
    }

    #[test]
    fn test_complete_summary() {
        let results = (1..=5)
            .map(|i| IterationResult::new(i, 8, Duration::from_secs(2)))
            .collect();
        let summary = summary_with(results, None);
        assert!(summary.is_complete());
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            BenchmarkError::NoSuccessfulIterations.to_string(),
            "no successful iterations"
        );
    }
}
