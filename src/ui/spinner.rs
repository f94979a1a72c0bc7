use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

use super::GlyphStyle;

/// Redraw cadence of the spinner.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// A terminal spinner for indicating progress while a blocking call runs.
///
/// Rendering happens on indicatif's steady-tick thread. [`Spinner::stop`]
/// consumes the spinner, so it can be stopped at most once, and it joins the
/// tick thread before returning. Automatically clears itself when dropped.
pub struct Spinner {
    progress_bar: ProgressBar,
}

impl Spinner {
    /// Creates and starts a new spinner drawing to stderr.
    pub fn new(message: &str, style: GlyphStyle) -> Self {
        Self::start(ProgressBar::new_spinner(), message, style)
    }

    /// Creates a spinner that ticks but never draws.
    pub fn hidden(message: &str, style: GlyphStyle) -> Self {
        Self::start(
            ProgressBar::with_draw_target(None, ProgressDrawTarget::hidden()),
            message,
            style,
        )
    }

    #[allow(clippy::unwrap_used)]
    fn start(progress_bar: ProgressBar, message: &str, style: GlyphStyle) -> Self {
        // indicatif shows the last tick string once finished
        let mut ticks: Vec<&str> = style.glyphs().to_vec();
        ticks.push(" ");

        // unwrap is safe: template string is a compile-time constant
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .tick_strings(&ticks)
                .template("{msg:.yellow} {spinner}")
                .unwrap(),
        );
        progress_bar.set_message(message.to_string());
        progress_bar.enable_steady_tick(TICK_INTERVAL);

        Self { progress_bar }
    }

    /// Returns `true` until the spinner has been stopped.
    pub fn is_active(&self) -> bool {
        !self.progress_bar.is_finished()
    }

    /// Stops the spinner, clears its line and prints `final_message` if given.
    pub fn stop(self, final_message: Option<&str>) {
        self.halt();
        if let Some(message) = final_message {
            println!("{message}");
        }
    }

    fn halt(&self) {
        // Joins the tick thread, so nothing renders after this returns.
        self.progress_bar.disable_steady_tick();
        self.progress_bar.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.halt();
    }
}
