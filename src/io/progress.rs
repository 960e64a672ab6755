//! Spinner reporting how many solutions a running search has produced

use crate::io::configuration::SPINNER_TICK;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {prefix}: {pos} found {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Live counter of solutions found during one search
pub struct SearchProgress {
    bar: ProgressBar,
}

impl SearchProgress {
    /// Start a spinner labelled with `label`
    pub fn new(label: &str) -> Self {
        let progress = Self::with_bar(ProgressBar::new_spinner(), label);
        progress.bar.enable_steady_tick(SPINNER_TICK);
        progress
    }

    /// Progress tracker that draws nothing, for quiet runs and tests
    pub fn hidden(label: &str) -> Self {
        Self::with_bar(ProgressBar::hidden(), label)
    }

    fn with_bar(bar: ProgressBar, label: &str) -> Self {
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(label.to_string());
        Self { bar }
    }

    /// Record one more solution
    pub fn found(&self) {
        self.bar.inc(1);
    }

    /// Solutions recorded so far
    pub fn count(&self) -> u64 {
        self.bar.position()
    }

    /// Run `f` with the spinner cleared, so its output does not tear the bar
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Stop the spinner and leave the final count on screen
    pub fn finish(&self) {
        self.bar.finish_with_message("(done)");
    }
}
