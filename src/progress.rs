//! Progress display for version resolution
//!
//! The resolution loop reports through the [`ProgressSink`] trait; the
//! console implementation renders an indicatif bar on stderr.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Sink for per-item resolution progress
///
/// `fetching(completed, total)` is called once per item, before that
/// item's fetch begins.
pub trait ProgressSink: Send + Sync {
    /// An item is about to be fetched
    fn fetching(&self, completed: usize, total: usize);

    /// All items are done (or the run was cancelled)
    fn finished(&self);
}

/// Console progress bar
pub struct ConsoleProgress {
    bar: ProgressBar,
}

impl ConsoleProgress {
    /// Create an enabled console progress bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
                .expect("Invalid template")
                .progress_chars("█▓▒░"),
        );
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Create a progress sink that renders nothing
    pub fn disabled() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ConsoleProgress {
    fn fetching(&self, completed: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(completed.saturating_sub(1) as u64);
        self.bar
            .set_message(format!("Getting latest versions ({}/{})", completed, total));
    }

    fn finished(&self) {
        self.bar.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_progress_is_inert() {
        let progress = ConsoleProgress::disabled();
        progress.fetching(1, 3);
        progress.fetching(2, 3);
        progress.finished();
    }

    #[test]
    fn test_enabled_progress() {
        let progress = ConsoleProgress::new();
        progress.fetching(1, 2);
        progress.fetching(2, 2);
        progress.finished();
    }
}
