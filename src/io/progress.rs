//! Terminal progress display for resolved cells, attempts and rounds

use crate::algorithm::executor::StuckReason;
use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} cells {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Shows how many cells are resolved in the current attempt
///
/// The bar is reset whenever the grid restarts, and the prefix tracks the
/// attempt and round numbers.
pub struct ProgressManager {
    bar: ProgressBar,
    restarts: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress bar drawing to stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress bar that never draws
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(0),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(PROGRESS_STYLE.clone());
        Self { bar, restarts: 0 }
    }

    /// Size the bar for a grid with `cell_count` cells
    pub fn initialize(&mut self, cell_count: usize) {
        self.restarts = 0;
        self.bar.set_length(cell_count as u64);
        self.bar.set_position(0);
        self.bar.set_message(String::new());
    }

    /// Report resolved cells after a round
    pub fn update_round(&self, attempt: usize, round: usize, resolved: usize) {
        self.bar.set_prefix(format!("attempt {attempt} round {round:>3}"));
        self.bar.set_position(resolved as u64);
    }

    /// Note a restart and rewind the bar to the new seed
    pub fn restart(&mut self, attempt: usize, reason: StuckReason, resolved: usize) {
        self.restarts += 1;
        self.bar.set_prefix(format!("attempt {attempt} round   0"));
        self.bar.set_position(resolved as u64);
        self.bar
            .set_message(format!("({} restarts, last: {reason})", self.restarts));
    }

    /// Number of restarts reported so far
    pub const fn restarts(&self) -> usize {
        self.restarts
    }

    /// Current bar position
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
