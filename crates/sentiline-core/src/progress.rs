//! Progress reporting for TTY and non-TTY environments.
//!
//! TTY mode: indicatif bars keyed by record counts. Non-TTY mode: hidden
//! bars, logging is the only progress indicator.

use std::io::IsTerminal;

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

fn count_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{prefix:<18.dim} {bar:30.green/dim} {pos:>8}/{len:8} {wide_msg:.dim}")
        .expect("invalid template")
        .progress_chars("--")
}

/// Central progress context managing multi-progress bars.
pub struct ProgressContext {
    multi: MultiProgress,
    is_tty: bool,
}

impl ProgressContext {
    /// Create new context, detecting TTY automatically.
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            is_tty: std::io::stderr().is_terminal(),
        }
    }

    pub fn is_tty(&self) -> bool {
        self.is_tty
    }

    pub fn multi(&self) -> &MultiProgress {
        &self.multi
    }

    /// Per-stage record-count bar. Hidden (no-op) when stderr is not a TTY.
    pub fn count_bar(&self, prefix: &str, total: u64) -> ProgressBar {
        if !self.is_tty {
            return ProgressBar::hidden();
        }
        let pb = self.multi.add(ProgressBar::new(total));
        pb.set_style(count_style());
        pb.set_prefix(prefix.to_string());
        pb
    }
}

impl Default for ProgressContext {
    fn default() -> Self {
        Self::new()
    }
}
