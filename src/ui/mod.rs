//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting for batch installs
//! - Interactive progress bars using indicatif
//! - Row and status-line formatting (see [`formatter`])
//!
//! Batch progress goes through the ProgressReporter trait; the batch
//! orchestrator's per-item callback is adapted onto it with [`observe`].

pub mod formatter;

use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::InstallOutcome;
use formatter::{MessageLevel, format_message, format_progress_message, styles};

/// Progress reporter trait for batch installs
pub trait ProgressReporter {
    /// Called once per processed item, in processing order
    fn item_done(&mut self, outcome: &InstallOutcome);

    /// Batch completed
    fn finish(&mut self);
}

/// Adapt a reporter to the batch orchestrator's progress callback
pub fn observe<R: ProgressReporter + ?Sized>(reporter: &mut R) -> impl FnMut(&InstallOutcome) + '_ {
    move |outcome| reporter.item_done(outcome)
}

/// Interactive progress reporter with a visual progress bar
///
/// Failures are printed above the bar as they happen.
pub struct InteractiveProgressReporter {
    bar: ProgressBar,
    total: usize,
    done: usize,
}

impl InteractiveProgressReporter {
    pub fn new(total: usize) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let bar = ProgressBar::new(total as u64);
        bar.set_style(style);
        bar.set_message(format_progress_message("Installing", 0, total));

        Self {
            bar,
            total,
            done: 0,
        }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn item_done(&mut self, outcome: &InstallOutcome) {
        self.done += 1;
        if !outcome.success {
            let line = format_message(MessageLevel::Error, &outcome.detail());
            self.bar
                .println(styles::level(MessageLevel::Error, line).to_string());
        }
        self.bar
            .set_message(format_progress_message("Installing", self.done, self.total));
        self.bar.inc(1);
    }

    fn finish(&mut self) {
        self.bar.finish_and_clear();
    }
}

/// Line-per-item reporter for non-interactive output
#[derive(Default)]
pub struct LineProgressReporter;

impl ProgressReporter for LineProgressReporter {
    fn item_done(&mut self, outcome: &InstallOutcome) {
        let level = if outcome.success {
            MessageLevel::Success
        } else {
            MessageLevel::Error
        };
        println!(
            "{}",
            styles::level(level, format_message(level, &outcome.detail()))
        );
    }

    fn finish(&mut self) {}
}
