//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Progress reporter for sentence extraction
///
/// The corpus size is unknown up front, so a spinner counts emitted
/// sentences instead of a bar tracking files.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
        }
    }

    /// Start the spinner for the given corpus
    pub fn start(&mut self, corpus: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .template("{spinner} [{elapsed_precise}] {pos} sentences {msg}")
        {
            pb.set_style(style);
        }
        pb.set_message(format!("from {corpus}"));
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record one emitted sentence
    pub fn sentence_emitted(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    /// Finish progress reporting
    pub fn finish(&self, sentences: usize, placeholders: usize) {
        if let Some(pb) = &self.progress_bar {
            if placeholders > 0 {
                pb.finish_with_message(format!(
                    "Complete: {sentences} sentences, {placeholders} unreadable documents"
                ));
            } else {
                pb.finish_with_message(format!("Complete: {sentences} sentences"));
            }
        }
    }
}
