use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;

/// Progress tracker for displaying progress during scanning
#[derive(Debug, Default)]
pub struct ProgressTracker {}

impl ProgressTracker {
    /// Create a new progress tracker
    pub fn new() -> Self {
        Self {}
    }

    /// Run an operation over each item in order, with a progress bar once
    /// the item count is large enough for one to be useful. The first
    /// failed operation aborts the loop.
    pub fn track_progress<T, R, F>(&self, items: &[T], mut operation: F) -> Result<Vec<R>>
    where
        F: FnMut(&T) -> Result<R>,
    {
        let progress_bar = if items.len() > 10 {
            let pb = ProgressBar::new(items.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut results = Vec::with_capacity(items.len());
        for item in items {
            results.push(operation(item)?);
            if let Some(pb) = &progress_bar {
                pb.inc(1);
            }
        }

        if let Some(pb) = &progress_bar {
            pb.finish_with_message("Processing complete");
        }

        Ok(results)
    }
}
