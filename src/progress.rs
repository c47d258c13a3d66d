// src/progress.rs

//! Progress reporting for the aggregation walk.
#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress updates from [`aggregate_with_progress`](crate::aggregate_with_progress).
///
/// The aggregator sets the length to the number of discovered files, then
/// advances the position once per file.
///
/// # Examples
///
/// ```
/// use aidigest::progress::ProgressReporter;
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// #[derive(Default)]
/// struct Counter {
///     position: AtomicU64,
/// }
/// impl ProgressReporter for Counter {
///     fn set_length(&self, _len: u64) {}
///     fn set_position(&self, pos: u64) {
///         self.position.store(pos, Ordering::Relaxed);
///     }
///     fn set_message(&self, _msg: String) {}
///     fn finish(&self) {}
///     fn finish_with_message(&self, _msg: String) {}
/// }
///
/// let counter = Counter::default();
/// counter.set_position(3);
/// assert_eq!(counter.position.load(Ordering::Relaxed), 3);
/// ```
pub trait ProgressReporter: Send + Sync {
    /// Sets the total number of files to process.
    fn set_length(&self, len: u64);
    /// Sets the number of files processed so far.
    fn set_position(&self, pos: u64);
    /// Sets the label shown next to the bar.
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting.
    fn finish(&self);
    /// Finishes with a final message.
    fn finish_with_message(&self, msg: String);
}

/// A `ProgressReporter` that does nothing; used when no reporter is supplied.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self) {}
    fn finish_with_message(&self, _msg: String) {}
}

/// A terminal progress bar on stderr, backed by `indicatif`.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    const TEMPLATE: &'static str =
        "{spinner:.green} {msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}";

    /// Creates a hidden-until-used bar with the aggregation style.
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        match ProgressStyle::default_bar().template(Self::TEMPLATE) {
            Ok(style) => bar.set_style(style.progress_chars("#>-")),
            Err(e) => log::debug!("Falling back to the default progress style: {}", e),
        }
        Self { bar }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }

    fn finish_with_message(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}
