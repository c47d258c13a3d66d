//! A token used to stop consuming a streamed answer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable, thread-safe cancellation flag.
///
/// Cancelling never touches the inference provider: the consumer checks the
/// token between chunks and simply stops reading.
///
/// # Examples
///
/// ```
/// use aidigest::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handler_side = token.clone();
/// assert!(!token.is_cancelled());
///
/// handler_side.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token in the non-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks this token and all of its clones as cancelled.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once `cancel()` was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }
}
