//! Cooperative cancellation for walks.
//!
//! A [`CancelToken`] combines a shared flag, which any clone can raise, with
//! an optional deadline. The walker polls it before starting and before each
//! path element; a blocking syscall already in flight is never interrupted.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// Shared cancellation signal with an optional deadline.
///
/// # Examples
///
/// ```
/// use lsi::CancelToken;
///
/// let token = CancelToken::new();
/// let handle = token.clone();
/// assert!(token.check().is_ok());
///
/// handle.cancel();
/// assert!(token.check().unwrap_err().is_cancellation());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    canceled: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    /// A token that only fires when [`cancel`](Self::cancel) is called.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that also fires once `timeout` has elapsed from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::new().deadline(Instant::now() + timeout)
    }

    /// Attach a deadline, replacing any earlier one. Clones made before this
    /// call keep their own deadline but still share the cancel flag.
    #[must_use]
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The deadline, if one was set.
    #[must_use]
    pub fn deadline_at(&self) -> Option<Instant> {
        self.deadline
    }

    /// Raise the flag for this token and every clone of it.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::SeqCst);
    }

    /// Whether the token has fired, by flag or by deadline.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        self.check().is_err()
    }

    /// Return the cancellation error if the token has fired.
    ///
    /// An explicit [`cancel`](Self::cancel) wins over an expired deadline.
    ///
    /// # Errors
    ///
    /// [`Error::Canceled`] after `cancel`, [`Error::DeadlineExceeded`] once
    /// the deadline has passed.
    pub fn check(&self) -> Result<()> {
        if self.canceled.load(Ordering::Relaxed) {
            return Err(Error::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(Error::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_fresh_token_is_live() {
        let token = CancelToken::new();
        assert!(token.check().is_ok());
        assert!(!token.is_canceled());
        assert!(token.deadline_at().is_none());
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let token = CancelToken::new();
        let other = token.clone();
        other.cancel();
        assert!(matches!(token.check(), Err(Error::Canceled)));
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let token = CancelToken::new();
        let handle = token.clone();
        thread::spawn(move || handle.cancel()).join().unwrap();
        assert!(token.is_canceled());
    }

    #[test]
    fn test_expired_deadline() {
        let token = CancelToken::new().deadline(Instant::now());
        assert!(matches!(token.check(), Err(Error::DeadlineExceeded)));
    }

    #[test]
    fn test_future_deadline() {
        let token = CancelToken::with_timeout(Duration::from_secs(3600));
        assert!(token.check().is_ok());
    }

    #[test]
    fn test_explicit_cancel_wins_over_deadline() {
        let token = CancelToken::new().deadline(Instant::now());
        token.cancel();
        assert!(matches!(token.check(), Err(Error::Canceled)));
    }
}
