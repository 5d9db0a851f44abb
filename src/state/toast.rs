//! Transient status messages shown after each menu action.

use std::time::{Duration, Instant};

/// Severity of a toast, drives its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

/// A message that disappears after a fixed lifetime.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub toast_type: ToastType,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType, lifetime: Duration) -> Self {
        Self {
            message: message.into(),
            toast_type,
            expires_at: Instant::now() + lifetime,
        }
    }

    /// Whether the toast should be dropped at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
