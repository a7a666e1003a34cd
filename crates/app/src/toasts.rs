//! Transient user notifications.

use std::time::Duration;

use jiff::Timestamp;
use parking_lot::Mutex;
use tracing::{info, warn};

/// Time-to-live for success and info toasts.
pub const DEFAULT_TTL: Duration = Duration::from_millis(3200);

/// Time-to-live for error toasts.
pub const ERROR_TTL: Duration = Duration::from_millis(4000);

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// An action completed.
    Success,

    /// An action failed.
    Error,

    /// Neutral information.
    Info,
}

impl ToastKind {
    /// Lowercase label for display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    const fn default_ttl(self) -> Duration {
        match self {
            Self::Error => ERROR_TTL,
            Self::Success | Self::Info => DEFAULT_TTL,
        }
    }
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Identifier, increasing from 1.
    pub id: u64,

    /// Severity.
    pub kind: ToastKind,

    /// Message text.
    pub message: String,

    /// When the toast disappears; `None` keeps it until dismissed.
    pub expires_at: Option<Timestamp>,
}

#[derive(Debug)]
struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

/// Notification queue shared by the views.
#[derive(Debug)]
pub struct Toasts {
    queue: Mutex<ToastQueue>,
}

impl Default for Toasts {
    fn default() -> Self {
        Self {
            queue: Mutex::new(ToastQueue {
                next_id: 1,
                toasts: Vec::new(),
            }),
        }
    }
}

impl Toasts {
    /// Show a toast now. A `ttl` of zero keeps it until dismissed; `None` uses the kind's default.
    pub fn show(&self, message: impl Into<String>, kind: ToastKind, ttl: Option<Duration>) -> u64 {
        self.show_at(Timestamp::now(), message, kind, ttl)
    }

    /// Show a toast as of `now`.
    pub fn show_at(
        &self,
        now: Timestamp,
        message: impl Into<String>,
        kind: ToastKind,
        ttl: Option<Duration>,
    ) -> u64 {
        let message = message.into();
        let ttl = ttl.unwrap_or(kind.default_ttl());

        let expires_at = if ttl.is_zero() {
            None
        } else {
            now.checked_add(ttl).ok()
        };

        match kind {
            ToastKind::Error => warn!(message = %message, "toast"),
            ToastKind::Success | ToastKind::Info => info!(message = %message, "toast"),
        }

        let mut queue = self.queue.lock();
        let id = queue.next_id;
        queue.next_id += 1;

        queue.toasts.push(Toast {
            id,
            kind,
            message,
            expires_at,
        });

        id
    }

    /// Show a success toast with the default lifetime.
    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Success, None)
    }

    /// Show an error toast with the default lifetime.
    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Error, None)
    }

    /// Show an info toast with the default lifetime.
    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Info, None)
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&self, id: u64) {
        self.queue.lock().toasts.retain(|toast| toast.id != id);
    }

    /// Drop expired toasts and return the rest, oldest first.
    pub fn active(&self, now: Timestamp) -> Vec<Toast> {
        let mut queue = self.queue.lock();

        queue
            .toasts
            .retain(|toast| toast.expires_at.is_none_or(|expires_at| expires_at > now));

        queue.toasts.clone()
    }

    /// Remove and return every toast regardless of expiry.
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut self.queue.lock().toasts)
    }
}
