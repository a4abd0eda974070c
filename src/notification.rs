//! Transient notifications
//!
//! A single slot holds at most one notification. Showing a new one replaces
//! the current one, which also cancels its pending expiry. Expiry is checked
//! against an explicit instant.

use std::fmt;
use std::time::{Duration, Instant};

/// Default time a notification stays visible
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(3);

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    /// Prefix used when printing
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// A message with a deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        kind: NotificationKind,
        created_at: Instant,
        duration: Duration,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at,
            duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.icon(), self.message)
    }
}

/// Holds the one visible notification, if any
#[derive(Debug, Clone)]
pub struct NotificationSlot {
    current: Option<Notification>,
    duration: Duration,
}

impl Default for NotificationSlot {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_DURATION)
    }
}

impl NotificationSlot {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Show a notification created at `now`, replacing any current one
    pub fn show_at(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.current = Some(Notification::new(message, kind, now, self.duration));
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.show_at(message, kind, Instant::now());
    }

    /// The notification still visible at `now`; clears it once expired
    pub fn active_at(&mut self, now: Instant) -> Option<&Notification> {
        if self.current.as_ref().is_some_and(|n| n.is_expired_at(now)) {
            self.current = None;
        }
        self.current.as_ref()
    }

    /// The latest notification regardless of expiry
    pub fn latest(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Take the current notification out of the slot
    pub fn take(&mut self) -> Option<Notification> {
        self.current.take()
    }
}
