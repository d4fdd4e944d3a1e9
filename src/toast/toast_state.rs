//! Toast state management
//!
//! Provides the data types for toast notifications and the live `Toast`
//! that owns its auto-dismiss timer.

use std::fmt;
use std::time::{Duration, Instant};

use super::dismiss_timer::DismissTimer;
use crate::theme;

/// Toast kind - selects icon and colors, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "✗",
            ToastKind::Warning => "!",
            ToastKind::Info => "i",
        }
    }

    pub fn colors(self) -> &'static theme::toast::ToastColors {
        match self {
            ToastKind::Success => &theme::toast::SUCCESS,
            ToastKind::Error => &theme::toast::ERROR,
            ToastKind::Warning => &theme::toast::WARNING,
            ToastKind::Info => &theme::toast::INFO,
        }
    }
}

/// Identifier of a toast, unique within the provider that issued it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Monotonic id source; ids never repeat for the lifetime of the generator
#[derive(Debug, Default)]
pub struct ToastIdGenerator {
    next: u64,
}

impl ToastIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ToastId {
        self.next = self.next.wrapping_add(1);
        ToastId(self.next)
    }
}

/// What callers ask for: everything but the id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastRequest {
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    /// `None` uses the provider's configured default
    pub duration: Option<Duration>,
}

impl ToastRequest {
    pub fn new(kind: ToastKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: None,
            duration: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Warning, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, title)
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keep the toast until the user closes it
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }
}

/// A fully populated toast as stored in the queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: ToastId,
    pub kind: ToastKind,
    pub title: String,
    pub message: Option<String>,
    /// Zero means the toast never auto-dismisses
    pub duration: Duration,
}

impl ToastEntry {
    pub fn from_request(id: ToastId, request: ToastRequest, default_duration: Duration) -> Self {
        Self {
            id,
            kind: request.kind,
            title: request.title,
            message: request.message,
            duration: request.duration.unwrap_or(default_duration),
        }
    }

    pub fn is_persistent(&self) -> bool {
        self.duration.is_zero()
    }
}

/// A mounted toast: its entry plus the timer it exclusively owns
#[derive(Debug, Clone)]
pub struct Toast {
    entry: ToastEntry,
    timer: DismissTimer,
}

impl Toast {
    /// Mounts `entry` and arms its dismiss timer relative to `now`
    pub fn mount(entry: ToastEntry, now: Instant) -> Self {
        let timer = DismissTimer::arm(entry.duration, now);
        Self {
            entry,
            timer,
        }
    }

    pub fn entry(&self) -> &ToastEntry {
        &self.entry
    }

    pub fn id(&self) -> ToastId {
        self.entry.id
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Changes the duration, cancelling the old timer before arming a new one
    pub fn set_duration(&mut self, duration: Duration, now: Instant) {
        self.timer.cancel();
        self.entry.duration = duration;
        self.timer = DismissTimer::arm(duration, now);
    }

    /// Returns the id to close when the timer has expired
    ///
    /// Yields `Some` at most once per armed timer.
    pub fn tick(&mut self, now: Instant) -> Option<ToastId> {
        self.timer.fire(now).then_some(self.entry.id)
    }

    /// Close affordance: cancels the timer and returns the id to remove
    pub fn close(&mut self) -> ToastId {
        self.timer.cancel();
        self.entry.id
    }
}

#[cfg(test)]
#[path = "toast_state_tests.rs"]
mod toast_state_tests;
