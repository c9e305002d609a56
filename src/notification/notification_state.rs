//! Notification data types
//!
//! A `Notification` is created and owned by the `NotificationQueue`; callers
//! only describe what they want shown through `NotificationFields`.

use std::fmt;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Notification severity - determines default title, duration and style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    /// Persists until updated or removed
    Loading,
}

impl NotificationKind {
    pub fn default_title(self) -> &'static str {
        match self {
            NotificationKind::Success => "Success",
            NotificationKind::Error => "Error",
            NotificationKind::Warning => "Warning",
            NotificationKind::Info => "Info",
            NotificationKind::Loading => "Loading",
        }
    }

    /// Default auto-expiry in milliseconds; `None` means the notification stays
    pub fn default_duration_ms(self) -> Option<u64> {
        match self {
            NotificationKind::Success => Some(5000),
            NotificationKind::Error => Some(8000),
            NotificationKind::Warning => Some(6000),
            NotificationKind::Info => Some(5000),
            NotificationKind::Loading => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
            NotificationKind::Warning => "!",
            NotificationKind::Info => "i",
            NotificationKind::Loading => "…",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
            NotificationKind::Warning => write!(f, "warning"),
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Loading => write!(f, "loading"),
        }
    }
}

/// Labeled action attached to a notification. The queue stores it and never runs it;
/// the host decides what `intent` means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationAction {
    pub label: String,
    pub intent: String,
}

impl NotificationAction {
    pub fn new(label: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            intent: intent.into(),
        }
    }
}

/// A queued notification
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Auto-expiry in milliseconds; `None` = never
    pub duration: Option<u64>,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<NotificationAction>,
    /// Monotonic deadline used by `sweep_expired`
    #[serde(skip)]
    pub(super) expires_at: Option<Instant>,
}

impl Notification {
    /// Check if notification has expired
    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) => now >= deadline,
            None => false,
        }
    }
}

/// Fields supplied by the caller when adding a notification
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationFields {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub duration: Option<u64>,
    pub action: Option<NotificationAction>,
}

impl NotificationFields {
    /// Fields with the kind's default title and duration
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.default_title().to_string(),
            message: message.into(),
            duration: kind.default_duration_ms(),
            action: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_duration(mut self, duration: Option<u64>) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_action(mut self, action: NotificationAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Apply caller overrides on top of these fields
    pub fn with_options(mut self, options: NotificationOptions) -> Self {
        if let Some(title) = options.title {
            self.title = title;
        }
        if let Some(duration) = options.duration {
            self.duration = duration;
        }
        if let Some(action) = options.action {
            self.action = Some(action);
        }
        self
    }
}

/// Overrides for the convenience constructors (`success`, `error`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationOptions {
    pub title: Option<String>,
    /// `Some(None)` disables auto-expiry
    pub duration: Option<Option<u64>>,
    pub action: Option<NotificationAction>,
}

impl NotificationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn duration_ms(mut self, duration: u64) -> Self {
        self.duration = Some(Some(duration));
        self
    }

    pub fn persistent(mut self) -> Self {
        self.duration = Some(None);
        self
    }

    pub fn action(mut self, action: NotificationAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Partial update merged over an existing notification
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationPatch {
    pub kind: Option<NotificationKind>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub duration: Option<Option<u64>>,
    pub read: Option<bool>,
    pub action: Option<Option<NotificationAction>>,
}

impl NotificationPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn duration(mut self, duration: Option<u64>) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = Some(read);
        self
    }

    pub fn action(mut self, action: Option<NotificationAction>) -> Self {
        self.action = Some(action);
        self
    }

    pub(super) fn apply(self, notification: &mut Notification) {
        if let Some(kind) = self.kind {
            notification.kind = kind;
        }
        if let Some(title) = self.title {
            notification.title = title;
        }
        if let Some(message) = self.message {
            notification.message = message;
        }
        if let Some(duration) = self.duration {
            notification.duration = duration;
        }
        if let Some(read) = self.read {
            notification.read = read;
        }
        if let Some(action) = self.action {
            notification.action = action;
        }
    }
}
