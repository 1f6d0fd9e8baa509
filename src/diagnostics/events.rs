// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for notification activity.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::notifications::{NotificationId, Variant};

/// Why a notification left the visible state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DismissReason {
    /// `dismiss(id)` was called.
    Manual,
    /// The auto-dismiss timer fired.
    Auto,
    /// Part of a `dismiss_all()`.
    Bulk,
}

/// One step in a notification's lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LifecycleEvent {
    Created {
        id: u64,
        variant: String,
        duration_ms: u64,
    },
    Updated {
        id: u64,
    },
    Dismissed {
        id: u64,
        reason: DismissReason,
    },
    /// Removed after the grace delay.
    Removed {
        id: u64,
    },
    /// Dropped from the tail because the queue was full.
    Evicted {
        id: u64,
    },
    Cleared {
        count: usize,
    },
}

impl LifecycleEvent {
    #[must_use]
    pub fn created(id: NotificationId, variant: Variant, duration: std::time::Duration) -> Self {
        Self::Created {
            id: id.value(),
            variant: variant.as_str().to_string(),
            duration_ms: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
        }
    }

    /// Returns the notification id this event concerns, if it concerns a single one.
    #[must_use]
    pub fn notification_id(&self) -> Option<u64> {
        match self {
            Self::Created { id, .. }
            | Self::Updated { id }
            | Self::Dismissed { id, .. }
            | Self::Removed { id }
            | Self::Evicted { id } => Some(*id),
            Self::Cleared { .. } => None,
        }
    }
}

/// A captured diagnostic event.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A queue transition.
    Lifecycle { event: LifecycleEvent },
    /// A warning toast was shown.
    Warning { message: String },
    /// A destructive toast was shown.
    Error { message: String },
}
