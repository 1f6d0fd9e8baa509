// SPDX-License-Identifier: MPL-2.0
//! Serializable diagnostic report.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::events::{DiagnosticEventKind, LifecycleEvent};

/// Report header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// Unique identifier for this report (UUID v4)
    pub report_id: String,
    /// When the report was generated (ISO 8601)
    pub generated_at: String,
    pub toastkit_version: String,
    /// When diagnostic collection started (ISO 8601)
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            report_id: Uuid::new_v4().to_string(),
            generated_at: Utc::now().to_rfc3339(),
            toastkit_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// A diagnostic event with its timestamp made relative to collection start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    /// Events stamped before `collection_start` are reported at 0 ms.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let timestamp_ms = event_timestamp
            .saturating_duration_since(collection_start)
            .as_millis() as u64;

        Self { timestamp_ms, kind }
    }
}

/// Per-kind event counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportSummary {
    pub created: usize,
    pub updated: usize,
    pub dismissed: usize,
    pub removed: usize,
    pub evicted: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        let mut summary = Self::default();
        for event in events {
            match &event.kind {
                DiagnosticEventKind::Lifecycle { event } => match event {
                    LifecycleEvent::Created { .. } => summary.created += 1,
                    LifecycleEvent::Updated { .. } => summary.updated += 1,
                    LifecycleEvent::Dismissed { .. } => summary.dismissed += 1,
                    LifecycleEvent::Removed { .. } => summary.removed += 1,
                    LifecycleEvent::Evicted { .. } => summary.evicted += 1,
                    LifecycleEvent::Cleared { count } => summary.removed += count,
                },
                DiagnosticEventKind::Warning { .. } => summary.warnings += 1,
                DiagnosticEventKind::Error { .. } => summary.errors += 1,
            }
        }
        summary
    }
}

/// Complete exported report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            summary,
            events,
        }
    }
}
