// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing lifecycle events.
//!
//! Producers hold a cheap [`DiagnosticsHandle`] and send events over a
//! bounded channel; the owner of the [`DiagnosticsCollector`] drains the
//! channel into a ring buffer and exports it on demand.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use super::events::{DiagnosticEvent, DiagnosticEventKind, LifecycleEvent};
use super::export::{write_atomic, ExportError};
use super::report::{DiagnosticReport, ReportMetadata, SerializableEvent};
use super::{BufferCapacity, CircularBuffer};

/// Default channel capacity for event buffering.
const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Handle for sending diagnostic events to the collector.
///
/// Cloning is cheap and handles can cross threads. Sends never block: when
/// the channel is full the event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a lifecycle transition stamped at `at`.
    pub fn log_lifecycle(&self, event: LifecycleEvent, at: Instant) {
        let event =
            DiagnosticEvent::with_timestamp(DiagnosticEventKind::Lifecycle { event }, at);
        let _ = self.event_tx.try_send(event);
    }

    pub fn log_warning(&self, message: impl Into<String>, at: Instant) {
        let kind = DiagnosticEventKind::Warning {
            message: message.into(),
        };
        let _ = self.event_tx.try_send(DiagnosticEvent::with_timestamp(kind, at));
    }

    pub fn log_error(&self, message: impl Into<String>, at: Instant) {
        let kind = DiagnosticEventKind::Error {
            message: message.into(),
        };
        let _ = self.event_tx.try_send(DiagnosticEvent::with_timestamp(kind, at));
    }

    /// Sends an event, reporting whether the channel accepted it.
    ///
    /// # Errors
    ///
    /// Returns `TrySendError::Full` if the channel buffer is full,
    /// or `TrySendError::Disconnected` if the collector has been dropped.
    pub fn try_log(&self, kind: DiagnosticEventKind) -> Result<(), TrySendError<DiagnosticEvent>> {
        self.event_tx.try_send(DiagnosticEvent::new(kind))
    }
}

/// Central collector for diagnostic events.
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<DiagnosticEvent>,
    collection_started_at: Instant,
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_channel_capacity(capacity, DEFAULT_CHANNEL_CAPACITY)
    }

    /// Creates a collector with an explicit channel size.
    #[must_use]
    pub fn with_channel_capacity(capacity: BufferCapacity, channel_capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(channel_capacity.max(1));

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Returns how many events arrived.
    pub fn process_pending(&mut self) -> usize {
        let mut received = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
            received += 1;
        }
        received
    }

    /// Stores an event directly, bypassing the channel.
    pub fn log(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Stored lifecycle events, oldest first.
    pub fn lifecycle_events(&self) -> impl Iterator<Item = &LifecycleEvent> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::Lifecycle { event } => Some(event),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn collection_duration(&self) -> Duration {
        self.collection_started_at.elapsed()
    }

    /// Exports all collected events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.build_report())
    }

    /// Writes the JSON report to `path` atomically.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Io` if file operations fail.
    /// Returns `ExportError::Serialization` if JSON serialization fails.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = path.as_ref();
        let json = self.export_json()?;
        write_atomic(path, &json)?;
        Ok(path.to_path_buf())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_duration().as_millis() as u64;

        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();

        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );

        DiagnosticReport::new(metadata, events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl std::fmt::Debug for DiagnosticsCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagnosticsCollector")
            .field("len", &self.buffer.len())
            .field("capacity", &self.buffer.capacity())
            .finish_non_exhaustive()
    }
}
