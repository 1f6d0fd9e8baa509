// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording notification lifecycle activity.
//!
//! The notification manager reports every queue transition through a
//! [`DiagnosticsHandle`]. Events land in a memory-bounded circular buffer
//! owned by the [`DiagnosticsCollector`] and can be exported as a JSON
//! report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event, see [`DiagnosticEventKind`]
//! - [`BufferCapacity`]: Newtype for validated buffer capacity bounds

mod buffer;
mod collector;
mod events;
mod export;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{DiagnosticEvent, DiagnosticEventKind, DismissReason, LifecycleEvent};
pub use export::{default_export_directory, generate_default_filename, write_atomic, ExportError};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};
