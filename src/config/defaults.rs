// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module is the single source of truth for the numbers the
//! notification core falls back to when `settings.toml` leaves a field out.
//!
//! # Categories
//!
//! - **Queue**: How many notifications are held at once
//! - **Timing**: Auto-dismiss, grace delay and progress ticker periods
//! - **Diagnostics**: Lifecycle event buffer sizing

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of notifications kept in the queue.
pub const DEFAULT_MAX_VISIBLE: usize = 5;

/// Minimum queue size.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum queue size.
pub const MAX_MAX_VISIBLE: usize = 20;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Auto-dismiss delay applied when a toast does not specify one (in ms).
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Upper bound on any auto-dismiss delay (10 minutes, in ms).
///
/// Zero is always allowed and means "never auto-dismiss".
pub const MAX_DURATION_MS: u64 = 600_000;

/// Grace delay between a dismissal and the final removal (in ms).
pub const DEFAULT_REMOVAL_DELAY_MS: u64 = 5000;

/// Upper bound on the grace delay (in ms).
pub const MAX_REMOVAL_DELAY_MS: u64 = 60_000;

/// Default period of the progress ticker (in ms).
pub const DEFAULT_PROGRESS_INTERVAL_MS: u64 = 100;

/// Fastest progress ticker period (in ms).
pub const MIN_PROGRESS_INTERVAL_MS: u64 = 10;

/// Slowest progress ticker period (in ms).
pub const MAX_PROGRESS_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of lifecycle events kept by the diagnostics collector.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;
