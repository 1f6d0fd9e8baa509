// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! Bounded values for queue sizing and ticker timing. Construction clamps
//! into range, so a `QueueCapacity` or `ProgressInterval` is always usable.

use std::time::Duration;

// =============================================================================
// Queue Capacity
// =============================================================================

/// Queue capacity bounds (1 to 20 notifications).
pub mod queue_capacity_bounds {
    /// Smallest queue that still shows something.
    pub const MIN: usize = 1;
    /// Largest queue a presentation layer is expected to stack.
    pub const MAX: usize = 20;
    /// Default number of simultaneously queued notifications.
    pub const DEFAULT: usize = 5;
}

/// Maximum number of notifications held by the queue.
///
/// Inserting beyond this count evicts the oldest entry.
///
/// # Example
///
/// ```
/// use toastkit::domain::notifications::QueueCapacity;
///
/// assert_eq!(QueueCapacity::new(3).value(), 3);
/// assert_eq!(QueueCapacity::new(0).value(), 1);
/// assert_eq!(QueueCapacity::default().value(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueueCapacity(usize);

impl QueueCapacity {
    /// Creates a capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(queue_capacity_bounds::MIN, queue_capacity_bounds::MAX))
    }

    /// Returns the raw number of slots.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for QueueCapacity {
    fn default() -> Self {
        Self(queue_capacity_bounds::DEFAULT)
    }
}

// =============================================================================
// Progress Interval
// =============================================================================

/// Progress ticker bounds in milliseconds (10 ms to 1 s).
pub mod progress_interval_bounds {
    /// Fastest allowed tick.
    pub const MIN_MS: u64 = 10;
    /// Slowest allowed tick.
    pub const MAX_MS: u64 = 1000;
    /// Default tick period.
    pub const DEFAULT_MS: u64 = 100;
}

/// Period between two progress recomputations of one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgressInterval(u64);

impl ProgressInterval {
    /// Creates an interval from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(
            progress_interval_bounds::MIN_MS,
            progress_interval_bounds::MAX_MS,
        ))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ProgressInterval {
    fn default() -> Self {
        Self(progress_interval_bounds::DEFAULT_MS)
    }
}
