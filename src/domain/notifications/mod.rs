// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! - [`QueueCapacity`]: How many notifications the queue holds at once
//! - [`ProgressInterval`]: Period of the progress-interpolation ticker

mod newtypes;

pub use newtypes::{progress_interval_bounds, queue_capacity_bounds, ProgressInterval, QueueCapacity};
