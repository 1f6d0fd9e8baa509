// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Progress values are `f32` percentages; compare them with the `approx`
//! macros re-exported here rather than `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for progress samples taken between ticks (one tick is 100 ms).
pub const PROGRESS_EPSILON: f32 = 0.5;
