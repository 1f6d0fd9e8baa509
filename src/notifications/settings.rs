// SPDX-License-Identifier: MPL-2.0
//! Runtime settings of a notification manager.

use std::time::Duration;

use crate::config::{self, Config};
use crate::domain::notifications::{ProgressInterval, QueueCapacity};

/// Validated timing and sizing used by [`Manager`](super::Manager).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Queue capacity.
    pub max_visible: QueueCapacity,
    /// Auto-dismiss delay for toasts that don't set one.
    pub default_duration: Duration,
    /// Grace delay between dismissal and removal.
    pub removal_delay: Duration,
    pub progress_interval: ProgressInterval,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_visible: QueueCapacity::default(),
            default_duration: Duration::from_millis(config::DEFAULT_DURATION_MS),
            removal_delay: Duration::from_millis(config::DEFAULT_REMOVAL_DELAY_MS),
            progress_interval: ProgressInterval::default(),
        }
    }
}

impl Settings {
    /// Builds settings from a loaded config, clamping every value into range.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            max_visible: config
                .max_visible
                .map_or(defaults.max_visible, QueueCapacity::new),
            default_duration: config
                .default_duration_ms
                .map_or(defaults.default_duration, |ms| {
                    Duration::from_millis(ms.min(config::MAX_DURATION_MS))
                }),
            removal_delay: config
                .removal_delay_ms
                .map_or(defaults.removal_delay, |ms| {
                    Duration::from_millis(ms.min(config::MAX_REMOVAL_DELAY_MS))
                }),
            progress_interval: config
                .progress_interval_ms
                .map_or(defaults.progress_interval, ProgressInterval::from_millis),
        }
    }
}
