// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle.
//!
//! Notifications move through a fixed lifecycle: created visible, optionally
//! auto-dismissed after their duration, hidden for a grace delay, then
//! removed. The queue is bounded; overflow silently drops the oldest entry.
//!
//! # Components
//!
//! - [`notification`] - `Notification`, `Toast` payloads, `NotificationPatch`
//! - [`manager`] - `Manager`, the synchronous state machine
//! - [`timers`] - Per-id timer table with a single cancellation path
//! - [`subscribers`] - Listener registry and published `Snapshot`
//! - [`clock`] - Injectable time sources
//! - [`service`] - `ToastService`, a tokio-driven host for a manager
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use toastkit::notifications::{ManualClock, Manager, Settings, Toast};
//!
//! let clock = ManualClock::new();
//! let mut manager = Manager::with_clock(Settings::default(), Arc::new(clock.clone()));
//!
//! let id = manager.notify(Toast::success("Saved").duration(Duration::from_secs(1)));
//!
//! clock.advance(Duration::from_secs(1));
//! manager.advance();
//! assert!(!manager.get(id).unwrap().is_visible());
//!
//! clock.advance(Duration::from_secs(5));
//! manager.advance();
//! assert!(manager.get(id).is_none());
//! ```

pub mod clock;
pub mod manager;
pub mod notification;
pub mod service;
mod settings;
pub mod subscribers;
pub mod timers;

pub use clock::{Clock, ManualClock, SystemClock, TokioClock};
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, NotificationPatch, Toast, Variant};
pub use service::{ToastHandle, ToastService, Unsubscribe};
pub use settings::Settings;
pub use subscribers::{Snapshot, SubscriptionId};
pub use timers::{TimerKind, TimerToken};

/// Default queue capacity.
pub const MAX_VISIBLE: usize = crate::config::DEFAULT_MAX_VISIBLE;
