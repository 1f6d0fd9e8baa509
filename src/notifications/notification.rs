// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` value published to subscribers,
//! the `Toast` payload accepted by `notify`, and the `NotificationPatch`
//! used for partial updates.

use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
///
/// Ids are handed out by the owning manager from a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Display variant of a notification.
///
/// The lifecycle treats every variant the same; only the presentation layer
/// and diagnostics look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    #[default]
    Default,
    Success,
    Warning,
    /// A failure the user needs to notice.
    Destructive,
}

impl Variant {
    /// Stable lowercase name, used by text renderers and diagnostics.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Destructive => "destructive",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload for [`Manager::notify`](super::Manager::notify).
///
/// Built with a small builder; anything left out takes the manager's
/// defaults (4 s auto-dismiss, [`Variant::Default`]).
///
/// ```
/// use std::time::Duration;
/// use toastkit::notifications::{Toast, Variant};
///
/// let toast = Toast::success("Saved")
///     .description("Added to your watchlist")
///     .duration(Duration::from_secs(1));
/// assert_eq!(toast.variant_value(), Variant::Success);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toast {
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    duration: Option<Duration>,
}

impl Toast {
    /// Creates an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a payload with a title and the default variant.
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new().title(title)
    }

    /// Creates a success payload.
    pub fn success(title: impl Into<String>) -> Self {
        Self::titled(title).variant(Variant::Success)
    }

    /// Creates a warning payload.
    pub fn warning(title: impl Into<String>) -> Self {
        Self::titled(title).variant(Variant::Warning)
    }

    /// Creates a destructive payload.
    pub fn destructive(title: impl Into<String>) -> Self {
        Self::titled(title).variant(Variant::Destructive)
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the auto-dismiss delay. [`Duration::ZERO`] keeps the toast until
    /// it is dismissed explicitly.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Shorthand for `duration(Duration::ZERO)`.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    #[must_use]
    pub fn variant_value(&self) -> Variant {
        self.variant
    }

    /// Returns the explicitly requested duration, if any.
    #[must_use]
    pub fn requested_duration(&self) -> Option<Duration> {
        self.duration
    }
}

/// Partial update merged into an existing notification.
///
/// Fields set to `Some` replace the stored value; `None` leaves it alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub variant: Option<Variant>,
}

impl NotificationPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Returns true if applying this patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.variant.is_none()
    }
}

/// A notification as held by the queue and published to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    id: NotificationId,
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    /// False once dismissal has begun.
    visible: bool,
    /// Zero means no auto-dismiss.
    duration: Duration,
    /// Elapsed fraction of `duration`, in percent.
    progress: f32,
    created_at: Instant,
}

impl Notification {
    pub(crate) fn new(
        id: NotificationId,
        toast: Toast,
        duration: Duration,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            title: toast.title,
            description: toast.description,
            variant: toast.variant,
            visible: true,
            duration,
            progress: 0.0,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether an auto-dismiss timer was armed for this notification.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }

    /// Progress in percent, within `[0, 100]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub(crate) fn apply(&mut self, patch: NotificationPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }

    /// Recomputes progress for the instant `at` and returns the new value.
    ///
    /// Progress never moves backwards and saturates at 100.
    pub(crate) fn advance_progress(&mut self, at: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.progress;
        }
        let elapsed = at.saturating_duration_since(self.created_at);
        let pct = (elapsed.as_secs_f64() / self.duration.as_secs_f64() * 100.0).min(100.0);
        #[allow(clippy::cast_possible_truncation)] // Bounded to [0, 100]
        let pct = pct as f32;
        self.progress = self.progress.max(pct);
        self.progress
    }

    /// When the auto-dismiss deadline falls, if any.
    pub(crate) fn dismiss_deadline(&self) -> Option<Instant> {
        self.created_at
            .checked_add(self.duration)
            .filter(|_| !self.duration.is_zero())
    }
}
