// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the queue of active notifications, the per-id timer
//! table and the subscriber list. Every mutation publishes the new state to
//! subscribers before returning. Timers only fire from [`Manager::advance`],
//! which the host calls when [`Manager::next_deadline`] has passed.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};
use super::notification::{Notification, NotificationId, NotificationPatch, Toast, Variant};
use super::settings::Settings;
use super::subscribers::{Snapshot, SubscriptionId, Subscribers};
use super::timers::{Expired, TimerKind, Timers};
use crate::diagnostics::{DiagnosticsHandle, DismissReason, LifecycleEvent};

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Dismiss every visible notification.
    DismissAll,
    /// Fire whatever timers are due.
    Tick,
}

/// Manages the notification queue and its timers.
pub struct Manager {
    /// Active notifications (newest first).
    toasts: VecDeque<Notification>,
    timers: Timers,
    subscribers: Subscribers,
    settings: Settings,
    clock: Arc<dyn Clock>,
    next_id: u64,
    /// Optional diagnostics handle for lifecycle logging.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager with default settings on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    /// Creates a manager reading time from `clock`.
    #[must_use]
    pub fn with_clock(settings: Settings, clock: Arc<dyn Clock>) -> Self {
        Self {
            toasts: VecDeque::with_capacity(settings.max_visible.value() + 1),
            timers: Timers::new(),
            subscribers: Subscribers::new(),
            settings,
            clock,
            next_id: 0,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for lifecycle logging.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Shows a new notification and returns its id.
    ///
    /// The notification goes to the front of the queue. If that pushes the
    /// queue past capacity, the oldest entries are dropped on the spot along
    /// with all of their timers. A non-zero duration arms the progress ticker
    /// and the auto-dismiss timer.
    pub fn notify(&mut self, toast: Toast) -> NotificationId {
        let now = self.clock.now();
        let id = NotificationId::from_raw(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let requested = toast
            .requested_duration()
            .unwrap_or(self.settings.default_duration);
        // A deadline the clock cannot represent never arrives.
        let end = now.checked_add(requested).filter(|_| !requested.is_zero());
        let duration = if end.is_some() { requested } else { Duration::ZERO };
        let variant = toast.variant_value();
        let notification = Notification::new(id, toast, duration, now);

        self.log_variant(&notification, now);
        self.log(LifecycleEvent::created(id, variant, duration), now);
        self.toasts.push_front(notification);
        self.evict_overflow(now);

        if let Some(end) = end {
            let first_tick = self.next_tick(now, end);
            self.timers.schedule(id, TimerKind::Progress, first_tick);
            self.timers.schedule(id, TimerKind::AutoDismiss, end);
        }

        self.publish();
        id
    }

    /// Starts dismissing a notification.
    ///
    /// Hides it, stops its progress and auto-dismiss timers and schedules the
    /// removal after the grace delay. Returns `false` if the id is unknown or
    /// the notification is already being dismissed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let now = self.clock.now();
        if self.begin_dismiss(id, now, DismissReason::Manual) {
            self.publish();
            true
        } else {
            false
        }
    }

    /// Dismisses every visible notification in a single publish.
    ///
    /// Returns how many notifications were dismissed.
    pub fn dismiss_all(&mut self) -> usize {
        let now = self.clock.now();
        let ids: Vec<NotificationId> = self
            .toasts
            .iter()
            .filter(|n| n.is_visible())
            .map(Notification::id)
            .collect();

        let dismissed = ids
            .into_iter()
            .filter(|&id| self.begin_dismiss(id, now, DismissReason::Bulk))
            .count();

        if dismissed > 0 {
            self.publish();
        }
        dismissed
    }

    /// `Some(id)` dismisses one notification, `None` dismisses all of them.
    pub fn dismiss_target(&mut self, target: Option<NotificationId>) -> usize {
        match target {
            Some(id) => usize::from(self.dismiss(id)),
            None => self.dismiss_all(),
        }
    }

    /// Merges `patch` into the notification, whether visible or not.
    ///
    /// Returns `false` without publishing if the id is gone. An empty patch
    /// changes nothing and is not published.
    pub fn update(&mut self, id: NotificationId, patch: NotificationPatch) -> bool {
        let Some(notification) = self.toasts.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        if patch.is_empty() {
            return true;
        }
        notification.apply(patch);

        let now = self.clock.now();
        self.log(LifecycleEvent::Updated { id: id.value() }, now);
        self.publish();
        true
    }

    /// Registers a listener called with the full state on every publish.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(subscription)
    }

    /// Fires every timer due at the clock's current time, earliest first.
    ///
    /// Timers scheduled by a callback are fired in the same call if they are
    /// already due. Returns the number of timers fired.
    pub fn advance(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(expired) = self.timers.pop_due(now) {
            self.fire(expired);
            fired += 1;
        }
        fired
    }

    /// Earliest pending timer deadline; the host should call
    /// [`advance`](Self::advance) once it has passed.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::DismissAll => {
                self.dismiss_all();
            }
            Message::Tick => {
                self.advance();
            }
        }
    }

    /// Drops every notification and timer immediately.
    pub fn clear(&mut self) {
        let count = self.toasts.len();
        self.toasts.clear();
        self.timers.clear();
        if count > 0 {
            let now = self.clock.now();
            self.log(LifecycleEvent::Cleared { count }, now);
            self.publish();
        }
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.toasts.iter().find(|n| n.id() == id)
    }

    /// Queue contents, newest first.
    pub fn toasts(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Number of queued notifications not yet being dismissed.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.toasts.iter().filter(|n| n.is_visible()).count()
    }

    /// Read access to the timer table.
    #[must_use]
    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            toasts: self.toasts.iter().cloned().collect(),
        }
    }

    fn fire(&mut self, expired: Expired) {
        let Expired { id, kind, deadline } = expired;
        match kind {
            TimerKind::Progress => {
                let interval = self.settings.progress_interval.as_duration();
                let Some(notification) = self
                    .toasts
                    .iter_mut()
                    .find(|n| n.id() == id && n.is_visible())
                else {
                    return;
                };
                let progress = notification.advance_progress(deadline);
                if progress < 100.0 {
                    if let Some(end) = notification.dismiss_deadline() {
                        let tick = deadline.checked_add(interval).map_or(end, |t| t.min(end));
                        self.timers.schedule(id, TimerKind::Progress, tick);
                    }
                }
                self.publish();
            }
            TimerKind::AutoDismiss => {
                if self.begin_dismiss(id, deadline, DismissReason::Auto) {
                    self.publish();
                }
            }
            TimerKind::Removal => {
                if self.remove_entry(id, deadline) {
                    self.publish();
                }
            }
        }
    }

    /// The dismiss transition without publishing.
    fn begin_dismiss(&mut self, id: NotificationId, at: Instant, reason: DismissReason) -> bool {
        let Some(notification) = self.toasts.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        if !notification.is_visible() {
            return false;
        }
        notification.hide();

        self.timers.cancel(id, TimerKind::Progress);
        self.timers.cancel(id, TimerKind::AutoDismiss);
        self.timers
            .schedule(id, TimerKind::Removal, at + self.settings.removal_delay);

        self.log(
            LifecycleEvent::Dismissed {
                id: id.value(),
                reason,
            },
            at,
        );
        true
    }

    fn remove_entry(&mut self, id: NotificationId, at: Instant) -> bool {
        let Some(pos) = self.toasts.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.toasts.remove(pos);
        self.timers.cancel_all(id);
        self.log(LifecycleEvent::Removed { id: id.value() }, at);
        true
    }

    fn evict_overflow(&mut self, at: Instant) {
        while self.toasts.len() > self.settings.max_visible.value() {
            let Some(evicted) = self.toasts.pop_back() else {
                break;
            };
            self.timers.cancel_all(evicted.id());
            self.log(
                LifecycleEvent::Evicted {
                    id: evicted.id().value(),
                },
                at,
            );
        }
    }

    fn next_tick(&self, from: Instant, end: Instant) -> Instant {
        from.checked_add(self.settings.progress_interval.as_duration())
            .map_or(end, |tick| tick.min(end))
    }

    fn publish(&mut self) {
        if self.subscribers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        self.subscribers.publish(&snapshot);
    }

    fn log(&self, event: LifecycleEvent, at: Instant) {
        if let Some(handle) = &self.diagnostics {
            handle.log_lifecycle(event, at);
        }
    }

    /// Warning and destructive toasts are mirrored as diagnostic warnings/errors.
    fn log_variant(&self, notification: &Notification, at: Instant) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        let message = notification
            .title()
            .or(notification.description())
            .unwrap_or_default();
        match notification.variant() {
            Variant::Warning => handle.log_warning(message, at),
            Variant::Destructive => handle.log_error(message, at),
            Variant::Default | Variant::Success => {}
        }
    }
}

impl std::fmt::Debug for Manager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Manager")
            .field("toasts", &self.toasts)
            .field("timers", &self.timers)
            .field("subscribers", &self.subscribers)
            .field("settings", &self.settings)
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::notifications::ManualClock;
    use crate::test_utils::{assert_abs_diff_eq, PROGRESS_EPSILON};
    use std::sync::Mutex;
    use std::time::Duration;

    fn manager() -> (Manager, ManualClock) {
        let clock = ManualClock::new();
        let manager = Manager::with_clock(Settings::default(), Arc::new(clock.clone()));
        (manager, clock)
    }

    fn step(manager: &mut Manager, clock: &ManualClock, millis: u64) {
        clock.advance(Duration::from_millis(millis));
        manager.advance();
    }

    fn record(manager: &mut Manager) -> Arc<Mutex<Vec<Snapshot>>> {
        let published = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&published);
        manager.subscribe(move |snapshot| sink.lock().unwrap().push(snapshot.clone()));
        published
    }

    fn timed(millis: u64) -> Toast {
        Toast::titled("Saved").duration(Duration::from_millis(millis))
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.pending_timers(), 0);
        assert!(manager.next_deadline().is_none());
    }

    #[test]
    fn notify_inserts_newest_first() {
        let (mut manager, _clock) = manager();
        let first = manager.notify(Toast::titled("first").persistent());
        let second = manager.notify(Toast::titled("second").persistent());

        let order: Vec<_> = manager.toasts().map(Notification::id).collect();
        assert_eq!(order, vec![second, first]);
        assert_ne!(first, second);
    }

    #[test]
    fn notify_uses_default_duration() {
        let (mut manager, _clock) = manager();
        let id = manager.notify(Toast::titled("Added to watchlist"));
        assert_eq!(
            manager.get(id).unwrap().duration(),
            Duration::from_millis(4000)
        );
        assert!(manager.timers().is_pending(id, TimerKind::AutoDismiss));
        assert!(manager.timers().is_pending(id, TimerKind::Progress));
    }

    #[test]
    fn six_persistent_toasts_keep_five_newest() {
        let (mut manager, _clock) = manager();
        let ids: Vec<_> = (0..6)
            .map(|i| manager.notify(Toast::titled(format!("toast-{i}")).persistent()))
            .collect();

        assert_eq!(manager.len(), 5);
        assert!(manager.get(ids[0]).is_none());
        assert_eq!(manager.toasts().next().map(Notification::id), Some(ids[5]));
        assert_eq!(manager.pending_timers(), 0);
    }

    #[test]
    fn evicted_timed_toast_has_no_dangling_timer() {
        let (mut manager, clock) = manager();
        let oldest = manager.notify(timed(1000));
        for _ in 0..5 {
            manager.notify(timed(1000));
        }

        assert!(manager.get(oldest).is_none());
        assert!(!manager.timers().has_any(oldest));
        assert_eq!(manager.pending_timers(), 10);

        step(&mut manager, &clock, 10_000);
        assert!(manager.is_empty());
        assert_eq!(manager.pending_timers(), 0);
    }

    #[test]
    fn persistent_toast_never_auto_dismisses() {
        let (mut manager, clock) = manager();
        let id = manager.notify(Toast::titled("Pinned").persistent());

        step(&mut manager, &clock, 3_600_000);

        let notification = manager.get(id).expect("still queued");
        assert!(notification.is_visible());
        assert_eq!(notification.progress(), 0.0);
    }

    #[test]
    fn long_duration_is_kept_as_given() {
        let (mut manager, clock) = manager();
        let id = manager.notify(Toast::titled("Export").duration(Duration::from_secs(15 * 60)));

        step(&mut manager, &clock, 11 * 60 * 1000);
        let notification = manager.get(id).expect("still queued");
        assert_eq!(notification.duration(), Duration::from_secs(15 * 60));
        assert!(notification.is_visible());

        step(&mut manager, &clock, 4 * 60 * 1000);
        assert!(!manager.get(id).unwrap().is_visible());
        assert_abs_diff_eq!(manager.get(id).unwrap().progress(), 100.0, epsilon = PROGRESS_EPSILON);
    }

    #[test]
    fn unreachable_deadline_behaves_as_persistent() {
        let (mut manager, clock) = manager();
        let id = manager.notify(Toast::titled("Forever").duration(Duration::MAX));

        assert!(!manager.get(id).unwrap().auto_dismisses());
        assert!(!manager.timers().has_any(id));

        step(&mut manager, &clock, 3_600_000);
        assert!(manager.get(id).unwrap().is_visible());
    }

    #[test]
    fn saved_toast_runs_full_lifecycle() {
        let (mut manager, clock) = manager();
        let id = manager.notify(Toast::titled("Saved").duration(Duration::from_millis(1000)));

        step(&mut manager, &clock, 500);
        let n = manager.get(id).unwrap();
        assert!(n.is_visible());
        assert_abs_diff_eq!(n.progress(), 50.0, epsilon = PROGRESS_EPSILON);

        step(&mut manager, &clock, 500);
        let n = manager.get(id).unwrap();
        assert!(!n.is_visible());
        assert_abs_diff_eq!(n.progress(), 100.0, epsilon = f32::EPSILON);

        step(&mut manager, &clock, 4999);
        assert!(manager.get(id).is_some());

        step(&mut manager, &clock, 1);
        assert!(manager.get(id).is_none());
        assert_eq!(manager.pending_timers(), 0);
    }

    #[test]
    fn progress_is_monotonic_and_bounded() {
        let (mut manager, clock) = manager();
        let published = record(&mut manager);
        let id = manager.notify(timed(1000));

        for _ in 0..40 {
            step(&mut manager, &clock, 37);
        }

        let samples: Vec<f32> = published
            .lock()
            .unwrap()
            .iter()
            .filter_map(|s| s.get(id).map(Notification::progress))
            .collect();
        assert!(samples.len() > 10);
        assert!(samples.windows(2).all(|w| w[0] <= w[1]));
        assert!(samples.iter().all(|p| (0.0..=100.0).contains(p)));
    }

    #[test]
    fn ticks_follow_progress_interval() {
        let (mut manager, clock) = manager();
        let id = manager.notify(timed(1000));
        let start = manager.get(id).unwrap().created_at();

        assert_eq!(
            manager.timers().deadline_of(id, TimerKind::Progress),
            Some(start + Duration::from_millis(100))
        );
        step(&mut manager, &clock, 100);
        assert_eq!(
            manager.timers().deadline_of(id, TimerKind::Progress),
            Some(start + Duration::from_millis(200))
        );
    }

    #[test]
    fn dismiss_stops_progress_publishes() {
        let (mut manager, clock) = manager();
        let id = manager.notify(timed(1000));
        step(&mut manager, &clock, 300);

        let published = record(&mut manager);
        assert!(manager.dismiss(id));
        assert!(!manager.timers().is_pending(id, TimerKind::Progress));
        assert!(!manager.timers().is_pending(id, TimerKind::AutoDismiss));

        step(&mut manager, &clock, 2000);
        assert_eq!(published.lock().unwrap().len(), 1);

        let frozen = manager.get(id).unwrap().progress();
        assert_abs_diff_eq!(frozen, 30.0, epsilon = PROGRESS_EPSILON);

        step(&mut manager, &clock, 3000);
        let published = published.lock().unwrap();
        assert_eq!(published.len(), 2);
        assert!(published[1].get(id).is_none());
    }

    #[test]
    fn dismiss_unknown_id_is_silent() {
        let (mut manager, _clock) = manager();
        let published = record(&mut manager);
        assert!(!manager.dismiss(NotificationId::from_raw(42)));
        assert!(published.lock().unwrap().is_empty());
    }

    #[test]
    fn second_dismiss_does_not_extend_grace() {
        let (mut manager, clock) = manager();
        let id = manager.notify(Toast::titled("Pinned").persistent());

        assert!(manager.dismiss(id));
        step(&mut manager, &clock, 3000);
        assert!(!manager.dismiss(id));
        step(&mut manager, &clock, 2000);

        assert!(manager.get(id).is_none());
    }

    #[test]
    fn dismiss_all_hides_everything_in_one_publish() {
        let (mut manager, clock) = manager();
        for i in 0..3 {
            manager.notify(Toast::titled(format!("toast-{i}")).persistent());
        }
        let published = record(&mut manager);

        assert_eq!(manager.dismiss_target(None), 3);
        {
            let published = published.lock().unwrap();
            assert_eq!(published.len(), 1);
            assert!(published[0].toasts.iter().all(|n| !n.is_visible()));
        }

        step(&mut manager, &clock, 5000);
        assert!(manager.is_empty());
    }

    #[test]
    fn dismiss_all_skips_already_dismissed() {
        let (mut manager, _clock) = manager();
        let a = manager.notify(Toast::titled("a").persistent());
        manager.notify(Toast::titled("b").persistent());
        manager.dismiss(a);

        assert_eq!(manager.dismiss_all(), 1);
        assert_eq!(manager.dismiss_all(), 0);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn update_merges_fields_and_publishes() {
        let (mut manager, _clock) = manager();
        let id = manager.notify(Toast::titled("Uploading").persistent());
        let published = record(&mut manager);

        assert!(manager.update(
            id,
            NotificationPatch::new()
                .title("Uploaded")
                .variant(Variant::Success)
        ));

        let n = manager.get(id).unwrap();
        assert_eq!(n.title(), Some("Uploaded"));
        assert_eq!(n.variant(), Variant::Success);
        assert_eq!(published.lock().unwrap().len(), 1);
    }

    #[test]
    fn empty_update_is_not_published() {
        let (mut manager, _clock) = manager();
        let id = manager.notify(Toast::titled("Uploading").persistent());
        let published = record(&mut manager);

        assert!(manager.update(id, NotificationPatch::new()));
        assert!(published.lock().unwrap().is_empty());
        assert_eq!(manager.get(id).unwrap().title(), Some("Uploading"));
    }

    #[test]
    fn update_applies_while_dismissing_but_not_after_removal() {
        let (mut manager, clock) = manager();
        let id = manager.notify(Toast::titled("Pinned").persistent());
        manager.dismiss(id);

        assert!(manager.update(id, NotificationPatch::new().description("closing")));
        assert_eq!(manager.get(id).unwrap().description(), Some("closing"));

        step(&mut manager, &clock, 5000);
        assert!(!manager.update(id, NotificationPatch::new().title("late")));
    }

    #[test]
    fn large_clock_jump_fires_everything_in_order() {
        let (mut manager, clock) = manager();
        let published = record(&mut manager);
        let id = manager.notify(timed(1000));

        step(&mut manager, &clock, 10_000);

        assert!(manager.is_empty());
        let published = published.lock().unwrap();
        let last_visible = published
            .iter()
            .filter_map(|s| s.get(id))
            .filter(|n| n.is_visible())
            .last()
            .expect("at least one visible publish");
        assert_abs_diff_eq!(last_visible.progress(), 100.0, epsilon = f32::EPSILON);
        assert!(published.last().unwrap().is_empty());
    }

    #[test]
    fn at_most_one_timer_per_kind() {
        let (mut manager, clock) = manager();
        let a = manager.notify(timed(2000));
        let b = manager.notify(timed(500));
        step(&mut manager, &clock, 250);
        manager.dismiss(a);
        step(&mut manager, &clock, 300);

        // a: removal only. b: auto-dismissed at 500, removal only.
        assert_eq!(manager.pending_timers(), 2);
        assert!(manager.timers().is_pending(a, TimerKind::Removal));
        assert!(manager.timers().is_pending(b, TimerKind::Removal));
    }

    #[test]
    fn handle_message_routes_actions() {
        let (mut manager, clock) = manager();
        let id = manager.notify(Toast::titled("Pinned").persistent());

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.get(id).unwrap().is_visible());

        clock.advance(Duration::from_millis(5000));
        manager.handle_message(&Message::Tick);
        assert!(manager.is_empty());
    }

    #[test]
    fn clear_drops_entries_and_timers() {
        let (mut manager, _clock) = manager();
        for _ in 0..3 {
            manager.notify(timed(1000));
        }
        let published = record(&mut manager);

        manager.clear();

        assert!(manager.is_empty());
        assert_eq!(manager.pending_timers(), 0);
        assert_eq!(published.lock().unwrap().len(), 1);
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let (mut manager, _clock) = manager();
        let count = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&count);
        let sub = manager.subscribe(move |_| *sink.lock().unwrap() += 1);

        manager.notify(Toast::titled("one").persistent());
        assert!(manager.unsubscribe(sub));
        manager.notify(Toast::titled("two").persistent());

        assert_eq!(*count.lock().unwrap(), 1);
    }

    #[test]
    fn lifecycle_is_logged_to_diagnostics() {
        let (mut manager, clock) = manager();
        let mut collector = DiagnosticsCollector::default();
        manager.set_diagnostics(collector.handle());

        let id = manager
            .notify(Toast::destructive("Could not reach TMDB").duration(Duration::from_millis(200)));
        step(&mut manager, &clock, 200);
        step(&mut manager, &clock, 5000);
        collector.process_pending();

        let lifecycle: Vec<_> = collector.lifecycle_events().cloned().collect();
        assert_eq!(
            lifecycle,
            vec![
                LifecycleEvent::created(id, Variant::Destructive, Duration::from_millis(200)),
                LifecycleEvent::Dismissed {
                    id: id.value(),
                    reason: DismissReason::Auto,
                },
                LifecycleEvent::Removed { id: id.value() },
            ]
        );
        assert!(collector.iter().any(|e| matches!(
            &e.kind,
            DiagnosticEventKind::Error { message } if message == "Could not reach TMDB"
        )));
    }

    #[test]
    fn custom_capacity_and_grace_are_honored() {
        let clock = ManualClock::new();
        let settings = Settings {
            max_visible: crate::domain::notifications::QueueCapacity::new(2),
            removal_delay: Duration::from_millis(100),
            ..Settings::default()
        };
        let mut manager = Manager::with_clock(settings, Arc::new(clock.clone()));

        for _ in 0..3 {
            manager.notify(Toast::titled("x").persistent());
        }
        assert_eq!(manager.len(), 2);

        manager.dismiss_all();
        step(&mut manager, &clock, 100);
        assert!(manager.is_empty());
    }
}
