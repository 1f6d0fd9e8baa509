// SPDX-License-Identifier: MPL-2.0
//! Per-notification timer table.
//!
//! Every pending timer is keyed by `(NotificationId, TimerKind)`, so one
//! notification can have at most one timer of each kind. Scheduling over an
//! existing key replaces the old timer. All cancellation goes through this
//! table and is idempotent.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

use super::notification::NotificationId;

/// What a timer does when it fires.
///
/// The declaration order is also the firing order for timers sharing a
/// deadline: a final progress tick lands before the auto-dismiss it races.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    /// Recompute progress.
    Progress,
    /// Begin the dismiss transition.
    AutoDismiss,
    /// Drop the entry after the grace delay.
    Removal,
}

impl TimerKind {
    pub const ALL: [TimerKind; 3] = [TimerKind::Progress, TimerKind::AutoDismiss, TimerKind::Removal];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Slot {
    deadline: Instant,
    kind: TimerKind,
    seq: u64,
}

/// Cancellation token for a scheduled timer.
///
/// Canceling a token whose timer already fired or was replaced does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(Slot);

impl TimerToken {
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.0.deadline
    }

    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.0.kind
    }
}

/// A timer whose deadline has passed, handed back to the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expired {
    pub id: NotificationId,
    pub kind: TimerKind,
    pub deadline: Instant,
}

/// Deadline-ordered timer registry.
#[derive(Debug, Default)]
pub struct Timers {
    pending: BTreeMap<Slot, NotificationId>,
    by_key: HashMap<(NotificationId, TimerKind), Slot>,
    next_seq: u64,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `kind` for `id` at `deadline`, replacing any pending timer
    /// with the same key.
    pub fn schedule(&mut self, id: NotificationId, kind: TimerKind, deadline: Instant) -> TimerToken {
        self.cancel(id, kind);

        let slot = Slot {
            deadline,
            kind,
            seq: self.next_seq,
        };
        self.next_seq = self.next_seq.wrapping_add(1);

        self.pending.insert(slot, id);
        self.by_key.insert((id, kind), slot);
        TimerToken(slot)
    }

    /// Cancels the pending `kind` timer of `id`.
    ///
    /// Returns `false` if there was none.
    pub fn cancel(&mut self, id: NotificationId, kind: TimerKind) -> bool {
        match self.by_key.remove(&(id, kind)) {
            Some(slot) => {
                self.pending.remove(&slot);
                true
            }
            None => false,
        }
    }

    /// Cancels the timer behind `token`, if it is still pending.
    pub fn cancel_token(&mut self, token: TimerToken) -> bool {
        match self.pending.remove(&token.0) {
            Some(id) => {
                self.by_key.remove(&(id, token.0.kind));
                true
            }
            None => false,
        }
    }

    /// Cancels every timer of `id` and returns how many were pending.
    pub fn cancel_all(&mut self, id: NotificationId) -> usize {
        TimerKind::ALL
            .into_iter()
            .filter(|&kind| self.cancel(id, kind))
            .count()
    }

    /// Removes and returns the earliest timer due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<Expired> {
        let (slot, _) = self.pending.first_key_value()?;
        if slot.deadline > now {
            return None;
        }
        let (slot, id) = self.pending.pop_first()?;
        self.by_key.remove(&(id, slot.kind));
        Some(Expired {
            id,
            kind: slot.kind,
            deadline: slot.deadline,
        })
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.keys().next().map(|slot| slot.deadline)
    }

    #[must_use]
    pub fn is_pending(&self, id: NotificationId, kind: TimerKind) -> bool {
        self.by_key.contains_key(&(id, kind))
    }

    /// Returns the deadline of the pending `kind` timer of `id`.
    #[must_use]
    pub fn deadline_of(&self, id: NotificationId, kind: TimerKind) -> Option<Instant> {
        self.by_key.get(&(id, kind)).map(|slot| slot.deadline)
    }

    /// Returns whether `id` has any timer pending.
    #[must_use]
    pub fn has_any(&self, id: NotificationId) -> bool {
        TimerKind::ALL
            .into_iter()
            .any(|kind| self.is_pending(id, kind))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.by_key.clear();
    }
}
