// SPDX-License-Identifier: MPL-2.0
//! Async host for a notification [`Manager`].
//!
//! [`ToastService`] shares one manager behind a mutex and spawns a tokio task
//! that sleeps until the next timer deadline, then calls
//! [`Manager::advance`]. Operations still mutate and publish synchronously;
//! they only nudge the driver so it picks up new deadlines.
//!
//! Listeners run while the manager is locked and must not call back into
//! the service.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use tokio::sync::Notify;

use super::clock::TokioClock;
use super::manager::Manager;
use super::notification::{NotificationId, NotificationPatch, Toast};
use super::settings::Settings;
use super::subscribers::{Snapshot, SubscriptionId};

struct Shared {
    manager: Mutex<Manager>,
    wake: Arc<Notify>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Manager> {
        self.manager.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        // Lets the driver observe the dead weak reference and exit.
        self.wake.notify_one();
    }
}

/// Cloneable, thread-safe front end to a timer-driven [`Manager`].
///
/// Must be created inside a tokio runtime. The driver task stops once the
/// last clone is dropped.
#[derive(Clone)]
pub struct ToastService {
    shared: Arc<Shared>,
}

impl ToastService {
    /// Spawns a service over a fresh manager on tokio's clock.
    #[must_use]
    pub fn spawn(settings: Settings) -> Self {
        Self::from_manager(Manager::with_clock(settings, Arc::new(TokioClock)))
    }

    /// Spawns a service driving an existing manager.
    ///
    /// The manager's clock should agree with tokio time, otherwise the
    /// driver wakes at the wrong moments.
    #[must_use]
    pub fn from_manager(manager: Manager) -> Self {
        let wake = Arc::new(Notify::new());
        let shared = Arc::new(Shared {
            manager: Mutex::new(manager),
            wake: Arc::clone(&wake),
        });
        tokio::spawn(drive(Arc::downgrade(&shared), wake));
        Self { shared }
    }

    /// Shows a notification and returns a handle to it.
    pub fn notify(&self, toast: Toast) -> ToastHandle {
        let id = self.mutate(|manager| manager.notify(toast));
        ToastHandle {
            id,
            shared: Arc::downgrade(&self.shared),
        }
    }

    pub fn dismiss(&self, id: NotificationId) -> bool {
        self.mutate(|manager| manager.dismiss(id))
    }

    pub fn dismiss_all(&self) -> usize {
        self.mutate(Manager::dismiss_all)
    }

    pub fn update(&self, id: NotificationId, patch: NotificationPatch) -> bool {
        self.mutate(|manager| manager.update(id, patch))
    }

    /// Registers a listener. It stays registered until
    /// [`Unsubscribe::unsubscribe`] is called.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        let subscription = self.shared.lock().subscribe(listener);
        Unsubscribe {
            subscription,
            shared: Arc::downgrade(&self.shared),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.shared.lock().snapshot()
    }

    /// Runs `f` with exclusive access to the manager.
    pub fn with_manager<R>(&self, f: impl FnOnce(&mut Manager) -> R) -> R {
        self.mutate(f)
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut Manager) -> R) -> R {
        mutate(&self.shared, f)
    }
}

impl std::fmt::Debug for ToastService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToastService").finish_non_exhaustive()
    }
}

fn mutate<R>(shared: &Shared, f: impl FnOnce(&mut Manager) -> R) -> R {
    let result = f(&mut shared.lock());
    shared.wake.notify_one();
    result
}

/// Handle returned by [`ToastService::notify`].
///
/// Holds only a weak reference; calls after the service is gone do nothing.
#[derive(Debug, Clone)]
pub struct ToastHandle {
    id: NotificationId,
    shared: Weak<Shared>,
}

impl ToastHandle {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Starts dismissing this notification.
    pub fn dismiss(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| mutate(&shared, |manager| manager.dismiss(self.id)))
    }

    /// Merges `patch` into this notification; no-op once it has been removed.
    pub fn update(&self, patch: NotificationPatch) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| mutate(&shared, |manager| manager.update(self.id, patch)))
    }
}

/// Registration guard returned by [`ToastService::subscribe`].
#[derive(Debug)]
#[must_use = "listeners stay registered until `unsubscribe` is called"]
pub struct Unsubscribe {
    subscription: SubscriptionId,
    shared: Weak<Shared>,
}

impl Unsubscribe {
    /// Removes the listener. Returns `false` if the service is already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(shared) = self.shared.upgrade() else {
            return false;
        };
        let removed = shared.lock().unsubscribe(self.subscription);
        removed
    }
}

impl std::fmt::Debug for Shared {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shared").finish_non_exhaustive()
    }
}

/// Driver loop: fire due timers, then sleep until the next deadline or a wake-up.
async fn drive(shared: Weak<Shared>, wake: Arc<Notify>) {
    loop {
        let next = {
            let Some(shared) = shared.upgrade() else {
                break;
            };
            let mut manager = shared.lock();
            manager.advance();
            manager.next_deadline()
        };

        match next {
            Some(deadline) => {
                tokio::select! {
                    () = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {}
                    () = wake.notified() => {}
                }
            }
            None => wake.notified().await,
        }
    }
}
