// SPDX-License-Identifier: MPL-2.0
//! Observer registry for published notification state.

use super::notification::Notification;

/// The state handed to every listener on publish.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    /// Queue contents, newest first.
    pub toasts: Vec<Notification>,
}

impl Snapshot {
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Looks up one notification by id.
    #[must_use]
    pub fn get(&self, id: super::NotificationId) -> Option<&Notification> {
        self.toasts.iter().find(|n| n.id() == id)
    }
}

/// Handle identifying one listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&Snapshot) + Send>;

/// Ordered list of listeners, invoked synchronously in registration order.
#[derive(Default)]
pub struct Subscribers {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Subscribers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes exactly one registration. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.listeners.iter().position(|(sub, _)| *sub == id) {
            Some(pos) => {
                self.listeners.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn publish(&mut self, snapshot: &Snapshot) {
        for (_, listener) in &mut self.listeners {
            listener(snapshot);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.listeners.len())
            .finish()
    }
}
