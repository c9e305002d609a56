//! Process-wide notification queue
//!
//! `NotificationQueue` is a cheap, cloneable handle. Construct it once at
//! startup and hand clones to whatever needs to raise or observe notifications.
//! The newest notification is always first.
//!
//! Expiry: when `add` runs inside a tokio runtime, a delayed task removes the
//! notification after its duration. Outside a runtime the deadline is only
//! recorded, and the host calls `sweep_expired` from its event loop. Neither
//! path is cancelled by an early `remove`; removing an absent id is a no-op.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::{Duration, Instant};

use chrono::Utc;

use super::notification_state::{
    Notification, NotificationFields, NotificationKind, NotificationOptions, NotificationPatch,
};

type Listener = Arc<dyn Fn(&[Notification]) + Send + Sync>;

#[derive(Default)]
struct QueueInner {
    notifications: Vec<Notification>,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
    next_listener_id: u64,
}

/// Handle to the shared notification list
#[derive(Clone, Default)]
pub struct NotificationQueue {
    inner: Arc<Mutex<QueueInner>>,
}

impl fmt::Debug for NotificationQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("NotificationQueue")
            .field("notifications", &inner.notifications.len())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Registration token returned by `subscribe`
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    queue: Weak<Mutex<QueueInner>>,
}

impl Subscription {
    /// Remove exactly this registration
    pub fn unsubscribe(self) {
        if let Some(inner) = self.queue.upgrade() {
            lock_inner(&inner)
                .listeners
                .retain(|(listener_id, _)| *listener_id != self.id);
        }
    }
}

fn lock_inner(inner: &Mutex<QueueInner>) -> MutexGuard<'_, QueueInner> {
    // A listener panicking elsewhere must not take the queue down with it
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, QueueInner> {
        lock_inner(&self.inner)
    }

    /// Register a listener called with the full list after every mutation
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[Notification]) + Send + Sync + 'static,
    {
        let mut inner = self.lock();
        inner.next_listener_id += 1;
        let id = inner.next_listener_id;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription {
            id,
            queue: Arc::downgrade(&self.inner),
        }
    }

    /// Mutate under the lock, then fan out the post-mutation list with the lock released
    fn mutate<R>(&self, f: impl FnOnce(&mut QueueInner) -> R) -> R {
        self.mutate_if(|inner| (f(inner), true))
    }

    /// Like `mutate`, but listeners only hear about it when `f` reports a change.
    /// The check and the change happen under the same lock.
    fn mutate_if<R>(&self, f: impl FnOnce(&mut QueueInner) -> (R, bool)) -> R {
        let (result, fan_out) = {
            let mut inner = self.lock();
            let (result, changed) = f(&mut inner);
            let fan_out = changed.then(|| {
                let listeners: Vec<Listener> =
                    inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
                (inner.notifications.clone(), listeners)
            });
            (result, fan_out)
        };
        if let Some((snapshot, listeners)) = fan_out {
            for listener in listeners {
                listener(&snapshot);
            }
        }
        result
    }

    /// Add a notification and return its id
    pub fn add(&self, fields: NotificationFields) -> u64 {
        let expiry = fields
            .duration
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        let id = self.mutate(|inner| {
            inner.next_id += 1;
            let id = inner.next_id;
            inner.notifications.insert(
                0,
                Notification {
                    id,
                    kind: fields.kind,
                    title: fields.title,
                    message: fields.message,
                    duration: fields.duration,
                    timestamp: Utc::now(),
                    read: false,
                    updated_at: None,
                    action: fields.action,
                    expires_at: expiry.map(|d| Instant::now() + d),
                },
            );
            id
        });

        if let Some(delay) = expiry {
            self.schedule_removal(id, delay);
        }

        log::debug!("Notification {} added", id);
        id
    }

    fn schedule_removal(&self, id: u64, delay: Duration) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            log::debug!("No runtime; notification {} expires via sweep", id);
            return;
        };
        let queue = Arc::downgrade(&self.inner);
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = queue.upgrade() {
                NotificationQueue { inner }.remove(id);
            }
        });
    }

    /// Remove by id. Subscribers are notified even if the id was absent.
    pub fn remove(&self, id: u64) {
        self.mutate(|inner| inner.notifications.retain(|n| n.id != id));
    }

    pub fn clear(&self) {
        self.mutate(|inner| inner.notifications.clear());
    }

    /// Merge `patch` into the notification with `id` and stamp `updated_at`.
    /// Absent ids are ignored without notifying. Returns whether the id was found.
    pub fn update(&self, id: u64, patch: NotificationPatch) -> bool {
        self.mutate_if(|inner| {
            match inner.notifications.iter_mut().find(|n| n.id == id) {
                Some(notification) => {
                    patch.apply(notification);
                    notification.updated_at = Some(Utc::now());
                    (true, true)
                }
                None => (false, false),
            }
        })
    }

    pub fn mark_as_read(&self, id: u64) -> bool {
        self.update(id, NotificationPatch::new().read(true))
    }

    /// Mark every notification read with a single fan-out
    pub fn mark_all_as_read(&self) {
        self.mutate(|inner| {
            for notification in inner.notifications.iter_mut().filter(|n| !n.read) {
                notification.read = true;
            }
        });
    }

    pub fn unread_count(&self) -> usize {
        self.lock().notifications.iter().filter(|n| !n.read).count()
    }

    /// Snapshot of all notifications, newest first
    pub fn get_all(&self) -> Vec<Notification> {
        self.lock().notifications.clone()
    }

    pub fn get(&self, id: u64) -> Option<Notification> {
        self.lock().notifications.iter().find(|n| n.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().notifications.is_empty()
    }

    /// Remove notifications whose deadline has passed. Returns how many were removed.
    pub fn sweep_expired(&self, now: Instant) -> usize {
        self.mutate_if(|inner| {
            let before = inner.notifications.len();
            inner.notifications.retain(|n| !n.is_expired_at(now));
            let removed = before - inner.notifications.len();
            (removed, removed > 0)
        })
    }

    pub fn notify(&self, kind: NotificationKind, message: &str, options: NotificationOptions) -> u64 {
        self.add(NotificationFields::new(kind, message).with_options(options))
    }

    pub fn success(&self, message: &str, options: NotificationOptions) -> u64 {
        self.notify(NotificationKind::Success, message, options)
    }

    pub fn error(&self, message: &str, options: NotificationOptions) -> u64 {
        self.notify(NotificationKind::Error, message, options)
    }

    pub fn warning(&self, message: &str, options: NotificationOptions) -> u64 {
        self.notify(NotificationKind::Warning, message, options)
    }

    pub fn info(&self, message: &str, options: NotificationOptions) -> u64 {
        self.notify(NotificationKind::Info, message, options)
    }

    pub fn loading(&self, message: &str, options: NotificationOptions) -> u64 {
        self.notify(NotificationKind::Loading, message, options)
    }
}

#[cfg(test)]
#[path = "notification_queue_tests.rs"]
mod notification_queue_tests;
