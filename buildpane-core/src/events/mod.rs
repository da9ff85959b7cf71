//! Typed reload notifications
//!
//! Views that display fetched collections need to reload when an external
//! job finishes (a build configuration creation completing, for example).
//! Rather than a global event bus with stringly-typed payloads, this module
//! provides an explicit publish/subscribe channel carrying a typed payload.
//!
//! Subscriptions are scoped resources: dropping the [`Subscription`] guard
//! unsubscribes, so an owner that tears down its view cannot leak a
//! callback.
//!
//! Callbacks run synchronously on the publisher's call stack and must not
//! subscribe to or unsubscribe from the channel they were invoked by.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, Weak};

/// Kinds of build notifications delivered to console views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuildEventType {
    /// A build configuration was created successfully
    CreationSuccess,
    /// A build configuration creation failed
    CreationError,
    /// A build finished
    BuildCompleted,
}

/// Payload for build-related console notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildNotification {
    /// What happened
    pub event_type: BuildEventType,

    /// Identifier of the affected entity
    pub entity_id: String,
}

type Callback<E> = Box<dyn Fn(&E) + Send + Sync>;

struct Registry<E> {
    next_id: u64,
    subscribers: Vec<(u64, Callback<E>)>,
}

impl<E> Default for Registry<E> {
    fn default() -> Self {
        Self { next_id: 0, subscribers: Vec::new() }
    }
}

/// Synchronous fan-out channel with typed payloads
///
/// Cloned handles publish to and subscribe on the same channel.
#[derive(Clone)]
pub struct EventChannel<E> {
    registry: Arc<Mutex<Registry<E>>>,
}

impl<E> Default for EventChannel<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventChannel<E> {
    /// Create a channel with no subscribers
    pub fn new() -> Self {
        Self { registry: Arc::new(Mutex::new(Registry::default())) }
    }

    /// Register a callback; it stays live until the returned guard drops
    pub fn subscribe(&self, callback: impl Fn(&E) + Send + Sync + 'static) -> Subscription<E> {
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.subscribers.push((id, Box::new(callback)));
        Subscription { id, registry: Arc::downgrade(&self.registry) }
    }

    /// Deliver an event to every live subscriber, in subscription order
    pub fn publish(&self, event: &E) {
        let registry = self.lock();
        for (_, callback) in &registry.subscribers {
            callback(event);
        }
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry<E>> {
        // A poisoned registry only means a callback panicked; the table
        // itself is still consistent.
        self.registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// RAII subscription guard; dropping it unsubscribes
pub struct Subscription<E> {
    id: u64,
    registry: Weak<Mutex<Registry<E>>>,
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            registry.subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}
