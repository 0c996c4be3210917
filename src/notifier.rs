//! Change notifier - in-process broadcast of "persisted content changed".
//!
//! Listeners are plain closures held in an observer list owned by the store.
//! A notification reaches every listener registered at the moment it fires;
//! nothing is buffered for listeners that subscribe later.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, Weak};

/// Name of the change event, as seen by emitter-based listeners.
pub const SITE_CONTENT_UPDATED: &str = "siteContentUpdated";

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Observer list for content change notifications.
///
/// Clone-friendly via Arc: clones notify the same listeners.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    registry: Arc<RwLock<Registry>>,
    fired: Arc<AtomicU64>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It stays registered until the returned
    /// [`Subscription`] is dropped or unsubscribed.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut registry = self.registry.write().unwrap_or_else(PoisonError::into_inner);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Arc::new(listener)));

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Invoke every currently registered listener, in registration order.
    ///
    /// The list is snapshotted first, so listeners may subscribe or
    /// unsubscribe from inside a callback.
    pub fn notify(&self) {
        let listeners: Vec<Listener> = {
            let registry = self.registry.read().unwrap_or_else(PoisonError::into_inner);
            registry.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };

        self.fired.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(listeners = listeners.len(), "{}", SITE_CONTENT_UPDATED);

        for listener in listeners {
            listener();
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .listeners
            .len()
    }

    /// Number of notifications fired so far.
    pub fn notifications(&self) -> u64 {
        self.fired.load(Ordering::SeqCst)
    }
}

/// Handle to a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<RwLock<Registry>>,
}

impl Subscription {
    /// Unsubscribe now. Equivalent to dropping the handle.
    pub fn unsubscribe(self) {}

    /// True while the listener is still registered.
    pub fn is_active(&self) -> bool {
        self.registry.upgrade().is_some_and(|registry| {
            registry
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .listeners
                .iter()
                .any(|(id, _)| *id == self.id)
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.write().unwrap_or_else(PoisonError::into_inner);
            registry.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

#[cfg(feature = "emitter")]
pub use bridge::EmitterBridge;

#[cfg(feature = "emitter")]
mod bridge {
    use std::sync::{Arc, Mutex, PoisonError};

    use event_emitter_rs::EventEmitter;

    use super::{ChangeNotifier, Subscription, SITE_CONTENT_UPDATED};

    /// Re-broadcasts content changes on an [`EventEmitter`] for listeners
    /// living on other threads.
    ///
    /// The emitter delivers each event on its own thread, so emitter
    /// listeners run after `save()` has returned.
    pub struct EmitterBridge {
        emitter: Arc<Mutex<EventEmitter>>,
        _subscription: Subscription,
    }

    impl EmitterBridge {
        /// Forward every notification of `notifier` to `emitter` under
        /// [`SITE_CONTENT_UPDATED`].
        pub fn attach(notifier: &ChangeNotifier, emitter: Arc<Mutex<EventEmitter>>) -> Self {
            let target = Arc::clone(&emitter);
            let subscription = notifier.subscribe(move || {
                let mut emitter = target.lock().unwrap_or_else(PoisonError::into_inner);
                emitter.emit(SITE_CONTENT_UPDATED, ());
            });

            Self {
                emitter,
                _subscription: subscription,
            }
        }

        /// Register an emitter listener for content changes. Returns the
        /// emitter's listener id.
        pub fn on_update<F>(&self, listener: F) -> String
        where
            F: Fn() + Send + Sync + 'static,
        {
            let mut emitter = self.emitter.lock().unwrap_or_else(PoisonError::into_inner);
            emitter.on(SITE_CONTENT_UPDATED, move |_: ()| listener())
        }
    }
}
