//! Transports - where a reader gets its overrides from.
//!
//! The local [`ContentStore`] is always available. A hosted backend may be
//! configured as an alternate read path; any failure there falls back to
//! the local store. Writes only ever go to the local store.

#[cfg(feature = "remote")]
mod rest;

use std::sync::Arc;

use crate::content::ContentOverrides;
use crate::error::TransportError;
use crate::language::Language;
use crate::notifier::Subscription;
use crate::store::ContentStore;

#[cfg(feature = "remote")]
pub use rest::RestTransport;

/// Read-only remote source of per-language overrides.
pub trait RemoteTransport: Send + Sync {
    /// Fetch the overrides row for `language`.
    fn fetch(&self, language: Language) -> Result<ContentOverrides, TransportError>;
}

/// The load path used by readers: remote first when configured, local otherwise.
#[derive(Clone)]
pub struct ContentSource {
    store: Arc<dyn ContentStore>,
    remote: Option<Arc<dyn RemoteTransport>>,
}

impl ContentSource {
    /// Read from the local store only.
    pub fn local(store: Arc<dyn ContentStore>) -> Self {
        Self {
            store,
            remote: None,
        }
    }

    /// Prefer `remote`, falling back to `store` on any remote error.
    pub fn with_remote(store: Arc<dyn ContentStore>, remote: Arc<dyn RemoteTransport>) -> Self {
        Self {
            store,
            remote: Some(remote),
        }
    }

    pub fn store(&self) -> &Arc<dyn ContentStore> {
        &self.store
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    /// Current overrides for `language`. Never fails.
    pub fn load(&self, language: Language) -> ContentOverrides {
        if let Some(remote) = &self.remote {
            match remote.fetch(language) {
                Ok(overrides) => return overrides,
                Err(e) => {
                    tracing::warn!(%language, error = %e, "remote content unavailable, using local store");
                }
            }
        }
        self.store.load_language(language)
    }

    /// Change notifications come from the local store, whichever path loads.
    pub fn subscribe(&self, listener: Box<dyn Fn() + Send + Sync>) -> Subscription {
        self.store.subscribe(listener)
    }
}
