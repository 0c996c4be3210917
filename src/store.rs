//! Content override store - the persisted `SiteContent` document plus its notifier.

use crate::content::{ContentOverrides, SiteContent};
use crate::error::SaveError;
use crate::language::Language;
use crate::notifier::{ChangeNotifier, Subscription};
use crate::storage::KeyValueStorage;

/// Storage key the document lives under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "siteContent";

/// Durable home of the site content document.
///
/// Object-safe so readers and the editor can share one `Arc<dyn ContentStore>`
/// and tests can substitute their own implementation.
pub trait ContentStore: Send + Sync {
    /// The persisted document, or an empty one if nothing usable is stored.
    /// Never fails.
    fn load(&self) -> SiteContent;

    /// Replace the whole persisted document. On success exactly one change
    /// notification fires after the write; on failure none does.
    fn save(&self, doc: &SiteContent) -> Result<(), SaveError>;

    /// Listen for successful saves.
    fn subscribe(&self, listener: Box<dyn Fn() + Send + Sync>) -> Subscription;

    /// Overrides for one language; empty when the document has no entry for it.
    fn load_language(&self, language: Language) -> ContentOverrides {
        self.load().overrides(language)
    }
}

/// [`ContentStore`] persisting the document as JSON in a [`KeyValueStorage`].
pub struct LocalContentStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    notifier: ChangeNotifier,
}

impl<S: KeyValueStorage> LocalContentStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn notifier(&self) -> &ChangeNotifier {
        &self.notifier
    }
}

impl<S: KeyValueStorage> ContentStore for LocalContentStore<S> {
    fn load(&self) -> SiteContent {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return SiteContent::default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read site content, using defaults");
                return SiteContent::default();
            }
        };

        match SiteContent::parse(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored site content is malformed, using defaults");
                SiteContent::default()
            }
        }
    }

    fn save(&self, doc: &SiteContent) -> Result<(), SaveError> {
        if let Err(reason) = doc.validate() {
            tracing::warn!(key = %self.key, %reason, "refusing to save invalid site content");
            return Err(SaveError::Invalid(reason));
        }
        let json = doc.to_json().map_err(|e| SaveError::Serialize(e.to_string()))?;

        if let Err(e) = self.storage.set(&self.key, &json) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist site content");
            return Err(e.into());
        }

        tracing::debug!(key = %self.key, bytes = json.len(), "site content saved");
        self.notifier.notify();
        Ok(())
    }

    fn subscribe(&self, listener: Box<dyn Fn() + Send + Sync>) -> Subscription {
        self.notifier.subscribe(listener)
    }
}
