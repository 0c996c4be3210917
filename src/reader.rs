//! Content reader - one live view of a language's content.
//!
//! A reader is "mounted" by constructing it: it loads immediately, then
//! reloads on every change notification until it is dropped. Page sections
//! ask it for resolved sections instead of merging overrides themselves.
//!
//! Loads never run under the state lock. When the source has a remote
//! backend, notification-driven reloads run on their own thread so a save
//! returns as soon as the local write and notification are done.

use std::sync::{Arc, PoisonError, RwLock, Weak};
use std::thread;

use crate::catalog::TranslationCatalog;
use crate::content::{resolve_section, ContentOverrides, EffectiveContent, Section};
use crate::language::Language;
use crate::notifier::Subscription;
use crate::transport::ContentSource;

struct ReaderState {
    language: Language,
    overrides: ContentOverrides,
    revision: u64,
    /// Last reload ticket handed out.
    requested: u64,
    /// Ticket of the load currently exposed.
    applied: u64,
}

impl ReaderState {
    fn begin(&mut self) -> (u64, Language) {
        self.requested += 1;
        (self.requested, self.language)
    }

    /// Swap in a finished load unless a newer one already landed or the
    /// language changed while it was in flight.
    fn finish(&mut self, ticket: u64, language: Language, overrides: ContentOverrides) -> bool {
        if ticket <= self.applied || language != self.language {
            return false;
        }
        self.applied = ticket;
        self.overrides = overrides;
        self.revision += 1;
        true
    }
}

fn write(state: &RwLock<ReaderState>) -> std::sync::RwLockWriteGuard<'_, ReaderState> {
    state.write().unwrap_or_else(PoisonError::into_inner)
}

fn reload(state: &RwLock<ReaderState>, source: &ContentSource) {
    let (ticket, language) = write(state).begin();
    let overrides = source.load(language);
    if !write(state).finish(ticket, language, overrides) {
        tracing::debug!(%language, ticket, "discarded stale content reload");
    }
}

fn reload_in_background(state: Weak<RwLock<ReaderState>>, source: ContentSource) {
    let spawned = thread::Builder::new()
        .name("site-content-reload".into())
        .spawn(move || {
            if let Some(state) = state.upgrade() {
                reload(&state, &source);
            }
        });
    if let Err(e) = spawned {
        tracing::warn!(error = %e, "could not spawn content reload thread");
    }
}

/// Live overrides for one language, kept fresh by change notifications.
pub struct ContentReader {
    state: Arc<RwLock<ReaderState>>,
    source: ContentSource,
    catalog: Arc<dyn TranslationCatalog>,
    _subscription: Subscription,
}

impl ContentReader {
    /// Load the current overrides for `language` and start listening for saves.
    pub fn mount(
        source: ContentSource,
        catalog: Arc<dyn TranslationCatalog>,
        language: Language,
    ) -> Self {
        let state = Arc::new(RwLock::new(ReaderState {
            language,
            overrides: ContentOverrides::default(),
            revision: 0,
            requested: 0,
            applied: 0,
        }));
        reload(&state, &source);

        let weak = Arc::downgrade(&state);
        let listener_source = source.clone();
        let background = source.has_remote();
        let subscription = source.subscribe(Box::new(move || {
            if background {
                reload_in_background(weak.clone(), listener_source.clone());
            } else if let Some(state) = weak.upgrade() {
                reload(&state, &listener_source);
            }
        }));

        tracing::debug!(%language, remote = background, "content reader mounted");

        Self {
            state,
            source,
            catalog,
            _subscription: subscription,
        }
    }

    pub fn language(&self) -> Language {
        self.read(|state| state.language)
    }

    /// Switch to another language and load its overrides right away.
    pub fn set_language(&self, language: Language) {
        {
            let mut state = write(&self.state);
            if state.language == language {
                return;
            }
            state.language = language;
        }
        reload(&self.state, &self.source);
    }

    /// Reload from the source without waiting for a notification.
    pub fn refresh(&self) {
        reload(&self.state, &self.source);
    }

    /// The raw overrides currently exposed.
    pub fn overrides(&self) -> ContentOverrides {
        self.read(|state| state.overrides.clone())
    }

    /// Increments every time a load is swapped in.
    pub fn revision(&self) -> u64 {
        self.read(|state| state.revision)
    }

    /// Overrides merged over the catalog defaults for the current language.
    pub fn effective(&self) -> EffectiveContent {
        self.read(|state| {
            state
                .overrides
                .resolve(&self.catalog.defaults(state.language))
        })
    }

    /// One resolved section, e.g. `reader.section::<Hero>()`.
    pub fn section<S: Section>(&self) -> S {
        self.read(|state| {
            resolve_section(&state.overrides, &self.catalog.defaults(state.language))
        })
    }

    fn read<T>(&self, f: impl FnOnce(&ReaderState) -> T) -> T {
        f(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }
}

impl std::fmt::Debug for ContentReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.read(|state| {
            f.debug_struct("ContentReader")
                .field("language", &state.language)
                .field("revision", &state.revision)
                .finish()
        })
    }
}
