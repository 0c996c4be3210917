//! Shared fixtures: a store over shared in-memory storage and the builtin catalog.

use std::sync::Arc;

use site_content::{
    ContentSource, ContentStore, InMemoryStorage, LocalContentStore, StaticCatalog,
    TranslationCatalog,
};

pub struct Site {
    pub storage: InMemoryStorage,
    pub store: Arc<LocalContentStore<InMemoryStorage>>,
    pub catalog: Arc<dyn TranslationCatalog>,
}

impl Site {
    pub fn new() -> Self {
        let storage = InMemoryStorage::new();
        Self {
            store: Arc::new(LocalContentStore::new(storage.clone())),
            storage,
            catalog: Arc::new(StaticCatalog::builtin().unwrap()),
        }
    }

    pub fn dyn_store(&self) -> Arc<dyn ContentStore> {
        self.store.clone()
    }

    pub fn source(&self) -> ContentSource {
        ContentSource::local(self.dyn_store())
    }
}
