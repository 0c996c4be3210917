//! Integration tests for readers loading through an alternate remote transport.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use site_content::{
    About, AboutOverrides, ContentOverrides, ContentReader, ContentSource, ContentStore,
    InMemoryStorage, Language, LocalContentStore, RemoteTransport, SiteContent, StaticCatalog,
    TransportError, TranslationCatalog,
};

/// Remote double that can be switched off and counts fetches.
#[derive(Default)]
struct ToggleRemote {
    down: AtomicBool,
    fetches: AtomicUsize,
    rows: Mutex<Vec<(Language, ContentOverrides)>>,
}

impl ToggleRemote {
    fn put(&self, language: Language, overrides: ContentOverrides) {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|(l, _)| *l != language);
        rows.push((language, overrides));
    }
}

impl RemoteTransport for ToggleRemote {
    fn fetch(&self, language: Language) -> Result<ContentOverrides, TransportError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.down.load(Ordering::SeqCst) {
            return Err(TransportError::Request("connection refused".into()));
        }
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|(l, _)| *l == language)
            .map(|(_, o)| o.clone())
            .ok_or_else(|| TransportError::NotFound(language.to_string()))
    }
}

fn bio(text: &str) -> ContentOverrides {
    ContentOverrides {
        about: Some(AboutOverrides {
            bio: Some(text.into()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Remote-backed readers reload off the saving thread.
fn wait_for_revision(reader: &ContentReader, revision: u64) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while reader.revision() < revision {
        assert!(Instant::now() < deadline, "reader never reached revision {revision}");
        thread::sleep(Duration::from_millis(10));
    }
}

fn setup() -> (Arc<dyn ContentStore>, Arc<ToggleRemote>, Arc<dyn TranslationCatalog>) {
    let store: Arc<dyn ContentStore> = Arc::new(LocalContentStore::new(InMemoryStorage::new()));
    let mut doc = SiteContent::default();
    doc.set(Language::Pt, bio("local bio"));
    store.save(&doc).unwrap();

    (
        store,
        Arc::new(ToggleRemote::default()),
        Arc::new(StaticCatalog::builtin().unwrap()),
    )
}

#[test]
fn reader_prefers_remote_row() {
    let (store, remote, catalog) = setup();
    remote.put(Language::Pt, bio("remote bio"));

    let source = ContentSource::with_remote(store, remote.clone());
    let reader = ContentReader::mount(source, catalog, Language::Pt);

    assert_eq!(reader.section::<About>().bio, "remote bio");
    assert_eq!(remote.fetches.load(Ordering::SeqCst), 1);
}

#[test]
fn reader_falls_back_when_remote_is_down() {
    let (store, remote, catalog) = setup();
    remote.down.store(true, Ordering::SeqCst);

    let source = ContentSource::with_remote(store, remote);
    let reader = ContentReader::mount(source, catalog, Language::Pt);

    assert_eq!(reader.section::<About>().bio, "local bio");
}

#[test]
fn reader_falls_back_when_row_is_missing() {
    let (store, remote, catalog) = setup();
    let source = ContentSource::with_remote(store, remote);
    let reader = ContentReader::mount(source, catalog.clone(), Language::En);

    assert_eq!(reader.effective(), catalog.defaults(Language::En));
}

#[test]
fn local_save_triggers_remote_reload() {
    let (store, remote, catalog) = setup();
    remote.put(Language::Pt, bio("remote v1"));

    let source = ContentSource::with_remote(store.clone(), remote.clone());
    let reader = ContentReader::mount(source, catalog, Language::Pt);
    assert_eq!(reader.section::<About>().bio, "remote v1");

    remote.put(Language::Pt, bio("remote v2"));
    store.save(&store.load()).unwrap();
    wait_for_revision(&reader, 2);

    assert_eq!(reader.section::<About>().bio, "remote v2");
    assert_eq!(remote.fetches.load(Ordering::SeqCst), 2);
}

#[test]
fn outage_after_mount_falls_back_on_next_reload() {
    let (store, remote, catalog) = setup();
    remote.put(Language::Pt, bio("remote"));

    let source = ContentSource::with_remote(store, remote.clone());
    let reader = ContentReader::mount(source, catalog, Language::Pt);
    assert_eq!(reader.section::<About>().bio, "remote");

    remote.down.store(true, Ordering::SeqCst);
    reader.refresh();
    assert_eq!(reader.section::<About>().bio, "local bio");
}
