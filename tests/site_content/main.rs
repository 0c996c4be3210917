//! Integration tests for the override store, readers and the admin editor together.

mod support;

use site_content::{
    AdminEditor, ContentOverrides, ContentReader, ContentStore, Contact, EditorState,
    FileStorage, Hero, HeroOverrides, KeyValueStorage, Language, LocalContentStore, SaveError,
    SiteContent, TranslationCatalog, DEFAULT_STORAGE_KEY,
};
use support::Site;

#[test]
fn admin_save_reaches_readers_without_touching_other_language() {
    let site = Site::new();
    let pt_defaults = site.catalog.defaults(Language::Pt);
    let en_defaults = site.catalog.defaults(Language::En);

    let pt_reader = ContentReader::mount(site.source(), site.catalog.clone(), Language::Pt);
    let en_reader = ContentReader::mount(site.source(), site.catalog.clone(), Language::En);

    let mut editor = AdminEditor::open(site.dyn_store(), site.catalog.clone(), Language::Pt);
    editor.edit(|draft| draft.hero.name = "Ana Souza".into());
    editor.save().unwrap();

    let hero = pt_reader.section::<Hero>();
    assert_eq!(hero.name, "Ana Souza");
    assert_eq!(hero.greeting, pt_defaults.hero.greeting);

    assert_eq!(en_reader.section::<Hero>().name, en_defaults.hero.name);
    assert_eq!(en_reader.effective(), en_defaults);
}

#[test]
fn one_save_refreshes_every_mounted_reader() {
    let site = Site::new();
    let readers: Vec<_> = (0..5)
        .map(|_| ContentReader::mount(site.source(), site.catalog.clone(), Language::Pt))
        .collect();
    let other = ContentReader::mount(site.source(), site.catalog.clone(), Language::En);
    let other_before = other.overrides();

    let mut doc = site.store.load();
    doc.set(
        Language::Pt,
        ContentOverrides {
            hero: Some(HeroOverrides {
                cta: Some("Fale comigo".into()),
                ..Default::default()
            }),
            ..Default::default()
        },
    );
    site.store.save(&doc).unwrap();

    for reader in &readers {
        assert_eq!(reader.section::<Hero>().cta, "Fale comigo");
        assert_eq!(reader.revision(), 2);
    }

    // Reloaded, but nothing changed for the other language.
    assert_eq!(other.revision(), 2);
    assert_eq!(other.overrides(), other_before);
}

#[test]
fn notification_count_follows_save_calls() {
    let site = Site::new();
    let reader = ContentReader::mount(site.source(), site.catalog.clone(), Language::En);

    let doc = SiteContent::default();
    site.store.save(&doc).unwrap();
    site.store.save(&doc).unwrap();

    assert_eq!(site.store.notifier().notifications(), 2);
    assert_eq!(reader.revision(), 3);
    assert_eq!(site.store.load(), doc);
}

#[test]
fn second_save_overwrites_whole_language_entry() {
    let site = Site::new();

    // Both editors draft before either saves.
    let mut first = AdminEditor::open(site.dyn_store(), site.catalog.clone(), Language::Pt);
    let mut second = AdminEditor::open(site.dyn_store(), site.catalog.clone(), Language::Pt);

    first.edit(|draft| draft.about.bio = "X".into());
    first.save().unwrap();

    second.edit(|draft| draft.contact.title = "Y".into());
    second.save().unwrap();

    let defaults = site.catalog.defaults(Language::Pt);
    let effective = site
        .store
        .load_language(Language::Pt)
        .resolve(&defaults);
    assert_eq!(effective.contact.title, "Y");
    assert_eq!(effective.about.bio, defaults.about.bio);
}

#[test]
fn explicit_blank_survives_reload() {
    let site = Site::new();
    let mut editor = AdminEditor::open(site.dyn_store(), site.catalog.clone(), Language::En);
    editor.edit(|draft| draft.contact.subtitle = String::new());
    editor.save().unwrap();

    let reader = ContentReader::mount(site.source(), site.catalog.clone(), Language::En);
    let contact = reader.section::<Contact>();
    assert_eq!(contact.subtitle, "");
    assert_eq!(contact.title, site.catalog.defaults(Language::En).contact.title);
}

#[test]
fn garbage_in_storage_falls_back_to_defaults() {
    let site = Site::new();
    site.storage
        .set(DEFAULT_STORAGE_KEY, "definitely not json")
        .unwrap();

    let reader = ContentReader::mount(site.source(), site.catalog.clone(), Language::Pt);
    assert_eq!(reader.effective(), site.catalog.defaults(Language::Pt));

    let editor = AdminEditor::open(site.dyn_store(), site.catalog.clone(), Language::Pt);
    assert_eq!(editor.state(), EditorState::Idle);
    assert_eq!(editor.draft(), &site.catalog.defaults(Language::Pt));
}

#[test]
fn editor_save_keeps_other_language_entry() {
    let site = Site::new();

    let mut editor = AdminEditor::open(site.dyn_store(), site.catalog.clone(), Language::En);
    editor.edit(|draft| draft.cv.title = "Resume".into());
    editor.save().unwrap();

    editor.select_language(Language::Pt);
    editor.edit(|draft| draft.cv.title = "Currículo Vitae".into());
    editor.save().unwrap();

    let doc = site.store.load();
    assert_eq!(
        doc.en.unwrap().cv.unwrap().title.as_deref(),
        Some("Resume")
    );
    assert_eq!(
        doc.pt.unwrap().cv.unwrap().title.as_deref(),
        Some("Currículo Vitae")
    );
}

#[test]
fn rejected_level_keeps_both_languages_and_the_draft() {
    let site = Site::new();

    let mut en_editor = AdminEditor::open(site.dyn_store(), site.catalog.clone(), Language::En);
    en_editor.edit(|draft| draft.cv.title = "Resume".into());
    en_editor.save().unwrap();
    let before = site.store.load();
    let notified = site.store.notifier().notifications();

    let mut pt_editor = AdminEditor::open(site.dyn_store(), site.catalog.clone(), Language::Pt);
    pt_editor.edit(|draft| draft.skills.language_items[0].level = 150);

    assert!(matches!(pt_editor.save(), Err(SaveError::Invalid(_))));
    assert_eq!(pt_editor.state(), EditorState::Editing);
    assert_eq!(pt_editor.draft().skills.language_items[0].level, 150);

    assert_eq!(site.store.load(), before);
    assert_eq!(site.store.notifier().notifications(), notified);
    assert_eq!(
        site.store.load().en.unwrap().cv.unwrap().title.as_deref(),
        Some("Resume")
    );
}

#[test]
fn unmounted_readers_leave_no_listeners() {
    let site = Site::new();
    for language in Language::ALL.iter().cycle().take(20) {
        let reader = ContentReader::mount(site.source(), site.catalog.clone(), *language);
        reader.set_language(Language::En);
    }
    assert_eq!(site.store.notifier().listener_count(), 0);
}

#[test]
fn file_backed_store_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let site = Site::new();

    {
        let store = LocalContentStore::new(FileStorage::new(dir.path()));
        let mut doc = SiteContent::default();
        doc.set(
            Language::En,
            ContentOverrides {
                hero: Some(HeroOverrides {
                    greeting: Some("Hey,".into()),
                    ..Default::default()
                }),
                ..Default::default()
            },
        );
        store.save(&doc).unwrap();
    }

    let reopened = LocalContentStore::new(FileStorage::new(dir.path()));
    let hero: Hero = site_content::resolve_section(
        &reopened.load_language(Language::En),
        &site.catalog.defaults(Language::En),
    );
    assert_eq!(hero.greeting, "Hey,");
}
