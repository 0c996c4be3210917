//! Integration tests for the project list on file-backed storage.

use site_content::projects::{FieldError, ProjectDraft, ProjectStore};
use site_content::{
    ContentStore, FileStorage, KeyValueStorage, LocalContentStore, ProjectError, SiteContent,
};

fn draft(title: &str, technologies: &[&str]) -> ProjectDraft {
    ProjectDraft {
        title: title.into(),
        description: "A project description long enough".into(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        link: None,
        github: Some("https://github.com/example/repo".into()),
        image: None,
    }
}

#[test]
fn project_list_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let store = ProjectStore::new(FileStorage::new(dir.path()));
        store.create(draft("Storefront", &["Next.js"])).unwrap();
        store.create(draft("Dashboard", &["React", "Node.js"])).unwrap()
    };

    let store = ProjectStore::new(FileStorage::new(dir.path()));
    let projects = store.list();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[1], created);
    assert_eq!(projects[1].technologies, vec!["React", "Node.js"]);
}

#[test]
fn projects_and_site_content_share_storage_without_clashing() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let projects = ProjectStore::new(storage.clone());
    let content = LocalContentStore::new(storage.clone());

    projects.create(draft("Storefront", &["Next.js"])).unwrap();
    content.save(&SiteContent::default()).unwrap();

    assert_eq!(projects.list().len(), 1);
    assert_eq!(content.load(), SiteContent::default());
    assert!(storage.get("projects").unwrap().is_some());
    assert!(storage.get("siteContent").unwrap().is_some());
}

#[test]
fn invalid_update_leaves_project_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProjectStore::new(FileStorage::new(dir.path()));
    let created = store.create(draft("Storefront", &["Next.js"])).unwrap();

    let err = store.update(&created.id, draft("Storefront", &[])).unwrap_err();
    match err {
        ProjectError::Validation(errors) => {
            assert_eq!(errors.get("technologies"), Some(&FieldError::Required));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(store.get(&created.id), Some(created));
}

#[test]
fn drag_reorder_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = ProjectStore::new(FileStorage::new(dir.path()));
    for title in ["One", "Two", "Three", "Four"] {
        store.create(draft(title, &["Rust"])).unwrap();
    }

    store.reorder(0, 3).unwrap();
    store.reorder(1, 0).unwrap();

    let titles: Vec<_> = store.list().into_iter().map(|p| (p.order, p.title)).collect();
    assert_eq!(
        titles,
        vec![
            (0, "Three".to_string()),
            (1, "Two".to_string()),
            (2, "Four".to_string()),
            (3, "One".to_string()),
        ]
    );
}
