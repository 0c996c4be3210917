//! Projects - the ordered portfolio project list edited from the admin panel.
//!
//! Stored as one JSON array next to the site content document. Like the
//! content store, every change rewrites the whole list.

mod validation;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ProjectError;
use crate::storage::KeyValueStorage;

pub use validation::{
    validate, FieldError, ValidationErrors, DESCRIPTION_MAX, DESCRIPTION_MIN, TITLE_MAX,
    TITLE_MIN,
};

/// Storage key of the project list unless configured otherwise.
pub const DEFAULT_PROJECTS_KEY: &str = "projects";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Position in the list, 0-based.
    #[serde(default)]
    pub order: usize,
}

/// The editable fields of a project, as submitted by the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub github: Option<String>,
    pub image: Option<String>,
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate(self)
    }

    fn apply_to(self, project: &mut Project) {
        project.title = self.title;
        project.description = self.description;
        project.technologies = self.technologies;
        project.link = self.link.filter(|v| !v.is_empty());
        project.github = self.github.filter(|v| !v.is_empty());
        project.image = self.image.filter(|v| !v.is_empty());
    }
}

/// Project list persisted in a [`KeyValueStorage`].
pub struct ProjectStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> ProjectStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_PROJECTS_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored projects in display order. A missing or malformed list is empty.
    pub fn list(&self) -> Vec<Project> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read projects");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(projects) => projects,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored projects are malformed");
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<Project> {
        self.list().into_iter().find(|p| p.id == id)
    }

    /// Validate and append a new project at the end of the list.
    pub fn create(&self, draft: ProjectDraft) -> Result<Project, ProjectError> {
        draft.validate()?;

        let mut projects = self.list();
        let mut project = Project {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            description: String::new(),
            technologies: Vec::new(),
            link: None,
            github: None,
            image: None,
            order: projects.len(),
        };
        draft.apply_to(&mut project);

        projects.push(project.clone());
        self.persist(&projects)?;
        Ok(project)
    }

    /// Validate and replace the editable fields of project `id`.
    pub fn update(&self, id: &str, draft: ProjectDraft) -> Result<Project, ProjectError> {
        draft.validate()?;

        let mut projects = self.list();
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ProjectError::NotFound(id.to_string()))?;
        draft.apply_to(project);
        let updated = project.clone();

        self.persist(&projects)?;
        Ok(updated)
    }

    /// Remove project `id`. Returns false if it did not exist.
    pub fn delete(&self, id: &str) -> Result<bool, ProjectError> {
        let mut projects = self.list();
        let before = projects.len();
        projects.retain(|p| p.id != id);
        if projects.len() == before {
            return Ok(false);
        }

        renumber(&mut projects);
        self.persist(&projects)?;
        Ok(true)
    }

    /// Move the project at position `from` to position `to` and renumber.
    pub fn reorder(&self, from: usize, to: usize) -> Result<Vec<Project>, ProjectError> {
        let mut projects = self.list();
        let len = projects.len();
        for index in [from, to] {
            if index >= len {
                return Err(ProjectError::OutOfRange { index, len });
            }
        }

        let moved = projects.remove(from);
        projects.insert(to, moved);
        renumber(&mut projects);

        self.persist(&projects)?;
        Ok(projects)
    }

    fn persist(&self, projects: &[Project]) -> Result<(), ProjectError> {
        let json =
            serde_json::to_string(projects).map_err(|e| ProjectError::Serialize(e.to_string()))?;
        self.storage.set(&self.key, &json)?;
        Ok(())
    }
}

fn renumber(projects: &mut [Project]) {
    for (i, project) in projects.iter_mut().enumerate() {
        project.order = i;
    }
}
