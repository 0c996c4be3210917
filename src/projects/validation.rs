//! Field rules for the project form.

use std::fmt;

use thiserror::Error;

use super::ProjectDraft;

pub const TITLE_MIN: usize = 3;
pub const TITLE_MAX: usize = 100;
pub const DESCRIPTION_MIN: usize = 10;
pub const DESCRIPTION_MAX: usize = 500;

/// Why a single field was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("is required")]
    Required,
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("must be at most {max} characters")]
    TooLong { max: usize },
    #[error("must start with http:// or https://")]
    InvalidUrl,
}

/// Every rejected field of a form, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<(&'static str, FieldError)>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The error recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, err)| err)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldError)> {
        self.errors.iter().map(|(name, err)| (*name, err))
    }

    fn push(&mut self, field: &'static str, error: FieldError) {
        self.errors.push((field, error));
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, err)) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} {}", field, err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check a project draft against the form rules.
pub fn validate(draft: &ProjectDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Some(err) = text_rule(&draft.title, TITLE_MIN, TITLE_MAX) {
        errors.push("title", err);
    }
    if let Some(err) = text_rule(&draft.description, DESCRIPTION_MIN, DESCRIPTION_MAX) {
        errors.push("description", err);
    }
    if draft.technologies.iter().all(|t| t.trim().is_empty()) {
        errors.push("technologies", FieldError::Required);
    }

    for (field, value) in [
        ("link", &draft.link),
        ("github", &draft.github),
        ("image", &draft.image),
    ] {
        if let Some(url) = value.as_deref().filter(|v| !v.is_empty()) {
            if !is_http_url(url) {
                errors.push(field, FieldError::InvalidUrl);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn text_rule(value: &str, min: usize, max: usize) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::Required);
    }
    let len = value.chars().count();
    if len < min {
        Some(FieldError::TooShort { min })
    } else if len > max {
        Some(FieldError::TooLong { max })
    } else {
        None
    }
}

fn is_http_url(value: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
}
