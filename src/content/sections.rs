//! The six page sections, in their fully-populated shape.
//!
//! Each derives [`Section`](crate::Section), which generates the matching
//! `*Overrides` struct (every field optional) and the field-wise resolver.

use serde::{Deserialize, Serialize};
use site_content_macros::Section;

use super::items::{EducationItem, ExperienceItem, LanguageItem, ServiceItem, StatItem};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Section)]
#[serde(rename_all = "camelCase")]
#[section(key = "hero")]
pub struct Hero {
    pub greeting: String,
    pub name: String,
    pub subtitle: String,
    pub description: String,
    pub cta: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Section)]
#[serde(rename_all = "camelCase")]
#[section(key = "services")]
pub struct Services {
    pub kicker: String,
    pub title: String,
    pub subtitle: String,
    pub items: Vec<ServiceItem>,
    pub stats: Vec<StatItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Section)]
#[serde(rename_all = "camelCase")]
#[section(key = "about")]
pub struct About {
    pub title: String,
    pub bio: String,
    pub titles_label: String,
    pub titles: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Section)]
#[serde(rename_all = "camelCase")]
#[section(key = "skills")]
pub struct Skills {
    pub title: String,
    pub tech: String,
    pub languages: String,
    pub tech_items: Vec<String>,
    pub language_items: Vec<LanguageItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Section)]
#[serde(rename_all = "camelCase")]
#[section(key = "cv")]
pub struct Cv {
    pub title: String,
    pub download: String,
    pub experience: String,
    pub education: String,
    pub experience_items: Vec<ExperienceItem>,
    pub education_items: Vec<EducationItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Section)]
#[serde(rename_all = "camelCase")]
#[section(key = "contact")]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub send: String,
    pub info_email: String,
    pub info_phone: String,
    pub info_location: String,
}
