//! List entries carried by content sections.

use serde::{Deserialize, Deserializer, Serialize};

/// Highest skill level a language item may carry.
pub const MAX_LEVEL: u8 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub title: String,
    pub projects: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub value: String,
    pub label: String,
}

/// A spoken language and how well it is spoken.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageItem {
    pub name: String,
    /// Proficiency in percent, `0..=100`.
    #[serde(deserialize_with = "deserialize_level")]
    pub level: u8,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub role: String,
    pub company: String,
    pub period: String,
    pub details: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub title: String,
    pub school: String,
    pub period: String,
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let level = u8::deserialize(deserializer)?;
    if level > MAX_LEVEL {
        return Err(serde::de::Error::custom(format!(
            "language level {} exceeds {}",
            level, MAX_LEVEL
        )));
    }
    Ok(level)
}
