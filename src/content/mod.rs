//! Content model - per-language overrides and the effective content they resolve to.
//!
//! `SiteContent` is the persisted document: one optional [`ContentOverrides`]
//! per language. Every level is optional and absence means "use the
//! default", so resolution is always `override ?? default`, leaf by leaf.
//!
//! ## Example
//!
//! ```ignore
//! use site_content::{resolve_section, ContentOverrides, Hero, HeroOverrides};
//!
//! let overrides = ContentOverrides {
//!     hero: Some(HeroOverrides { name: Some("Ana Souza".into()), ..Default::default() }),
//!     ..Default::default()
//! };
//! let hero: Hero = resolve_section(&overrides, &defaults);
//! ```

mod items;
mod sections;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::language::Language;

pub use items::{EducationItem, ExperienceItem, LanguageItem, ServiceItem, StatItem, MAX_LEVEL};
pub use sections::{
    About, AboutOverrides, Contact, ContactOverrides, Cv, CvOverrides, Hero, HeroOverrides,
    Services, ServicesOverrides, Skills, SkillsOverrides,
};

/// A named group of content fields with an optional-everywhere overrides twin.
///
/// Implemented by `#[derive(Section)]`; the generated resolver is the only
/// place `override ?? default` is spelled out.
pub trait Section: Clone + Sized {
    /// Same fields as `Self`, each wrapped in `Option`.
    type Overrides: Clone + Default + PartialEq + Serialize + DeserializeOwned;

    /// Field name of this section in the content record ("hero", "cv", ...).
    const KEY: &'static str;

    /// Field-wise merge: a present override wins, including an empty string
    /// or empty list; an absent one falls back to the default.
    fn resolve(defaults: &Self, overrides: Option<&Self::Overrides>) -> Self;

    /// A full overrides record with every field present.
    fn to_overrides(&self) -> Self::Overrides;

    /// This section's overrides within a language record, if any.
    fn overrides_in(content: &ContentOverrides) -> Option<&Self::Overrides>;

    /// This section within a fully-populated record.
    fn defaults_in(content: &EffectiveContent) -> &Self;
}

/// Resolve one section of effective content from overrides and defaults.
pub fn resolve_section<S: Section>(overrides: &ContentOverrides, defaults: &EffectiveContent) -> S {
    S::resolve(S::defaults_in(defaults), S::overrides_in(overrides))
}

/// Admin-edited content for one language. Absent sections use the defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<ServicesOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<AboutOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<CvOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactOverrides>,
}

impl ContentOverrides {
    /// True when no section carries any override.
    pub fn is_empty(&self) -> bool {
        self.hero.as_ref().map_or(true, HeroOverrides::is_empty)
            && self.services.as_ref().map_or(true, ServicesOverrides::is_empty)
            && self.about.as_ref().map_or(true, AboutOverrides::is_empty)
            && self.skills.as_ref().map_or(true, SkillsOverrides::is_empty)
            && self.cv.as_ref().map_or(true, CvOverrides::is_empty)
            && self.contact.as_ref().map_or(true, ContactOverrides::is_empty)
    }

    /// Merge these overrides over `defaults`, section by section.
    pub fn resolve(&self, defaults: &EffectiveContent) -> EffectiveContent {
        EffectiveContent {
            hero: resolve_section(self, defaults),
            services: resolve_section(self, defaults),
            about: resolve_section(self, defaults),
            skills: resolve_section(self, defaults),
            cv: resolve_section(self, defaults),
            contact: resolve_section(self, defaults),
        }
    }
}

/// Fully-populated content for one language.
///
/// Both the catalog defaults and the result of resolving overrides over them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveContent {
    pub hero: Hero,
    pub services: Services,
    pub about: About,
    pub skills: Skills,
    pub cv: Cv,
    pub contact: Contact,
}

impl EffectiveContent {
    /// Snapshot every field as an override, as the admin editor persists it.
    pub fn to_overrides(&self) -> ContentOverrides {
        ContentOverrides {
            hero: Some(self.hero.to_overrides()),
            services: Some(self.services.to_overrides()),
            about: Some(self.about.to_overrides()),
            skills: Some(self.skills.to_overrides()),
            cv: Some(self.cv.to_overrides()),
            contact: Some(self.contact.to_overrides()),
        }
    }
}

/// The whole persisted document: overrides keyed by language code.
///
/// Read and written as one unit. Keys other than `pt` and `en` are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pt: Option<ContentOverrides>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<ContentOverrides>,
}

impl SiteContent {
    /// Parse a stored document. Fails on non-JSON or structurally invalid input.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn get(&self, language: Language) -> Option<&ContentOverrides> {
        match language {
            Language::Pt => self.pt.as_ref(),
            Language::En => self.en.as_ref(),
        }
    }

    /// Overrides for `language`, or an empty record when there is no entry.
    pub fn overrides(&self, language: Language) -> ContentOverrides {
        self.get(language).cloned().unwrap_or_default()
    }

    /// Replace the entry for `language`, leaving the other language untouched.
    pub fn set(&mut self, language: Language, overrides: ContentOverrides) {
        match language {
            Language::Pt => self.pt = Some(overrides),
            Language::En => self.en = Some(overrides),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pt.is_none() && self.en.is_none()
    }

    /// Check the bounds `parse` enforces, so a document that passes always
    /// reads back. Rust types cover everything else.
    pub fn validate(&self) -> Result<(), String> {
        for language in Language::ALL {
            let items = self
                .get(language)
                .and_then(|content| content.skills.as_ref())
                .and_then(|skills| skills.language_items.as_ref());

            for item in items.into_iter().flatten() {
                if item.level > MAX_LEVEL {
                    return Err(format!(
                        "{} language item {:?} has level {} (max {})",
                        language, item.name, item.level, MAX_LEVEL
                    ));
                }
            }
        }
        Ok(())
    }
}
