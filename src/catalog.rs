//! Translation catalog - the static default content for each language.

use std::fs;
use std::path::Path;

use crate::content::EffectiveContent;
use crate::error::CatalogError;
use crate::language::Language;

const BUILTIN_PT: &str = include_str!("../catalog/pt.json");
const BUILTIN_EN: &str = include_str!("../catalog/en.json");

/// Source of default content. Pure: the same language always yields the same record.
pub trait TranslationCatalog: Send + Sync {
    fn defaults(&self, language: Language) -> EffectiveContent;
}

/// Catalog holding one immutable record per language.
#[derive(Clone, Debug)]
pub struct StaticCatalog {
    pt: EffectiveContent,
    en: EffectiveContent,
}

impl StaticCatalog {
    pub fn new(pt: EffectiveContent, en: EffectiveContent) -> Self {
        Self { pt, en }
    }

    /// The dictionaries shipped with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PT, BUILTIN_EN)
    }

    pub fn from_json(pt: &str, en: &str) -> Result<Self, CatalogError> {
        Ok(Self {
            pt: parse_dictionary(Language::Pt, pt)?,
            en: parse_dictionary(Language::En, en)?,
        })
    }

    /// Load `pt.json` and `en.json` from `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let read = |language: Language| {
            let path = dir.join(format!("{}.json", language.code()));
            fs::read_to_string(&path)
                .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))
        };
        Self::from_json(&read(Language::Pt)?, &read(Language::En)?)
    }
}

impl TranslationCatalog for StaticCatalog {
    fn defaults(&self, language: Language) -> EffectiveContent {
        match language {
            Language::Pt => self.pt.clone(),
            Language::En => self.en.clone(),
        }
    }
}

fn parse_dictionary(language: Language, raw: &str) -> Result<EffectiveContent, CatalogError> {
    serde_json::from_str(raw).map_err(|e| CatalogError::Malformed {
        language: language.code().to_string(),
        reason: e.to_string(),
    })
}
