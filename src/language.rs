use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownLanguage;

/// Languages the site is published in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Pt, Language::En];

    /// The two-letter code used as the storage key.
    pub fn code(self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    /// Pick a site language from a browser locale such as `pt-BR` or `en-US`.
    ///
    /// Every Portuguese variant maps to `Pt`; anything else falls back to `En`.
    pub fn from_locale(locale: &str) -> Language {
        let prefix = locale.trim().get(..2);
        if prefix.is_some_and(|p| p.eq_ignore_ascii_case("pt")) {
            Language::Pt
        } else {
            Language::En
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}
