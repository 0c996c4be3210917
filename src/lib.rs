// `#[derive(Section)]` expands to `site_content::...` paths, including inside this crate.
extern crate self as site_content;

mod catalog;
mod config;
mod content;
mod editor;
mod error;
mod language;
mod notifier;
pub mod projects;
mod reader;
mod storage;
mod store;
mod transport;

pub use catalog::{StaticCatalog, TranslationCatalog};
pub use config::{RemoteConfig, SiteContentConfig};
pub use content::{
    resolve_section, About, AboutOverrides, Contact, ContactOverrides, ContentOverrides, Cv,
    CvOverrides, EducationItem, EffectiveContent, ExperienceItem, Hero, HeroOverrides,
    LanguageItem, Section, ServiceItem, Services, ServicesOverrides, SiteContent, Skills,
    SkillsOverrides, StatItem, MAX_LEVEL,
};
pub use editor::{AdminEditor, EditorState};
pub use error::{
    CatalogError, ConfigError, ProjectError, SaveError, StorageError, TransportError,
    UnknownLanguage,
};
pub use language::Language;
pub use notifier::{ChangeNotifier, Subscription, SITE_CONTENT_UPDATED};
pub use reader::ContentReader;
pub use storage::{FileStorage, InMemoryStorage, KeyValueStorage};
pub use store::{ContentStore, LocalContentStore, DEFAULT_STORAGE_KEY};
pub use transport::{ContentSource, RemoteTransport};

#[cfg(feature = "emitter")]
pub use notifier::EmitterBridge;
#[cfg(feature = "remote")]
pub use transport::RestTransport;

// Derive macro for content sections
pub use site_content_macros::Section;

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
