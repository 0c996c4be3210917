//! Configuration for the content stores and the optional hosted backend.
//!
//! Loaded from a TOML file, then overridden from the environment:
//!
//! ```toml
//! storage_dir = "data"
//! storage_key = "siteContent"
//!
//! [remote]
//! url = "https://abc.supabase.co"
//! anon_key = "..."
//! ```
//!
//! The builders at the bottom turn a loaded config into the file-backed
//! stores and the reader load path.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, TransportError};
use crate::projects::{ProjectStore, DEFAULT_PROJECTS_KEY};
use crate::storage::FileStorage;
use crate::store::{ContentStore, LocalContentStore, DEFAULT_STORAGE_KEY};
use crate::transport::ContentSource;
#[cfg(feature = "remote")]
use crate::transport::RestTransport;

/// Environment variable overriding `storage_dir`.
pub const ENV_STORAGE_DIR: &str = "SITE_CONTENT_STORAGE_DIR";
/// Environment variable carrying the hosted backend URL.
pub const ENV_REMOTE_URL: &str = "SUPABASE_URL";
/// Environment variable carrying the hosted backend public key.
pub const ENV_REMOTE_KEY: &str = "SUPABASE_ANON_KEY";

/// Default remote table holding one row per language.
pub const DEFAULT_REMOTE_TABLE: &str = "site_content";
/// Default remote request timeout.
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 5_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContentConfig {
    /// Directory for file-backed storage.
    pub storage_dir: PathBuf,
    /// Key of the site content document.
    pub storage_key: String,
    /// Key of the project list.
    pub projects_key: String,
    /// Hosted backend used as an alternate read path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

impl Default for SiteContentConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("data"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            projects_key: DEFAULT_PROJECTS_KEY.to_string(),
            remote: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub url: String,
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl RemoteConfig {
    /// Remote settings from the environment, if both URL and key are set.
    pub fn from_env() -> Option<Self> {
        let url = env::var(ENV_REMOTE_URL).ok().filter(|v| !v.trim().is_empty())?;
        let anon_key = env::var(ENV_REMOTE_KEY).ok().filter(|v| !v.trim().is_empty())?;
        Some(Self {
            url,
            anon_key,
            table: default_table(),
            timeout_ms: default_timeout_ms(),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_table() -> String {
    DEFAULT_REMOTE_TABLE.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_REMOTE_TIMEOUT_MS
}

impl SiteContentConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&raw)
    }

    /// File config with environment overrides applied on top.
    pub fn load_with_env(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::load(path)?.with_env_overrides()
    }

    /// Apply environment overrides. Remote settings from the environment
    /// replace the file's URL and key but keep its table and timeout. The
    /// result is validated like a file config.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(dir) = env::var_os(ENV_STORAGE_DIR).filter(|v| !v.is_empty()) {
            self.storage_dir = PathBuf::from(dir);
        }

        if let Some(env_remote) = RemoteConfig::from_env() {
            self.remote = Some(match self.remote.take() {
                Some(file_remote) => RemoteConfig {
                    url: env_remote.url,
                    anon_key: env_remote.anon_key,
                    ..file_remote
                },
                None => env_remote,
            });
        }

        self.validate()?;
        Ok(self)
    }

    /// True when a usable remote backend is configured.
    pub fn remote_enabled(&self) -> bool {
        self.remote
            .as_ref()
            .is_some_and(|r| !r.url.trim().is_empty() && !r.anon_key.trim().is_empty())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "storage_key",
                reason: "must not be empty".into(),
            });
        }
        if self.projects_key.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "projects_key",
                reason: "must not be empty".into(),
            });
        }
        if self.storage_key == self.projects_key {
            return Err(ConfigError::Invalid {
                field: "projects_key",
                reason: "must differ from storage_key".into(),
            });
        }
        if let Some(remote) = &self.remote {
            if !(remote.url.starts_with("http://") || remote.url.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    field: "remote.url",
                    reason: format!("{:?} is not an http(s) URL", remote.url),
                });
            }
            if remote.timeout_ms == 0 {
                return Err(ConfigError::Invalid {
                    field: "remote.timeout_ms",
                    reason: "must be positive".into(),
                });
            }
        }
        Ok(())
    }

    pub fn file_storage(&self) -> FileStorage {
        FileStorage::new(self.storage_dir.clone())
    }

    /// Site content store under `storage_dir`, keyed by `storage_key`.
    pub fn content_store(&self) -> LocalContentStore<FileStorage> {
        LocalContentStore::with_key(self.file_storage(), self.storage_key.clone())
    }

    /// Project list under `storage_dir`, keyed by `projects_key`.
    pub fn project_store(&self) -> ProjectStore<FileStorage> {
        ProjectStore::with_key(self.file_storage(), self.projects_key.clone())
    }

    /// Reader load path over `store`: the hosted backend first when one is
    /// configured, local storage otherwise.
    pub fn content_source(
        &self,
        store: Arc<dyn ContentStore>,
    ) -> Result<ContentSource, TransportError> {
        match self.remote.as_ref().filter(|_| self.remote_enabled()) {
            #[cfg(feature = "remote")]
            Some(remote) => {
                let transport = RestTransport::new(remote)?;
                tracing::debug!(
                    endpoint = transport.endpoint(),
                    "reading content through remote backend"
                );
                Ok(ContentSource::with_remote(store, Arc::new(transport)))
            }
            #[cfg(not(feature = "remote"))]
            Some(_) => {
                tracing::warn!(
                    "remote backend configured but the `remote` feature is off, reading local storage"
                );
                Ok(ContentSource::local(store))
            }
            None => Ok(ContentSource::local(store)),
        }
    }
}
