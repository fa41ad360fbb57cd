//! Settings store port and its two stock implementations.
//!
//! Hosts that manage persistence themselves implement [`SettingsStore`] and
//! hand it in; everyone else gets [`JsonFileStore`] (pretty-printed camelCase
//! JSON at a caller-chosen path) or [`MemoryStore`] (tests, ephemeral hosts).

use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::schema::ProviderSettings;

/// Errors surfaced by a settings store.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Port for loading and persisting [`ProviderSettings`].
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn load(&self) -> Result<ProviderSettings, SettingsError>;
    async fn persist(&self, settings: &ProviderSettings) -> Result<(), SettingsError>;
}

// ─────────────────────────────────────────────
// JsonFileStore
// ─────────────────────────────────────────────

/// File-backed store. A missing or unreadable file loads as defaults rather
/// than failing — a fresh install has no settings yet.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsStore for JsonFileStore {
    async fn load(&self) -> Result<ProviderSettings, SettingsError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("no settings file at {}, using defaults", self.path.display());
                return Ok(ProviderSettings::default());
            }
            Err(e) => {
                warn!("failed to read settings file {}: {}", self.path.display(), e);
                return Ok(ProviderSettings::default());
            }
        };

        match serde_json::from_str(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!("failed to parse settings file {}: {}", self.path.display(), e);
                Ok(ProviderSettings::default())
            }
        }
    }

    async fn persist(&self, settings: &ProviderSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(settings)?;
        tokio::fs::write(&self.path, json).await?;
        debug!("settings saved to {}", self.path.display());
        Ok(())
    }
}

// ─────────────────────────────────────────────
// MemoryStore
// ─────────────────────────────────────────────

/// In-memory store. Never fails.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<ProviderSettings>,
}

impl MemoryStore {
    pub fn new(settings: ProviderSettings) -> Self {
        Self {
            inner: Mutex::new(settings),
        }
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn load(&self) -> Result<ProviderSettings, SettingsError> {
        Ok(self.inner.lock().expect("settings lock poisoned").clone())
    }

    async fn persist(&self, settings: &ProviderSettings) -> Result<(), SettingsError> {
        *self.inner.lock().expect("settings lock poisoned") = settings.clone();
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
