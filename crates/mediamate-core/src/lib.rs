//! Shared ports and configuration for MediaMate.
//!
//! The host application owns the UI and the event wiring; this crate holds
//! what the file pipeline and the provider adapter both depend on:
//!
//! - [`settings`] — the persisted [`settings::ProviderSettings`] record, the
//!   [`settings::SettingsStore`] port, a JSON-file implementation, and a
//!   debounced saver.
//! - [`notify`] — the [`notify::NotificationSink`] port for surfacing
//!   success/warning/error messages without rendering anything here.

pub mod notify;
pub mod settings;

pub use notify::{NotificationSink, Severity, TracingSink};
pub use settings::{
    DebouncedSaver, JsonFileStore, MemoryStore, ProviderSettings, SettingsError, SettingsStore,
};
