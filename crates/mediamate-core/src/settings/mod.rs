//! Persisted provider settings and the store port behind them.

pub mod debounce;
pub mod schema;
pub mod store;

pub use debounce::DebouncedSaver;
pub use schema::ProviderSettings;
pub use store::{JsonFileStore, MemoryStore, SettingsError, SettingsStore};
