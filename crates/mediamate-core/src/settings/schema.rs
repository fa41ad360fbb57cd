//! Typed settings record for the provider adapter.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! `#[serde(rename_all = "camelCase")]` handles the conversion.

use serde::{Deserialize, Serialize};

/// User configuration for one chat-completion provider.
///
/// Mutable, persisted through a [`super::SettingsStore`]. `selected_model`
/// stays empty until a model listing or a manual pick sets it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderSettings {
    /// Provider base URL or full `/chat/completions` URL.
    pub endpoint_url: String,
    /// Bearer token (OpenAI-style) or `?key=` credential (Gemini-style).
    pub api_key: String,
    /// Provider-specific model identifier.
    pub selected_model: String,
    /// Whether a fresh model listing may pick the first entry automatically.
    pub auto_select_first_model: bool,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint_url: String::new(),
            api_key: String::new(),
            selected_model: String::new(),
            auto_select_first_model: true,
        }
    }
}

impl ProviderSettings {
    /// Whether the endpoint and credential needed for a listing are present.
    pub fn has_credentials(&self) -> bool {
        !self.endpoint_url.is_empty() && !self.api_key.is_empty()
    }

    /// Whether everything needed for a chat call is present.
    pub fn is_complete(&self) -> bool {
        self.has_credentials() && !self.selected_model.is_empty()
    }
}
