//! Dialect registry — the closed set of REST conventions we can speak.
//!
//! Each [`DialectSpec`] bundles detection keywords, a request builder for
//! the list-models call, and a mapper from the provider's response shape to
//! a flat model list. Adding a provider means adding one entry here plus its
//! two functions; nothing else changes.

use mediamate_core::ProviderSettings;
use serde_json::Value;

use crate::error::ProviderError;

/// Fixed Gemini list-models endpoint; the key travels as a query parameter.
pub const GEMINI_MODELS_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The REST convention a provider speaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// `GET {base}/models` with bearer auth; models under `data[].id`.
    /// Covers OpenAI and Moonshot.
    OpenAiCompatible,
    /// `GET` the fixed Gemini endpoint with `?key=`; models under
    /// `models[].name`.
    GeminiCompatible,
}

/// A fully built list-models request, ready for the HTTP client.
#[derive(Clone, Debug)]
pub struct ModelsRequest {
    pub url: String,
    /// Bearer token for the Authorization header, when the dialect uses one.
    pub bearer: Option<String>,
}

/// One entry in the registration table.
#[derive(Debug)]
pub struct DialectSpec {
    /// Internal name (e.g. `"openai"`).
    pub name: &'static str,
    /// Human-readable name for logs.
    pub display_name: &'static str,
    /// URL substrings that select this dialect (lowercase).
    pub keywords: &'static [&'static str],
    pub dialect: Dialect,
    /// Build the list-models request from the user's settings.
    pub build_models_request: fn(&ProviderSettings) -> ModelsRequest,
    /// Map the response body to an ordered model list; `None` on a shape
    /// mismatch.
    pub map_models: fn(&Value) -> Option<Vec<String>>,
}

/// All supported dialects, in matching priority order.
pub static DIALECTS: &[DialectSpec] = &[
    DialectSpec {
        name: "openai",
        display_name: "OpenAI-compatible",
        keywords: &["moonshot", "openai"],
        dialect: Dialect::OpenAiCompatible,
        build_models_request: openai_models_request,
        map_models: map_openai_models,
    },
    DialectSpec {
        name: "gemini",
        display_name: "Google Gemini",
        keywords: &["googleapis"],
        dialect: Dialect::GeminiCompatible,
        build_models_request: gemini_models_request,
        map_models: map_gemini_models,
    },
];

/// Pick the dialect for an endpoint URL by substring match.
pub fn detect_dialect(endpoint_url: &str) -> Result<&'static DialectSpec, ProviderError> {
    let url_lower = endpoint_url.to_lowercase();
    DIALECTS
        .iter()
        .find(|spec| spec.keywords.iter().any(|kw| url_lower.contains(kw)))
        .ok_or_else(|| ProviderError::UnsupportedProvider(endpoint_url.to_string()))
}

/// Reduce a configured endpoint to its API base: users paste either the
/// base URL or the full `/chat/completions` URL, both must work.
fn models_base(endpoint_url: &str) -> &str {
    let base = endpoint_url.trim_end_matches('/');
    let base = base.strip_suffix("/chat/completions").unwrap_or(base);
    base.trim_end_matches('/')
}

fn openai_models_request(settings: &ProviderSettings) -> ModelsRequest {
    ModelsRequest {
        url: format!("{}/models", models_base(&settings.endpoint_url)),
        bearer: Some(settings.api_key.clone()),
    }
}

fn gemini_models_request(settings: &ProviderSettings) -> ModelsRequest {
    ModelsRequest {
        url: format!("{GEMINI_MODELS_URL}?key={}", settings.api_key),
        bearer: None,
    }
}

fn map_openai_models(body: &Value) -> Option<Vec<String>> {
    body.get("data")?
        .as_array()?
        .iter()
        .map(|entry| entry.get("id")?.as_str().map(String::from))
        .collect()
}

fn map_gemini_models(body: &Value) -> Option<Vec<String>> {
    body.get("models")?
        .as_array()?
        .iter()
        .map(|entry| entry.get("name")?.as_str().map(String::from))
        .collect()
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(url: &str, key: &str) -> ProviderSettings {
        ProviderSettings {
            endpoint_url: url.to_string(),
            api_key: key.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn moonshot_url_is_openai_compatible() {
        let spec = detect_dialect("https://api.moonshot.cn/v1/chat/completions").unwrap();
        assert_eq!(spec.dialect, Dialect::OpenAiCompatible);
    }

    #[test]
    fn openai_url_is_openai_compatible() {
        let spec = detect_dialect("https://api.openai.com/v1").unwrap();
        assert_eq!(spec.dialect, Dialect::OpenAiCompatible);
    }

    #[test]
    fn googleapis_url_is_gemini() {
        let spec = detect_dialect(
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent",
        )
        .unwrap();
        assert_eq!(spec.dialect, Dialect::GeminiCompatible);
    }

    #[test]
    fn unknown_url_is_rejected() {
        let err = detect_dialect("https://example.com/api").unwrap_err();
        assert!(matches!(err, ProviderError::UnsupportedProvider(_)));
    }

    #[test]
    fn detection_is_case_insensitive() {
        let spec = detect_dialect("https://API.OPENAI.com/v1").unwrap();
        assert_eq!(spec.name, "openai");
    }

    #[test]
    fn models_base_strips_completions_suffix() {
        assert_eq!(
            models_base("https://api.moonshot.cn/v1/chat/completions"),
            "https://api.moonshot.cn/v1"
        );
        assert_eq!(
            models_base("https://api.moonshot.cn/v1/chat/completions/"),
            "https://api.moonshot.cn/v1"
        );
        assert_eq!(models_base("https://api.openai.com/v1/"), "https://api.openai.com/v1");
        assert_eq!(models_base("https://api.openai.com/v1"), "https://api.openai.com/v1");
    }

    #[test]
    fn openai_request_carries_bearer() {
        let request = openai_models_request(&settings(
            "https://api.openai.com/v1/chat/completions",
            "sk-test",
        ));
        assert_eq!(request.url, "https://api.openai.com/v1/models");
        assert_eq!(request.bearer.as_deref(), Some("sk-test"));
    }

    #[test]
    fn gemini_request_uses_fixed_url_and_query_key() {
        let request = gemini_models_request(&settings(
            "https://generativelanguage.googleapis.com/v1beta",
            "AIza-test",
        ));
        assert_eq!(
            request.url,
            "https://generativelanguage.googleapis.com/v1beta/models?key=AIza-test"
        );
        assert!(request.bearer.is_none());
    }

    #[test]
    fn openai_mapping_preserves_order() {
        let body = json!({"data": [{"id": "m1"}, {"id": "m2"}]});
        assert_eq!(map_openai_models(&body), Some(vec!["m1".into(), "m2".into()]));
    }

    #[test]
    fn gemini_mapping_preserves_order() {
        let body = json!({"models": [{"name": "g1"}, {"name": "g2"}]});
        assert_eq!(map_gemini_models(&body), Some(vec!["g1".into(), "g2".into()]));
    }

    #[test]
    fn mapping_rejects_wrong_shape() {
        assert_eq!(map_openai_models(&json!({"models": []})), None);
        assert_eq!(map_openai_models(&json!({"data": [{"name": "x"}]})), None);
        assert_eq!(map_gemini_models(&json!({"data": []})), None);
    }

    #[test]
    fn dialect_names_are_unique() {
        let mut names: Vec<&str> = DIALECTS.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DIALECTS.len());
    }
}
