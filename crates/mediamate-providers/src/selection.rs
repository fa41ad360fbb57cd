//! Model selection policy and the "load models" flow.
//!
//! Canonical policy for a fresh listing: when auto-select is enabled, the
//! first entry becomes the selection if nothing was selected yet **or** the
//! previous selection no longer exists in the new list. A selection that is
//! still offered is never touched.

use mediamate_core::{NotificationSink, ProviderSettings, SettingsStore, Severity};
use tracing::{debug, warn};

use crate::client::ProviderClient;
use crate::error::ProviderError;

/// Apply a fresh model listing to the settings. Returns whether the
/// selection changed — the caller's persistence trigger.
pub fn apply_fresh_listing(settings: &mut ProviderSettings, models: &[String]) -> bool {
    if models.is_empty() || !settings.auto_select_first_model {
        return false;
    }

    let still_offered = models.iter().any(|m| *m == settings.selected_model);
    if settings.selected_model.is_empty() || !still_offered {
        debug!(
            from = %settings.selected_model,
            to = %models[0],
            "selection updated from fresh listing"
        );
        settings.selected_model = models[0].clone();
        return true;
    }

    false
}

/// The flow behind a "load models" action: list, apply the selection
/// policy, persist when the selection changed, and report the outcome
/// through the notification sink.
///
/// On failure the error is reported and propagated; `settings` is left
/// untouched. A persist failure downgrades to a warning — the listing
/// itself still succeeded.
pub async fn refresh_models(
    client: &ProviderClient,
    settings: &mut ProviderSettings,
    store: &dyn SettingsStore,
    sink: &dyn NotificationSink,
) -> Result<Vec<String>, ProviderError> {
    let models = match client.list_models(settings).await {
        Ok(models) => models,
        Err(e) => {
            sink.notify(Severity::Error, &format!("failed to load models: {e}"));
            return Err(e);
        }
    };

    if models.is_empty() {
        sink.notify(Severity::Warning, "provider returned no models");
        return Ok(models);
    }

    if apply_fresh_listing(settings, &models) {
        if let Err(e) = store.persist(settings).await {
            warn!("failed to persist selected model: {e}");
            sink.notify(Severity::Warning, "model list loaded, but saving the selection failed");
        } else {
            sink.notify(
                Severity::Info,
                &format!("{} models loaded, selected {}", models.len(), settings.selected_model),
            );
        }
    } else {
        sink.notify(Severity::Info, &format!("{} models loaded", models.len()));
    }

    Ok(models)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
