//! Debounced settings persistence.
//!
//! UI hosts fire a save request on every keystroke in the settings panel.
//! [`DebouncedSaver`] coalesces a burst of requests into a single write once
//! the input has been quiet for the configured period. Last write wins.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::warn;

use super::schema::ProviderSettings;
use super::store::SettingsStore;

/// Handle that accepts save requests and flushes them lazily.
///
/// Dropping the handle closes the channel; a pending snapshot is still
/// flushed before the background task exits.
pub struct DebouncedSaver {
    tx: mpsc::UnboundedSender<ProviderSettings>,
}

impl DebouncedSaver {
    /// Spawn the background flusher. `quiet` is how long the input must stay
    /// idle before the latest snapshot is written.
    pub fn new(store: Arc<dyn SettingsStore>, quiet: Duration) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<ProviderSettings>();

        tokio::spawn(async move {
            while let Some(mut pending) = rx.recv().await {
                // Absorb further requests until the quiet period elapses.
                loop {
                    match tokio::time::timeout(quiet, rx.recv()).await {
                        Ok(Some(next)) => pending = next,
                        Ok(None) => {
                            // Sender dropped: final flush, then exit.
                            if let Err(e) = store.persist(&pending).await {
                                warn!("final settings flush failed: {e}");
                            }
                            return;
                        }
                        Err(_) => break,
                    }
                }
                if let Err(e) = store.persist(&pending).await {
                    warn!("debounced settings save failed: {e}");
                }
            }
        });

        Self { tx }
    }

    /// Queue a snapshot for saving. Never blocks.
    pub fn request_save(&self, settings: ProviderSettings) {
        // Send only fails once the flusher has exited, at which point there
        // is nothing left to save to.
        let _ = self.tx.send(settings);
    }
}
