//! Notification port — how the core reports outcomes to the user.
//!
//! The host decides what a notification looks like (toast, alert, status
//! bar). The core only classifies the message and hands it over.

use tracing::{error, info, warn};

/// How loudly the host should present a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Sink for user-visible messages. Implemented by the host UI.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, severity: Severity, message: &str);
}

/// Default sink that routes notifications into the `tracing` log stream.
///
/// Useful for headless hosts and tests; real hosts supply their own sink.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => info!("{message}"),
            Severity::Warning => warn!("{message}"),
            Severity::Error => error!("{message}"),
        }
    }
}
