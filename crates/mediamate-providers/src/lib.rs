//! Provider adapter for MediaMate.
//!
//! Talks to whichever chat-completion REST dialect the configured endpoint
//! speaks and normalizes the differences away:
//!
//! - [`dialect`] — closed registration table mapping URL keywords to a
//!   request builder and a response mapper per dialect.
//! - [`client::ProviderClient`] — model listing and the test-prompt call.
//! - [`selection`] — what a fresh model listing does to the saved
//!   selection, and the full "load models" flow.
//!
//! The host owns `ProviderSettings` and passes it into each call; nothing
//! here holds ambient state beyond the pooled HTTP client.

pub mod client;
pub mod dialect;
pub mod error;
pub mod selection;

pub use client::{ProviderClient, TEST_PROMPT};
pub use dialect::{detect_dialect, Dialect, DialectSpec, ModelsRequest, DIALECTS};
pub use error::ProviderError;
pub use selection::{apply_fresh_listing, refresh_models};
