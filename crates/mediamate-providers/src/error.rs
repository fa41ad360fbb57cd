//! Errors for the provider adapter.

/// What went wrong while talking to a provider.
///
/// Everything is detected at the point of failure and propagated; the
/// adapter never retries and never swallows an error.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("endpoint URL and API key must both be set")]
    MissingCredential,

    #[error("endpoint URL, API key, and selected model must all be set")]
    MissingConfig,

    #[error("no supported provider matches endpoint {0:?}")]
    UnsupportedProvider(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("response did not match the expected shape: {0}")]
    MalformedResponse(String),
}
