//! Failure classification for quote acquisition.
//!
//! Every variant here resolves to the synthetic fallback in
//! [`QuoteService`](crate::service::QuoteService); the enum exists so the
//! failure kinds stay separable in logs and tests instead of collapsing into
//! nested conditionals.

use thiserror::Error;

/// Why a real quote series could not be obtained from the provider.
#[derive(Error, Debug)]
pub enum QuoteFetchError {
    /// The provider reported an explicit error for the symbol.
    #[error("Provider error: {0}")]
    UpstreamError(String),

    /// The provider answered with a rate-limit or informational notice
    /// instead of data.
    #[error("Provider rate limited the request")]
    RateLimited,

    /// The expected data structure was absent or unusable.
    #[error("Malformed provider response: {0}")]
    Malformed(String),

    /// The request exceeded the fixed time budget.
    #[error("Provider request timed out")]
    Timeout,

    /// Transport-level failure below the HTTP payload.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
