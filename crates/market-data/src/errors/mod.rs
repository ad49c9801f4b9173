//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// Fetch operations make exactly one attempt per call; there is no retry
/// machinery behind these variants. Callers decide whether a failure is
/// fatal or degrades to a partial view.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The ticker input could not be turned into a usable symbol
    /// (empty or whitespace-only).
    #[error("Invalid ticker: {0:?}")]
    InvalidTicker(String),

    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// No data available for the requested range.
    /// The symbol exists but has no bars in the specified period.
    #[error("No data for range")]
    NoDataForRange,

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
