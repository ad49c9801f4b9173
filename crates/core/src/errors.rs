use thiserror::Error;

use stockboard_market_data::MarketDataError;

/// Type alias for Results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the core services.
///
/// Dashboard assembly itself is infallible; errors arise only while a
/// request is being prepared, before any fetch runs.
#[derive(Debug, Error)]
pub enum Error {
    /// Errors propagated from the market data provider layer.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),
}
