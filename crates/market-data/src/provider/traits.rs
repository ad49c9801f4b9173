//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{
    FinancialStatements, FundamentalsSnapshot, HistoryInterval, HistoryRange, PricePoint, Ticker,
};

/// Trait for market data providers.
///
/// The three fetch operations map one-to-one onto the dashboard's fetch
/// groups. Implementations must keep them independent: each call stands
/// alone, and a failure in one group must not poison a later call for
/// another group.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use stockboard_market_data::provider::MarketDataProvider;
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl MarketDataProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     // ... implement the three fetch operations
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the point-in-time fundamentals snapshot for a ticker.
    ///
    /// Fields the provider does not publish for this instrument come back
    /// as `None`, never as an error. An error means the fetch itself failed.
    async fn get_snapshot(
        &self,
        ticker: &Ticker,
    ) -> Result<FundamentalsSnapshot, MarketDataError>;

    /// Fetch the three periodic financial statements for a ticker.
    ///
    /// Instruments without filings (funds, indices) yield empty tables,
    /// not errors.
    async fn get_statements(
        &self,
        ticker: &Ticker,
    ) -> Result<FinancialStatements, MarketDataError>;

    /// Fetch closing-price history over `range`, sampled at `interval`.
    ///
    /// Points are ordered by date ascending. Bars the provider reported
    /// without a usable close have `close = None`; dropping them is the
    /// caller's call.
    async fn get_price_history(
        &self,
        ticker: &Ticker,
        range: HistoryRange,
        interval: HistoryInterval,
    ) -> Result<Vec<PricePoint>, MarketDataError>;
}
