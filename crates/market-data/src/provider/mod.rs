//! Market data provider abstraction and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that providers implement
//! - The Yahoo Finance implementation backing the dashboard
//!
//! Providers make exactly one attempt per call, with no retry and no
//! cross-request caching. The caller owns the decision of what a failed
//! fetch means for the final view.

mod traits;

pub mod yahoo;

// Re-exports
pub use traits::MarketDataProvider;
pub use yahoo::YahooProvider;
