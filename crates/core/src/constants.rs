//! Constants used across the dashboard services.

/// Ticker preloaded into the symbol prompt before the user types anything.
pub const DEFAULT_TICKER: &str = "005930.KS";

/// Placeholder shown for metric values the provider did not supply.
pub const NOT_AVAILABLE: &str = "N/A";

/// Decimal places kept on valuation ratio values.
pub const RATIO_DECIMAL_PRECISION: u32 = 6;
