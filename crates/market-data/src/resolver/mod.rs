//! Market context resolution from ticker suffixes.
//!
//! Exchange suffixes identify the listing market (".KS" for KOSPI, ".KQ" for
//! KOSDAQ, ".T" for Tokyo). The market decides the currency line shown above
//! statement tables and the unit every raw statement value is scaled by:
//! Korean filings are shown in hundreds of millions of won, Japanese filings
//! in millions of yen, everything else in millions of US dollars.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Ticker;

/// Listing market derived from the ticker suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketCode {
    /// KOSPI or KOSDAQ listing (".KS" / ".KQ").
    #[serde(rename = "KR")]
    Korea,
    /// Tokyo Stock Exchange listing (".T").
    #[serde(rename = "JP")]
    Japan,
    /// Suffix-less symbol, assumed US-listed.
    #[serde(rename = "US")]
    UnitedStates,
    /// Unrecognized exchange suffix. Shares the US presentation defaults.
    #[serde(rename = "OTHER")]
    Other,
}

/// Presentation context for one listing market.
///
/// Derived fresh from the ticker on every request and never cached, so two
/// tickers in one session cannot leak context into each other.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketContext {
    pub market: MarketCode,

    /// Currency unit line shown with statement tables, e.g. "억 원 (KRW)".
    pub currency_label: &'static str,

    /// Divisor applied to raw statement values before display. Always > 0.
    pub unit_divisor: Decimal,
}

/// Unit label for Korean listings (hundreds of millions of won).
pub const KRW_UNIT_LABEL: &str = "억 원 (KRW)";
/// Unit label for Tokyo listings (millions of yen).
pub const JPY_UNIT_LABEL: &str = "mil. yen (JPY)";
/// Unit label for US and unrecognized listings (millions of US dollars).
pub const USD_UNIT_LABEL: &str = "mil. USD";

const KRW_UNIT_DIVISOR: i64 = 100_000_000;
const DEFAULT_UNIT_DIVISOR: i64 = 1_000_000;

/// Derive the market context from a ticker's exchange suffix.
///
/// Pure and infallible: unknown suffixes fall through to the USD defaults.
/// Matching is case-sensitive because provider symbols are ("005930.ks" is
/// not a KOSPI listing as far as Yahoo is concerned).
pub fn resolve_market_context(ticker: &Ticker) -> MarketContext {
    let symbol = ticker.as_str();

    if symbol.ends_with(".KS") || symbol.ends_with(".KQ") {
        return MarketContext {
            market: MarketCode::Korea,
            currency_label: KRW_UNIT_LABEL,
            unit_divisor: Decimal::from(KRW_UNIT_DIVISOR),
        };
    }

    if symbol.ends_with(".T") {
        return MarketContext {
            market: MarketCode::Japan,
            currency_label: JPY_UNIT_LABEL,
            unit_divisor: Decimal::from(DEFAULT_UNIT_DIVISOR),
        };
    }

    // A dot this far down means a suffix we do not know, not a US listing.
    let market = if symbol.contains('.') {
        MarketCode::Other
    } else {
        MarketCode::UnitedStates
    };

    MarketContext {
        market,
        currency_label: USD_UNIT_LABEL,
        unit_divisor: Decimal::from(DEFAULT_UNIT_DIVISOR),
    }
}
