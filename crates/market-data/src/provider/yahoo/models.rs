//! Yahoo Finance API response models.
//!
//! These models parse the quoteSummary API responses. Yahoo wraps each
//! numeric field in a `{"raw": 123.45, "fmt": "123.45"}` object and returns
//! an empty object `{}` when the instrument has no data for that field.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Main response wrapper for quoteSummary API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResponse {
    pub quote_summary: YahooQuoteSummary,
}

/// Quote summary container
#[derive(Debug, Deserialize)]
pub struct YahooQuoteSummary {
    pub result: Vec<YahooQuoteSummaryResult>,
    // Note: error field exists in API but we handle errors via HTTP status/empty results
}

/// Individual result from quoteSummary API.
///
/// Which fields are populated depends on the `modules` parameter of the
/// request; everything not asked for stays `None`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooQuoteSummaryResult {
    pub price: Option<YahooPriceData>,
    pub summary_detail: Option<YahooSummaryDetail>,
    pub default_key_statistics: Option<YahooKeyStatistics>,
    pub financial_data: Option<YahooFinancialData>,
    pub balance_sheet_history: Option<YahooStatementHistory>,
    pub income_statement_history: Option<YahooStatementHistory>,
    pub cashflow_statement_history: Option<YahooStatementHistory>,
}

/// Numeric detail with raw and formatted values
#[derive(Debug, Deserialize, Clone)]
pub struct YahooRawValue {
    pub raw: Option<f64>,
    // Note: fmt field exists but we only use raw values
}

/// Reporting-period end marker carried on every statement object.
#[derive(Debug, Deserialize, Clone)]
pub struct YahooDateValue {
    /// Unix timestamp of the period end.
    pub raw: Option<i64>,
    /// Provider-formatted date, e.g. "2023-12-31".
    pub fmt: Option<String>,
}

/// Price data from the `price` module
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooPriceData {
    pub currency: Option<String>,
    pub regular_market_price: Option<YahooRawValue>,
    pub market_cap: Option<YahooRawValue>,
}

/// Financial metrics from the `summaryDetail` module.
/// Yahoo returns these as nested objects like {"raw": 123.45, "fmt": "123.45"}
/// or empty objects {} when no data is available.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooSummaryDetail {
    pub market_cap: Option<YahooRawValue>,
    pub dividend_yield: Option<YahooRawValue>,
}

/// Per-share statistics from the `defaultKeyStatistics` module.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooKeyStatistics {
    pub shares_outstanding: Option<YahooRawValue>,
    pub trailing_eps: Option<YahooRawValue>,
    pub book_value: Option<YahooRawValue>,
}

/// Pricing and per-share revenue from the `financialData` module.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooFinancialData {
    pub current_price: Option<YahooRawValue>,
    pub revenue_per_share: Option<YahooRawValue>,
}

/// Statement history container.
///
/// The inner array key differs per module (`balanceSheetStatements`,
/// `incomeStatementHistory`, `cashflowStatements`); aliases fold the three
/// shapes into one.
#[derive(Debug, Deserialize)]
pub struct YahooStatementHistory {
    #[serde(
        default,
        alias = "balanceSheetStatements",
        alias = "incomeStatementHistory",
        alias = "cashflowStatements"
    )]
    pub statements: Vec<YahooStatementPeriod>,
}

/// One reported period from a statement history module.
///
/// Line items stay as raw JSON in document order (`serde_json` is built with
/// `preserve_order`); the provider pivots them into table rows. The flattened
/// map still contains API plumbing like `maxAge`, which the pivot skips.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooStatementPeriod {
    pub end_date: Option<YahooDateValue>,

    #[serde(flatten)]
    pub line_items: Map<String, Value>,
}
