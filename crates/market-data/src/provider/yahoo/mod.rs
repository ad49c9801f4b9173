//! Yahoo Finance market data provider.
//!
//! Backs all three dashboard fetch groups:
//! - fundamentals snapshots via the quoteSummary API
//!   (`price,summaryDetail,defaultKeyStatistics,financialData`)
//! - financial statements via the quoteSummary history modules
//! - closing-price history via the chart API range endpoint
//!
//! The quoteSummary API requires crumb/cookie authentication. The crumb is
//! cached process-wide and invalidated on 401 so the next call fetches a
//! fresh one.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use lazy_static::lazy_static;
use num_traits::FromPrimitive;
use reqwest::header;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::{
    FinancialStatements, FundamentalsSnapshot, HistoryInterval, HistoryRange, PricePoint,
    StatementKind, StatementRow, StatementTable, Ticker,
};
use crate::provider::MarketDataProvider;

use models::{
    YahooQuoteSummaryResponse, YahooQuoteSummaryResult, YahooRawValue, YahooStatementPeriod,
};

/// Modules requested for the fundamentals snapshot group.
const SNAPSHOT_MODULES: &str = "price,summaryDetail,defaultKeyStatistics,financialData";

/// Modules requested for the statements group.
const STATEMENT_MODULES: &str =
    "balanceSheetHistory,incomeStatementHistory,cashflowStatementHistory";

const YAHOO_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance market data provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub async fn new() -> Result<Self, MarketDataError> {
        let connector =
            yahoo::YahooConnector::new().map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to initialize Yahoo connector: {}", e),
            })?;
        Ok(Self {
            connector,
            client: reqwest::Client::new(),
        })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Check if we have a cached crumb
        {
            let guard = YAHOO_CRUMB.read().unwrap();
            if let Some(crumb) = guard.as_ref() {
                return Ok(crumb.clone());
            }
        }

        // Fetch new crumb
        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to get cookie: {}", e),
            })?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Failed to parse Yahoo cookie".to_string(),
            })?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, YAHOO_USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to get crumb: {}", e),
            })?
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("Failed to read crumb: {}", e),
            })?;

        let crumb_data = CrumbData { cookie, crumb };

        // Cache it
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = Some(crumb_data.clone());

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        let mut guard = YAHOO_CRUMB.write().unwrap();
        *guard = None;
    }

    // ========================================================================
    // quoteSummary Fetching
    // ========================================================================

    /// Execute a quoteSummary request for the given modules and return the
    /// first result.
    async fn quote_summary(
        &self,
        symbol: &str,
        requested_modules: &str,
    ) -> Result<YahooQuoteSummaryResult, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}&crumb={}",
            encode(symbol),
            encode(requested_modules),
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, YAHOO_USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: format!("quoteSummary request failed: {}", e),
            })?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: "Yahoo authentication expired".to_string(),
            });
        }

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(MarketDataError::SymbolNotFound(symbol.to_string()));
        }

        let data: YahooQuoteSummaryResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: "YAHOO".to_string(),
                    message: format!("Failed to parse quoteSummary response: {}", e),
                })?;

        data.quote_summary
            .result
            .into_iter()
            .next()
            .ok_or_else(|| MarketDataError::SymbolNotFound(symbol.to_string()))
    }

    /// Map a quoteSummary result onto the fundamentals snapshot.
    ///
    /// Each field prefers its canonical module but falls back to the `price`
    /// module where Yahoo duplicates the number.
    fn map_snapshot(result: &YahooQuoteSummaryResult) -> FundamentalsSnapshot {
        let price = result.price.as_ref();
        let detail = result.summary_detail.as_ref();
        let stats = result.default_key_statistics.as_ref();
        let financial = result.financial_data.as_ref();

        FundamentalsSnapshot {
            shares_outstanding: raw_decimal(stats.and_then(|s| s.shares_outstanding.as_ref())),
            market_cap: raw_decimal(detail.and_then(|d| d.market_cap.as_ref()))
                .or_else(|| raw_decimal(price.and_then(|p| p.market_cap.as_ref()))),
            current_price: raw_decimal(financial.and_then(|f| f.current_price.as_ref()))
                .or_else(|| raw_decimal(price.and_then(|p| p.regular_market_price.as_ref()))),
            trailing_eps: raw_decimal(stats.and_then(|s| s.trailing_eps.as_ref())),
            book_value: raw_decimal(stats.and_then(|s| s.book_value.as_ref())),
            revenue_per_share: raw_decimal(financial.and_then(|f| f.revenue_per_share.as_ref())),
            dividend_yield: raw_decimal(detail.and_then(|d| d.dividend_yield.as_ref())),
        }
    }
}

// ============================================================================
// MarketDataProvider Implementation
// ============================================================================

#[async_trait]
impl MarketDataProvider for YahooProvider {
    fn id(&self) -> &'static str {
        "YAHOO"
    }

    async fn get_snapshot(
        &self,
        ticker: &Ticker,
    ) -> Result<FundamentalsSnapshot, MarketDataError> {
        let symbol = ticker.as_str();

        debug!("Fetching fundamentals snapshot for {} from Yahoo", symbol);

        let result = self.quote_summary(symbol, SNAPSHOT_MODULES).await?;
        Ok(Self::map_snapshot(&result))
    }

    async fn get_statements(
        &self,
        ticker: &Ticker,
    ) -> Result<FinancialStatements, MarketDataError> {
        let symbol = ticker.as_str();

        debug!("Fetching financial statements for {} from Yahoo", symbol);

        let result = self.quote_summary(symbol, STATEMENT_MODULES).await?;

        Ok(FinancialStatements {
            balance_sheet: pivot_statement(
                StatementKind::BalanceSheet,
                statement_periods(result.balance_sheet_history.as_ref()),
            ),
            income_statement: pivot_statement(
                StatementKind::IncomeStatement,
                statement_periods(result.income_statement_history.as_ref()),
            ),
            cash_flow: pivot_statement(
                StatementKind::CashFlow,
                statement_periods(result.cashflow_statement_history.as_ref()),
            ),
        })
    }

    async fn get_price_history(
        &self,
        ticker: &Ticker,
        range: HistoryRange,
        interval: HistoryInterval,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        let symbol = ticker.as_str();

        debug!(
            "Fetching {} price history at {} bars for {} from Yahoo",
            range, interval, symbol
        );

        let response = self
            .connector
            .get_quote_range(symbol, interval.as_str(), range.as_str())
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::SymbolNotFound(symbol.to_string())
                } else {
                    MarketDataError::ProviderError {
                        provider: "YAHOO".to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        match response.quotes() {
            Ok(bars) => {
                let points: Vec<PricePoint> = bars
                    .into_iter()
                    .filter_map(|bar| {
                        let date = Utc
                            .timestamp_opt(bar.timestamp as i64, 0)
                            .single()?
                            .date_naive();
                        Some(PricePoint {
                            date,
                            close: Decimal::from_f64_retain(bar.close),
                        })
                    })
                    .collect();

                if points.is_empty() {
                    return Err(MarketDataError::NoDataForRange);
                }

                Ok(points)
            }
            Err(yahoo::YahooError::NoQuotes) => {
                warn!("No price history returned for '{}' over {}", symbol, range);
                Err(MarketDataError::NoDataForRange)
            }
            Err(e) => Err(MarketDataError::ProviderError {
                provider: "YAHOO".to_string(),
                message: e.to_string(),
            }),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Convert a `{raw, fmt}` detail to Decimal, if present and finite.
fn raw_decimal(value: Option<&YahooRawValue>) -> Option<Decimal> {
    value.and_then(|v| v.raw).and_then(Decimal::from_f64_retain)
}

/// The period slice of a statement history module, empty when the module
/// itself was missing from the response.
fn statement_periods(
    history: Option<&models::YahooStatementHistory>,
) -> &[YahooStatementPeriod] {
    history.map(|h| h.statements.as_slice()).unwrap_or(&[])
}

/// Pivot per-period statement objects into a label-by-period table.
///
/// Line items keep their first-seen order across periods and periods keep
/// the provider's most-recent-first order. Items missing from a period stay
/// `None` so every row spans all columns.
fn pivot_statement(kind: StatementKind, periods: &[YahooStatementPeriod]) -> StatementTable {
    let mut columns = Vec::with_capacity(periods.len());
    let mut labels: Vec<String> = Vec::new();
    let mut cells: Vec<Vec<Option<Decimal>>> = Vec::new();

    for (index, period) in periods.iter().enumerate() {
        columns.push(period_label(period));

        for (key, value) in &period.line_items {
            if key == "maxAge" {
                continue;
            }

            let row = match labels.iter().position(|label| label == key) {
                Some(row) => row,
                None => {
                    labels.push(key.clone());
                    cells.push(vec![None; periods.len()]);
                    cells.len() - 1
                }
            };
            cells[row][index] = cell_decimal(value);
        }
    }

    let rows = labels
        .into_iter()
        .zip(cells)
        .map(|(label, cells)| StatementRow { label, cells })
        .collect();

    StatementTable {
        kind,
        columns,
        rows,
    }
}

/// Column label for a reported period, preferring the provider's own
/// formatted date and falling back to the raw period-end timestamp.
fn period_label(period: &YahooStatementPeriod) -> String {
    if let Some(end_date) = &period.end_date {
        if let Some(fmt) = &end_date.fmt {
            return fmt.clone();
        }
        if let Some(raw) = end_date.raw {
            if let Some(instant) = Utc.timestamp_opt(raw, 0).single() {
                return instant.date_naive().to_string();
            }
        }
    }
    "-".to_string()
}

/// Coerce a statement cell into a Decimal.
///
/// Cells are usually `{"raw": n, "fmt": "..."}` objects but occasionally
/// plain numbers; anything else counts as missing. Integer payloads convert
/// exactly, so statement values past f64's 2^53 integer limit stay intact.
fn cell_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Decimal::from_i64(int)
            } else if let Some(int) = number.as_u64() {
                Decimal::from_u64(int)
            } else {
                number.as_f64().and_then(Decimal::from_f64_retain)
            }
        }
        Value::Object(object) => object.get("raw").and_then(cell_decimal),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
