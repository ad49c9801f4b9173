//! Dashboard assembly.
//!
//! One call builds the whole view: resolve the market context from the
//! ticker, run the three fetch groups in order (snapshot, statements,
//! history), then normalize and format what arrived. Each group degrades
//! independently; a failure becomes a localized notice on the view and the
//! remaining groups still render.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error};
use rust_decimal::Decimal;

use stockboard_i18n::{label, LabelKey, Language};
use stockboard_market_data::{
    resolve_market_context, FinancialStatements, MarketDataError, MarketDataProvider,
};

use crate::dashboard::dashboard_model::{
    DashboardRequest, DashboardView, FetchGroup, FetchNotice, Metric, MetricPanel,
    StatementSection,
};
use crate::statements::normalize_statement;
use crate::utils::number_utils::format_grouped;
use crate::valuation::build_valuation_series;

/// Trait for building display-ready dashboard state.
///
/// # Example
///
/// ```ignore
/// let service = DashboardService::new(provider);
/// let request = DashboardRequest::new("005930.KS", Language::Korean)?;
/// let view = service.build_dashboard(&request).await;
/// ```
#[async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    /// Build the dashboard view for one request.
    ///
    /// Infallible by contract: fetch failures become notices on the view,
    /// never errors. The ticker, market context, and localized labels are
    /// always present even when every fetch group failed.
    async fn build_dashboard(&self, request: &DashboardRequest) -> DashboardView;
}

/// Default dashboard service over a market data provider.
pub struct DashboardService {
    provider: Arc<dyn MarketDataProvider>,
}

impl DashboardService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn build_dashboard(&self, request: &DashboardRequest) -> DashboardView {
        let language = request.language;
        let market = resolve_market_context(&request.ticker);
        debug!(
            "building dashboard for {} ({:?} market) via provider {}",
            request.ticker,
            market.market,
            self.provider.id()
        );

        let mut notices = Vec::new();

        let snapshot = match self.provider.get_snapshot(&request.ticker).await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                notices.push(notice(
                    FetchGroup::Snapshot,
                    LabelKey::SnapshotUnavailable,
                    language,
                    &e,
                ));
                None
            }
        };

        let statements = match self.provider.get_statements(&request.ticker).await {
            Ok(statements) => statement_sections(&statements, market.unit_divisor, language),
            Err(e) => {
                notices.push(notice(
                    FetchGroup::Statements,
                    LabelKey::StatementsUnavailable,
                    language,
                    &e,
                ));
                Vec::new()
            }
        };

        let valuation = match self
            .provider
            .get_price_history(&request.ticker, request.history.range, request.history.interval)
            .await
        {
            Ok(points) => {
                // With no snapshot the builders flag every series as
                // fallback, but the chart still gets its dates and closes.
                let basis = snapshot.clone().unwrap_or_default();
                build_valuation_series(&points, &basis, request.ratios, language)
            }
            Err(e) => {
                notices.push(notice(
                    FetchGroup::History,
                    LabelKey::HistoryUnavailable,
                    language,
                    &e,
                ));
                Vec::new()
            }
        };

        let snapshot_ref = snapshot.as_ref();
        let metrics = MetricPanel {
            shares_outstanding: Metric {
                label: label(LabelKey::SharesOutstanding, language).to_string(),
                value: format_grouped(snapshot_ref.and_then(|s| s.shares_outstanding)),
            },
            market_cap: Metric {
                label: label(LabelKey::MarketCap, language).to_string(),
                value: format_grouped(snapshot_ref.and_then(|s| s.market_cap)),
            },
            last_price: Metric {
                label: label(LabelKey::LastPrice, language).to_string(),
                value: format_grouped(snapshot_ref.and_then(|s| s.current_price)),
            },
        };

        let unit_line = format!(
            "{}: {}",
            label(LabelKey::Unit, language),
            market.currency_label
        );

        DashboardView {
            ticker: request.ticker.clone(),
            language,
            market,
            unit_line,
            metrics,
            snapshot,
            statements,
            valuation,
            notices,
        }
    }
}

/// Localized notice for one failed fetch group.
fn notice(
    group: FetchGroup,
    message_key: LabelKey,
    language: Language,
    source: &MarketDataError,
) -> FetchNotice {
    error!("{} fetch failed: {}", group, source);
    FetchNotice {
        group,
        message: label(message_key, language).to_string(),
        detail: source.to_string(),
    }
}

/// Normalize the three statements into titled display sections, in fixed
/// order: balance sheet, income statement, cash flow.
fn statement_sections(
    statements: &FinancialStatements,
    unit_divisor: Decimal,
    language: Language,
) -> Vec<StatementSection> {
    [
        (&statements.balance_sheet, LabelKey::BalanceSheet),
        (&statements.income_statement, LabelKey::IncomeStatement),
        (&statements.cash_flow, LabelKey::CashFlow),
    ]
    .into_iter()
    .map(|(table, title_key)| StatementSection {
        kind: table.kind,
        title: label(title_key, language).to_string(),
        view: normalize_statement(table, unit_divisor),
    })
    .collect()
}
