use serde::{Deserialize, Serialize};

use stockboard_i18n::Language;
use stockboard_market_data::{
    FundamentalsSnapshot, HistoryInterval, HistoryRange, MarketContext, StatementKind, Ticker,
};

use crate::errors::Result;
use crate::statements::StatementView;
use crate::valuation::{RatioSelection, ValuationSeries};

/// Price history window for the valuation chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryParams {
    pub range: HistoryRange,
    pub interval: HistoryInterval,
}

/// Everything one dashboard render needs, scoped to the request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardRequest {
    pub ticker: Ticker,
    pub language: Language,
    pub ratios: RatioSelection,
    pub history: HistoryParams,
}

impl DashboardRequest {
    /// Build a request from raw ticker input with the default language,
    /// ratio selection, and history window. Fails only on unusable input.
    pub fn new(ticker_input: &str, language: Language) -> Result<Self> {
        Ok(Self {
            ticker: Ticker::parse(ticker_input)?,
            language,
            ratios: RatioSelection::default(),
            history: HistoryParams::default(),
        })
    }

    pub fn with_ratios(mut self, ratios: RatioSelection) -> Self {
        self.ratios = ratios;
        self
    }

    pub fn with_history(mut self, history: HistoryParams) -> Self {
        self.history = history;
        self
    }
}

/// The three independently fetched data groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FetchGroup {
    Snapshot,
    Statements,
    History,
}

impl FetchGroup {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FetchGroup::Snapshot => "snapshot",
            FetchGroup::Statements => "statements",
            FetchGroup::History => "history",
        }
    }
}

impl std::fmt::Display for FetchGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fetch group that failed, reported without aborting the render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchNotice {
    pub group: FetchGroup,
    /// Localized user-facing message.
    pub message: String,
    /// Underlying provider error text, for diagnostics.
    pub detail: String,
}

/// One labeled headline metric with a display-ready value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    /// Formatted number, or the not-available placeholder.
    pub value: String,
}

/// The three headline metrics shown above the statements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPanel {
    pub shares_outstanding: Metric,
    pub market_cap: Metric,
    pub last_price: Metric,
}

/// One financial statement section of the view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatementSection {
    pub kind: StatementKind,
    /// Localized section title.
    pub title: String,
    pub view: StatementView,
}

/// Display-ready dashboard state for one ticker.
///
/// Always produced in full: fetch groups that failed surface in `notices`
/// while every other part renders from whatever did arrive.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub ticker: Ticker,
    pub language: Language,
    pub market: MarketContext,
    /// Localized unit line shown with the statements, e.g. "단위: 억 원 (KRW)".
    pub unit_line: String,
    pub metrics: MetricPanel,
    /// Raw snapshot for consumers that recompute or chart, when the
    /// snapshot group succeeded.
    pub snapshot: Option<FundamentalsSnapshot>,
    /// Statement sections in fixed order: balance sheet, income statement,
    /// cash flow. Empty when the statements group failed outright.
    pub statements: Vec<StatementSection>,
    pub valuation: Vec<ValuationSeries>,
    pub notices: Vec<FetchNotice>,
}
