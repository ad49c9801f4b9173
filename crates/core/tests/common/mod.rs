use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal_macros::dec;

use stockboard_market_data::{
    FinancialStatements, FundamentalsSnapshot, HistoryInterval, HistoryRange, MarketDataError,
    MarketDataProvider, PricePoint, StatementKind, StatementRow, StatementTable, Ticker,
};

/// Canned provider for driving the dashboard service without a network.
///
/// Each fetch group is pre-loaded with either a payload or an error
/// message, so tests can fail one group while the others succeed.
pub struct StubProvider {
    pub snapshot: Result<FundamentalsSnapshot, String>,
    pub statements: Result<FinancialStatements, String>,
    pub history: Result<Vec<PricePoint>, String>,
}

impl StubProvider {
    /// Every fetch group succeeds with the Samsung Electronics fixtures.
    pub fn healthy() -> Self {
        Self {
            snapshot: Ok(samsung_snapshot()),
            statements: Ok(samsung_statements()),
            history: Ok(quarterly_closes()),
        }
    }
}

fn stub_error(message: &str) -> MarketDataError {
    MarketDataError::ProviderError {
        provider: "STUB".to_string(),
        message: message.to_string(),
    }
}

#[async_trait]
impl MarketDataProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn get_snapshot(
        &self,
        _ticker: &Ticker,
    ) -> Result<FundamentalsSnapshot, MarketDataError> {
        self.snapshot.clone().map_err(|message| stub_error(&message))
    }

    async fn get_statements(
        &self,
        _ticker: &Ticker,
    ) -> Result<FinancialStatements, MarketDataError> {
        self.statements
            .clone()
            .map_err(|message| stub_error(&message))
    }

    async fn get_price_history(
        &self,
        _ticker: &Ticker,
        _range: HistoryRange,
        _interval: HistoryInterval,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        self.history.clone().map_err(|message| stub_error(&message))
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Snapshot figures in the shape Yahoo reports for 005930.KS.
pub fn samsung_snapshot() -> FundamentalsSnapshot {
    FundamentalsSnapshot {
        shares_outstanding: Some(dec!(5969782550)),
        market_cap: Some(dec!(400000000000000)),
        current_price: Some(dec!(71000)),
        trailing_eps: Some(dec!(8057)),
        book_value: Some(dec!(52002)),
        revenue_per_share: Some(dec!(43591)),
        dividend_yield: Some(dec!(0.0203)),
    }
}

/// Two annual periods per statement, raw values in won.
pub fn samsung_statements() -> FinancialStatements {
    let columns = vec!["2023-12-31".to_string(), "2022-12-31".to_string()];
    FinancialStatements {
        balance_sheet: StatementTable {
            kind: StatementKind::BalanceSheet,
            columns: columns.clone(),
            rows: vec![
                StatementRow {
                    label: "totalAssets".to_string(),
                    cells: vec![Some(dec!(455905980000000)), Some(dec!(448424507000000))],
                },
                StatementRow {
                    label: "totalLiab".to_string(),
                    cells: vec![Some(dec!(92228115000000)), Some(dec!(93674903000000))],
                },
            ],
        },
        income_statement: StatementTable {
            kind: StatementKind::IncomeStatement,
            columns: columns.clone(),
            rows: vec![
                StatementRow {
                    label: "totalRevenue".to_string(),
                    cells: vec![Some(dec!(258935494000000)), Some(dec!(302231360000000))],
                },
                StatementRow {
                    label: "netIncome".to_string(),
                    cells: vec![Some(dec!(15487100000000)), None],
                },
            ],
        },
        cash_flow: StatementTable {
            kind: StatementKind::CashFlow,
            columns,
            rows: vec![StatementRow {
                label: "totalCashFromOperatingActivities".to_string(),
                cells: vec![Some(dec!(44137399000000)), Some(dec!(62181346000000))],
            }],
        },
    }
}

/// Four quarterly closes, one bar without a close.
pub fn quarterly_closes() -> Vec<PricePoint> {
    vec![
        PricePoint {
            date: date(2023, 3, 31),
            close: Some(dec!(64000)),
        },
        PricePoint {
            date: date(2023, 6, 30),
            close: Some(dec!(72200)),
        },
        PricePoint {
            date: date(2023, 9, 30),
            close: None,
        },
        PricePoint {
            date: date(2023, 12, 31),
            close: Some(dec!(71000)),
        },
    ]
}
