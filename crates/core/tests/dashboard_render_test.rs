//! End-to-end dashboard assembly against a canned provider.

use std::sync::Arc;

use rust_decimal_macros::dec;

use stockboard_core::{
    DashboardRequest, DashboardService, DashboardServiceTrait, FetchGroup, RatioKind,
    RatioSelection, StatementView,
};
use stockboard_i18n::Language;
use stockboard_market_data::{MarketCode, StatementKind, StatementTable};

mod common;
use common::StubProvider;

fn service(provider: StubProvider) -> DashboardService {
    DashboardService::new(Arc::new(provider))
}

fn korean_request() -> DashboardRequest {
    DashboardRequest::new("005930.KS", Language::Korean).unwrap()
}

#[tokio::test]
async fn test_korean_ticker_renders_full_dashboard() {
    let service = service(StubProvider::healthy());
    let request = korean_request().with_ratios(RatioSelection::all());

    let view = service.build_dashboard(&request).await;

    assert!(view.notices.is_empty());
    assert_eq!(view.market.market, MarketCode::Korea);
    assert_eq!(view.unit_line, "단위: 억 원 (KRW)");

    assert_eq!(view.metrics.shares_outstanding.label, "발행주식 수");
    assert_eq!(view.metrics.shares_outstanding.value, "5,969,782,550");
    assert_eq!(view.metrics.market_cap.label, "시가총액");
    assert_eq!(view.metrics.market_cap.value, "400,000,000,000,000");
    assert_eq!(view.metrics.last_price.label, "최근 종가");
    assert_eq!(view.metrics.last_price.value, "71,000");

    assert!(view.snapshot.is_some());
    assert_eq!(view.statements.len(), 3);
    assert_eq!(view.valuation.len(), 4);
}

#[tokio::test]
async fn test_statements_scale_to_korean_unit() {
    let service = service(StubProvider::healthy());
    let view = service.build_dashboard(&korean_request()).await;

    let balance_sheet = &view.statements[0];
    assert_eq!(balance_sheet.kind, StatementKind::BalanceSheet);
    assert_eq!(balance_sheet.title, "대차대조표");

    let StatementView::Table(table) = &balance_sheet.view else {
        panic!("expected balance sheet table");
    };
    assert_eq!(table.columns, vec!["2023-12-31", "2022-12-31"]);
    assert_eq!(table.rows[0].label, "Total Assets");
    // 455,905,980,000,000 won / 1e8 = 4,559,059.8 -> rounded for display.
    assert_eq!(table.rows[0].values[0], "4,559,060");
    assert_eq!(table.rows[0].values[1], "4,484,245");
}

#[tokio::test]
async fn test_missing_statement_cell_renders_zero() {
    let service = service(StubProvider::healthy());
    let view = service.build_dashboard(&korean_request()).await;

    let income = &view.statements[1];
    assert_eq!(income.title, "손익계산서");
    let StatementView::Table(table) = &income.view else {
        panic!("expected income statement table");
    };
    assert_eq!(table.rows[1].label, "Net Income");
    assert_eq!(table.rows[1].values[1], "0");
}

#[tokio::test]
async fn test_valuation_series_built_from_history_and_snapshot() {
    let service = service(StubProvider::healthy());
    let request = korean_request().with_ratios(RatioSelection::all());

    let view = service.build_dashboard(&request).await;

    let per = &view.valuation[0];
    assert_eq!(per.ratio, RatioKind::Per);
    assert_eq!(per.label, "PER");
    assert!(!per.used_fallback);
    // Four bars, one without a close.
    assert_eq!(per.points.len(), 3);
    assert_eq!(per.points[0].value, dec!(7.943403));

    let dividend_yield = &view.valuation[3];
    assert_eq!(dividend_yield.ratio, RatioKind::DividendYield);
    assert!(dividend_yield
        .points
        .iter()
        .all(|point| point.value == dec!(2.03)));
}

#[tokio::test]
async fn test_statement_failure_degrades_to_notice() {
    let provider = StubProvider {
        statements: Err("HTTP 500 from upstream".to_string()),
        ..StubProvider::healthy()
    };
    let view = service(provider).build_dashboard(&korean_request()).await;

    assert!(view.statements.is_empty());
    assert_eq!(view.notices.len(), 1);
    let notice = &view.notices[0];
    assert_eq!(notice.group, FetchGroup::Statements);
    assert_eq!(notice.message, "재무제표를 불러오지 못했습니다.");
    assert!(notice.detail.contains("HTTP 500 from upstream"));

    // The other groups still rendered.
    assert_eq!(view.metrics.last_price.value, "71,000");
    assert_eq!(view.valuation.len(), 1);
}

#[tokio::test]
async fn test_snapshot_failure_blanks_metrics_but_keeps_chart() {
    let provider = StubProvider {
        snapshot: Err("symbol lookup failed".to_string()),
        ..StubProvider::healthy()
    };
    let view = service(provider).build_dashboard(&korean_request()).await;

    assert_eq!(view.metrics.shares_outstanding.value, "N/A");
    assert_eq!(view.metrics.market_cap.value, "N/A");
    assert_eq!(view.metrics.last_price.value, "N/A");
    assert!(view.snapshot.is_none());

    let notice = &view.notices[0];
    assert_eq!(notice.group, FetchGroup::Snapshot);
    assert_eq!(notice.message, "종목 정보를 불러오는 데 실패했습니다.");

    // PER falls back to raw closes and says so.
    let per = &view.valuation[0];
    assert!(per.used_fallback);
    assert_eq!(per.points[0].value, dec!(64000));

    // Statements still scale and render.
    assert_eq!(view.statements.len(), 3);
}

#[tokio::test]
async fn test_every_group_failing_still_yields_a_view() {
    let provider = StubProvider {
        snapshot: Err("down".to_string()),
        statements: Err("down".to_string()),
        history: Err("down".to_string()),
    };
    let view = service(provider).build_dashboard(&korean_request()).await;

    let groups: Vec<FetchGroup> = view.notices.iter().map(|n| n.group).collect();
    assert_eq!(
        groups,
        vec![FetchGroup::Snapshot, FetchGroup::Statements, FetchGroup::History]
    );
    assert_eq!(view.metrics.last_price.value, "N/A");
    assert!(view.statements.is_empty());
    assert!(view.valuation.is_empty());
    assert_eq!(view.unit_line, "단위: 억 원 (KRW)");
}

#[tokio::test]
async fn test_empty_statement_collapses_to_no_data() {
    let mut statements = common::samsung_statements();
    statements.balance_sheet = StatementTable::empty(StatementKind::BalanceSheet);
    let provider = StubProvider {
        statements: Ok(statements),
        ..StubProvider::healthy()
    };

    let view = service(provider).build_dashboard(&korean_request()).await;

    assert_eq!(view.statements.len(), 3);
    assert!(view.statements[0].view.is_no_data());
    assert!(matches!(
        view.statements[1].view,
        StatementView::Table(_)
    ));
}

#[tokio::test]
async fn test_english_us_ticker_uses_million_dollar_unit() {
    let service = service(StubProvider::healthy());
    let request = DashboardRequest::new("MDT", Language::English).unwrap();

    let view = service.build_dashboard(&request).await;

    assert_eq!(view.market.market, MarketCode::UnitedStates);
    assert_eq!(view.unit_line, "Unit: mil. USD");
    assert_eq!(view.metrics.shares_outstanding.label, "Shares Outstanding");
    assert_eq!(view.metrics.market_cap.label, "Market Cap");
    assert_eq!(view.metrics.last_price.label, "Last Price");
}

#[tokio::test]
async fn test_japanese_ticker_scales_to_million_yen() {
    let service = service(StubProvider::healthy());
    let request = DashboardRequest::new("7203.T", Language::Japanese).unwrap();

    let view = service.build_dashboard(&request).await;

    assert_eq!(view.market.market, MarketCode::Japan);
    assert_eq!(view.unit_line, "単位: mil. yen (JPY)");

    let StatementView::Table(table) = &view.statements[0].view else {
        panic!("expected balance sheet table");
    };
    // 455,905,980,000,000 / 1e6 = 455,905,980.
    assert_eq!(table.rows[0].values[0], "455,905,980");
}

#[tokio::test]
async fn test_view_serializes_with_camel_case_keys() {
    let service = service(StubProvider::healthy());
    let view = service.build_dashboard(&korean_request()).await;

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["ticker"], "005930.KS");
    assert_eq!(json["market"]["market"], "KR");
    assert!(json["metrics"]["sharesOutstanding"].is_object());
    assert!(json["valuation"][0]["usedFallback"].is_boolean());
    assert_eq!(json["unitLine"], "단위: 억 원 (KRW)");
}
