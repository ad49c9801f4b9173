//! Static localization table for the dashboard.
//!
//! Every user-facing label the dashboard emits is keyed by [`LabelKey`] and
//! resolved against one of three display languages. Resolution is a single
//! exhaustive match over `(key, language)`, so a key that compiles is a key
//! that resolves. There is no fallback language and no way to hit a missing
//! translation at runtime.
//!
//! The table does no interpolation and no locale negotiation. Callers pick
//! a [`Language`] per request and pass it down.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display language selected by the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "KR")]
    Korean,
    #[serde(rename = "EN")]
    English,
    #[serde(rename = "JP")]
    Japanese,
}

impl Language {
    /// All supported languages, in menu order.
    pub const ALL: [Language; 3] = [Language::Korean, Language::English, Language::Japanese];

    /// Two-letter language code used in request payloads.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Korean => "KR",
            Self::English => "EN",
            Self::Japanese => "JP",
        }
    }

    /// Native name of the language, as shown in the language menu.
    pub const fn native_name(&self) -> &'static str {
        match self {
            Self::Korean => "한국어",
            Self::English => "English",
            Self::Japanese => "日本語",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::Korean
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KR" => Ok(Self::Korean),
            "EN" => Ok(Self::English),
            "JP" => Ok(Self::Japanese),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Error for language codes outside the supported set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown language code: {}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

/// Keys for every localizable label the dashboard emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelKey {
    // Metric panel
    SharesOutstanding,
    MarketCap,
    LastPrice,

    // Input and selection
    TickerPrompt,
    Select,

    // Headings
    BasicInfo,
    FinancialStatements,
    ValuationChart,
    Unit,

    // Statement titles
    BalanceSheet,
    IncomeStatement,
    CashFlow,

    // Ratio names
    Per,
    Pbr,
    Psr,
    DividendYield,

    // Fetch-group failure messages
    SnapshotUnavailable,
    StatementsUnavailable,
    HistoryUnavailable,
}

impl LabelKey {
    /// All keys, for table-completeness checks.
    pub const ALL: [LabelKey; 19] = [
        LabelKey::SharesOutstanding,
        LabelKey::MarketCap,
        LabelKey::LastPrice,
        LabelKey::TickerPrompt,
        LabelKey::Select,
        LabelKey::BasicInfo,
        LabelKey::FinancialStatements,
        LabelKey::ValuationChart,
        LabelKey::Unit,
        LabelKey::BalanceSheet,
        LabelKey::IncomeStatement,
        LabelKey::CashFlow,
        LabelKey::Per,
        LabelKey::Pbr,
        LabelKey::Psr,
        LabelKey::DividendYield,
        LabelKey::SnapshotUnavailable,
        LabelKey::StatementsUnavailable,
        LabelKey::HistoryUnavailable,
    ];
}

/// Resolve a label for the given language.
///
/// Total over the whole key space: adding a [`LabelKey`] variant without a
/// translation for all three languages is a compile error, not a runtime gap.
pub fn label(key: LabelKey, language: Language) -> &'static str {
    use LabelKey::*;
    use Language::*;

    match (key, language) {
        (SharesOutstanding, Korean) => "발행주식 수",
        (SharesOutstanding, English) => "Shares Outstanding",
        (SharesOutstanding, Japanese) => "発行株式数",

        (MarketCap, Korean) => "시가총액",
        (MarketCap, English) => "Market Cap",
        (MarketCap, Japanese) => "時価総額",

        (LastPrice, Korean) => "최근 종가",
        (LastPrice, English) => "Last Price",
        (LastPrice, Japanese) => "直近終値",

        (TickerPrompt, Korean) => {
            "종목 코드 입력 (예: 삼성전자 → 005930.KS, 다이와증권 → 8601.T, 메드트로닉 → MDT)"
        }
        (TickerPrompt, English) => "Enter stock code (e.g., 005930.KS, 8601.T, MDT)",
        (TickerPrompt, Japanese) => "銘柄コードを入力（例：005930.KS、8601.T、MDT）",

        (Select, Korean) => "선택",
        (Select, English) => "Select",
        (Select, Japanese) => "選択",

        (BasicInfo, Korean) => "기본 정보",
        (BasicInfo, English) => "Basic Info",
        (BasicInfo, Japanese) => "基本情報",

        (FinancialStatements, Korean) => "재무제표",
        (FinancialStatements, English) => "Financial Statements",
        (FinancialStatements, Japanese) => "財務諸表",

        (ValuationChart, Korean) => "밸류에이션 차트",
        (ValuationChart, English) => "Valuation Chart",
        (ValuationChart, Japanese) => "バリュエーションチャート",

        (Unit, Korean) => "단위",
        (Unit, English) => "Unit",
        (Unit, Japanese) => "単位",

        (BalanceSheet, Korean) => "대차대조표",
        (BalanceSheet, English) => "Balance Sheet",
        (BalanceSheet, Japanese) => "貸借対照表",

        (IncomeStatement, Korean) => "손익계산서",
        (IncomeStatement, English) => "Income Statement",
        (IncomeStatement, Japanese) => "損益計算書",

        (CashFlow, Korean) => "현금흐름표",
        (CashFlow, English) => "Cash Flow",
        (CashFlow, Japanese) => "キャッシュフロー計算書",

        // Ratio acronyms read the same in all three markets.
        (Per, _) => "PER",
        (Pbr, _) => "PBR",
        (Psr, _) => "PSR",

        (DividendYield, Korean) => "배당수익률",
        (DividendYield, English) => "Dividend Yield",
        (DividendYield, Japanese) => "配当利回り",

        (SnapshotUnavailable, Korean) => "종목 정보를 불러오는 데 실패했습니다.",
        (SnapshotUnavailable, English) => "Failed to load instrument information.",
        (SnapshotUnavailable, Japanese) => "銘柄情報の取得に失敗しました。",

        (StatementsUnavailable, Korean) => "재무제표를 불러오지 못했습니다.",
        (StatementsUnavailable, English) => "Failed to load financial statements.",
        (StatementsUnavailable, Japanese) => "財務諸表の取得に失敗しました。",

        (HistoryUnavailable, Korean) => "주가 이력을 불러오지 못했습니다.",
        (HistoryUnavailable, English) => "Failed to load price history.",
        (HistoryUnavailable, Japanese) => "株価履歴の取得に失敗しました。",
    }
}
