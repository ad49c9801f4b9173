use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The three periodic statement types published per listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatementKind {
    BalanceSheet,
    IncomeStatement,
    CashFlow,
}

impl StatementKind {
    /// Stable identifier used in logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BalanceSheet => "balance_sheet",
            Self::IncomeStatement => "income_statement",
            Self::CashFlow => "cash_flow",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line item across all reported periods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    /// Provider line-item key (e.g. "totalAssets").
    pub label: String,

    /// One cell per entry in [`StatementTable::columns`]; `None` where the
    /// provider omitted the item for that period.
    pub cells: Vec<Option<Decimal>>,
}

/// A single financial statement in provider row/column order.
///
/// Rows keep the order the provider first reported them in; columns keep the
/// provider's period order (most recent first). Consumers must not reorder
/// either axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    pub kind: StatementKind,

    /// Period labels, most recent first.
    pub columns: Vec<String>,

    pub rows: Vec<StatementRow>,
}

impl StatementTable {
    /// A table with no reported periods.
    pub fn empty(kind: StatementKind) -> Self {
        Self {
            kind,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// True when the table carries no reportable data.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The statement group fetched in one provider round trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatements {
    pub balance_sheet: StatementTable,
    pub income_statement: StatementTable,
    pub cash_flow: StatementTable,
}
