use serde::{Deserialize, Serialize};

/// One statement line item with display-formatted cells.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Human-readable line-item label, e.g. "Total Assets".
    pub label: String,
    /// Formatted cell values, one per column.
    pub values: Vec<String>,
}

/// A statement table scaled to the market's display unit and formatted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayStatementTable {
    /// Period labels, most recent first.
    pub columns: Vec<String>,
    /// Line items in the order the provider reported them.
    pub rows: Vec<DisplayRow>,
}

/// Outcome of preparing one statement for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatementView {
    /// Scaled and formatted table.
    Table(DisplayStatementTable),
    /// The provider returned no rows for this statement.
    NoData,
}

impl StatementView {
    pub fn is_no_data(&self) -> bool {
        matches!(self, StatementView::NoData)
    }
}
