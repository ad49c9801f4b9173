//! Statement normalization: scale raw values to the market unit and format.

use log::debug;
use rust_decimal::Decimal;

use stockboard_market_data::StatementTable;

use crate::statements::statement_model::{DisplayRow, DisplayStatementTable, StatementView};
use crate::utils::number_utils::format_grouped;

/// Prepare one raw statement for display.
///
/// A table with no rows collapses to [`StatementView::NoData`] so callers
/// can show a localized placeholder instead of an empty grid. Otherwise
/// every cell is divided by `unit_divisor` and rendered with thousands
/// grouping. Row and column order pass through untouched.
pub fn normalize_statement(table: &StatementTable, unit_divisor: Decimal) -> StatementView {
    if table.is_empty() {
        debug!("no {} rows to display", table.kind);
        return StatementView::NoData;
    }

    let rows = table
        .rows
        .iter()
        .map(|row| DisplayRow {
            label: humanize_label(&row.label),
            values: row
                .cells
                .iter()
                .map(|cell| scale_cell(*cell, unit_divisor))
                .collect(),
        })
        .collect();

    StatementView::Table(DisplayStatementTable {
        columns: table.columns.clone(),
        rows,
    })
}

/// Scale one raw cell to the display unit and format it.
///
/// Cells the provider omitted become a literal zero, not "N/A": inside a
/// statement table an absent line item reads as nothing reported for that
/// period. A reported zero is indistinguishable from a filled-in one.
fn scale_cell(cell: Option<Decimal>, unit_divisor: Decimal) -> String {
    let scaled = cell
        .unwrap_or(Decimal::ZERO)
        .checked_div(unit_divisor)
        .unwrap_or(Decimal::ZERO);
    format_grouped(Some(scaled))
}

/// Turn a provider camelCase line-item key into a display label:
/// "totalAssets" becomes "Total Assets".
fn humanize_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (index, ch) in key.chars().enumerate() {
        if index == 0 {
            label.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            label.push(' ');
            label.push(ch);
        } else {
            label.push(ch);
        }
    }
    label
}
