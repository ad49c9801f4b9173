//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `ticker` - Canonical ticker symbol (Ticker)
//! - `snapshot` - Point-in-time fundamentals (FundamentalsSnapshot)
//! - `statement` - Financial statement tables (StatementKind, StatementTable, FinancialStatements)
//! - `series` - Closing-price history (PricePoint, HistoryRange, HistoryInterval)

mod series;
mod snapshot;
mod statement;
mod ticker;

pub use series::{HistoryInterval, HistoryRange, PricePoint};
pub use snapshot::FundamentalsSnapshot;
pub use statement::{FinancialStatements, StatementKind, StatementRow, StatementTable};
pub use ticker::Ticker;
