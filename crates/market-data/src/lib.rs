//! Stockboard Market Data Crate
//!
//! This crate provides market data fetching for the stockboard dashboard:
//! typed ticker input, market context resolution, and provider-backed
//! fundamentals, statements, and price history.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Ticker parsing and market context resolution (exchange suffix -> currency unit)
//! - Fundamentals snapshots (shares, market cap, price, per-share figures)
//! - Financial statement tables in provider row/column order
//! - Closing-price history over chart-API ranges and intervals
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Ticker input   | --> |      Ticker      |  (validated symbol)
//! +------------------+     +------------------+
//!                             |            |
//!                   pure      v            v      one call per group
//!            +------------------+     +------------------+
//!            |     Resolver     |     |     Provider     |  (Yahoo)
//!            +------------------+     +------------------+
//!                     |                        |
//!                     v                        v
//!            +------------------+     +---------------------------+
//!            |  MarketContext   |     | Snapshot/Statements/Bars  |
//!            +------------------+     +---------------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Ticker`] - Validated ticker symbol
//! - [`MarketContext`] - Currency label and unit divisor for a listing market
//! - [`FundamentalsSnapshot`] - Optional-field fundamentals for one instrument
//! - [`FinancialStatements`] - The three statement tables of one fetch
//! - [`PricePoint`] - One bar of closing-price history

pub mod errors;
pub mod models;
pub mod provider;
pub mod resolver;

// Re-export all public types from models
pub use models::{
    FinancialStatements, FundamentalsSnapshot, HistoryInterval, HistoryRange, PricePoint,
    StatementKind, StatementRow, StatementTable, Ticker,
};

// Re-export resolver types
pub use resolver::{
    resolve_market_context, MarketCode, MarketContext, JPY_UNIT_LABEL, KRW_UNIT_LABEL,
    USD_UNIT_LABEL,
};

// Re-export provider types
pub use provider::yahoo::YahooProvider;
pub use provider::MarketDataProvider;

// Re-export error type
pub use errors::MarketDataError;
