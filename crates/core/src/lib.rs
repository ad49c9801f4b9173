//! Stockboard Core - Normalization and presentation services.
//!
//! This crate turns raw market data into display-ready dashboard state:
//! localized metric panels, statement tables scaled to the listing
//! market's unit, and valuation ratio series. It performs no I/O of its
//! own; market access goes through the provider trait defined in
//! `stockboard-market-data`.

pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod statements;
pub mod utils;
pub mod valuation;

// Re-export common types from the dashboard, statement, and valuation modules
pub use dashboard::*;
pub use statements::*;
pub use valuation::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
