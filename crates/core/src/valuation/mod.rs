//! Valuation ratio series for the dashboard chart.
//!
//! - `valuation_model`: ratio kinds, selection, and series types
//! - `valuation_calculator`: pointwise series construction from price
//!   history and the fundamentals snapshot

mod valuation_calculator;
mod valuation_model;

pub use valuation_calculator::{build_ratio_series, build_valuation_series};
pub use valuation_model::{RatioKind, RatioSelection, SeriesPoint, ValuationSeries};
