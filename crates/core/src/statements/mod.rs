//! Financial statement display preparation.
//!
//! - `statement_model`: display-ready table types
//! - `statement_normalizer`: unit scaling, missing-cell fill, formatting

mod statement_model;
mod statement_normalizer;

pub use statement_model::{DisplayRow, DisplayStatementTable, StatementView};
pub use statement_normalizer::normalize_statement;
