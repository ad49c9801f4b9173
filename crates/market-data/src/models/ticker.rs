use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// Canonical ticker symbol as listed at the provider (e.g. "005930.KS", "AAPL").
///
/// Constructed through [`Ticker::parse`], which is the only place user input
/// is validated. Everything downstream can assume a non-empty, trimmed symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    /// Parse user input into a ticker.
    ///
    /// Surrounding whitespace is trimmed; empty or whitespace-only input is
    /// rejected with [`MarketDataError::InvalidTicker`].
    pub fn parse(input: &str) -> Result<Self, MarketDataError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MarketDataError::InvalidTicker(input.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The symbol string as the provider expects it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
