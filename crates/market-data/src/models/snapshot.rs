use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time fundamentals for a single instrument.
///
/// Every field is optional. Providers routinely omit fields per instrument
/// (funds report no EPS, non-payers report no dividend yield), and a missing
/// field is ordinary data, not an error. Values stay `None` here and degrade
/// at the presentation edge.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalsSnapshot {
    /// Issued share count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shares_outstanding: Option<Decimal>,

    /// Market capitalization in the listing currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,

    /// Latest traded price in the listing currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<Decimal>,

    /// Trailing twelve-month earnings per share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trailing_eps: Option<Decimal>,

    /// Book value per share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_value: Option<Decimal>,

    /// Trailing twelve-month revenue per share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_per_share: Option<Decimal>,

    /// Dividend yield as a fraction (0.015 = 1.5%).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dividend_yield: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_all_none() {
        let snapshot = FundamentalsSnapshot::default();
        assert!(snapshot.shares_outstanding.is_none());
        assert!(snapshot.market_cap.is_none());
        assert!(snapshot.current_price.is_none());
        assert!(snapshot.trailing_eps.is_none());
        assert!(snapshot.book_value.is_none());
        assert!(snapshot.revenue_per_share.is_none());
        assert!(snapshot.dividend_yield.is_none());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "sharesOutstanding": 5969782550,
            "marketCap": 400000000000000,
            "currentPrice": 71000
        }"#;
        let snapshot: FundamentalsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.shares_outstanding, Some(dec!(5969782550)));
        assert_eq!(snapshot.market_cap, Some(dec!(400000000000000)));
        assert_eq!(snapshot.current_price, Some(dec!(71000)));
        assert!(snapshot.trailing_eps.is_none());
    }

    #[test]
    fn test_serialize_skips_missing_fields() {
        let snapshot = FundamentalsSnapshot {
            current_price: Some(dec!(71000)),
            ..Default::default()
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("currentPrice"));
        assert!(!object.contains_key("sharesOutstanding"));
        assert!(!object.contains_key("dividendYield"));
    }
}
