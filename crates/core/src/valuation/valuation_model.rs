use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockboard_i18n::LabelKey;

/// The ratio families the dashboard can chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RatioKind {
    /// Price to trailing earnings per share.
    Per,
    /// Price to book value per share.
    Pbr,
    /// Price to revenue per share.
    Psr,
    /// Trailing dividend yield, charted as a constant percentage.
    DividendYield,
}

impl RatioKind {
    /// All ratios in chart order.
    pub const ALL: [RatioKind; 4] = [
        RatioKind::Per,
        RatioKind::Pbr,
        RatioKind::Psr,
        RatioKind::DividendYield,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RatioKind::Per => "PER",
            RatioKind::Pbr => "PBR",
            RatioKind::Psr => "PSR",
            RatioKind::DividendYield => "DIVIDEND_YIELD",
        }
    }

    /// Localization key for this ratio's chart legend.
    pub const fn label_key(&self) -> LabelKey {
        match self {
            RatioKind::Per => LabelKey::Per,
            RatioKind::Pbr => LabelKey::Pbr,
            RatioKind::Psr => LabelKey::Psr,
            RatioKind::DividendYield => LabelKey::DividendYield,
        }
    }
}

impl std::fmt::Display for RatioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which ratio series to build for one request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatioSelection {
    pub per: bool,
    pub pbr: bool,
    pub psr: bool,
    pub dividend_yield: bool,
}

impl Default for RatioSelection {
    /// PER alone is pre-selected, matching the dashboard's initial checkboxes.
    fn default() -> Self {
        Self {
            per: true,
            pbr: false,
            psr: false,
            dividend_yield: false,
        }
    }
}

impl RatioSelection {
    /// Every ratio enabled.
    pub fn all() -> Self {
        Self {
            per: true,
            pbr: true,
            psr: true,
            dividend_yield: true,
        }
    }

    /// No ratios enabled.
    pub fn none() -> Self {
        Self {
            per: false,
            pbr: false,
            psr: false,
            dividend_yield: false,
        }
    }

    /// The enabled ratios in chart order.
    pub fn enabled(&self) -> Vec<RatioKind> {
        let mut kinds = Vec::with_capacity(4);
        if self.per {
            kinds.push(RatioKind::Per);
        }
        if self.pbr {
            kinds.push(RatioKind::Pbr);
        }
        if self.psr {
            kinds.push(RatioKind::Psr);
        }
        if self.dividend_yield {
            kinds.push(RatioKind::DividendYield);
        }
        kinds
    }
}

/// One charted point of a ratio series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// A ratio series aligned to the dates of the price history it was built
/// from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSeries {
    pub ratio: RatioKind,
    /// Localized chart legend label.
    pub label: String,
    pub points: Vec<SeriesPoint>,
    /// True when the snapshot figure this ratio needs was missing or zero
    /// and the documented substitute was used. Flagged values track the raw
    /// close (or a flat zero for yield), not a market ratio.
    pub used_fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_per_only() {
        let selection = RatioSelection::default();
        assert_eq!(selection.enabled(), vec![RatioKind::Per]);
    }

    #[test]
    fn test_enabled_keeps_chart_order() {
        let selection = RatioSelection::all();
        assert_eq!(selection.enabled(), RatioKind::ALL.to_vec());
    }

    #[test]
    fn test_none_selects_nothing() {
        assert!(RatioSelection::none().enabled().is_empty());
    }

    #[test]
    fn test_ratio_kind_serializes_camel_case() {
        let json = serde_json::to_string(&RatioKind::DividendYield).unwrap();
        assert_eq!(json, "\"dividendYield\"");
    }
}
