//! Pointwise construction of valuation ratio series.

use log::warn;
use rust_decimal::Decimal;

use stockboard_i18n::{label, Language};
use stockboard_market_data::{FundamentalsSnapshot, PricePoint};

use crate::constants::RATIO_DECIMAL_PRECISION;
use crate::valuation::valuation_model::{
    RatioKind, RatioSelection, SeriesPoint, ValuationSeries,
};

/// Build every selected ratio series from one price history and snapshot.
///
/// Series come back in chart order with legend labels localized for
/// `language`. An empty selection yields an empty vector without touching
/// the inputs.
pub fn build_valuation_series(
    points: &[PricePoint],
    snapshot: &FundamentalsSnapshot,
    selection: RatioSelection,
    language: Language,
) -> Vec<ValuationSeries> {
    selection
        .enabled()
        .into_iter()
        .map(|ratio| {
            build_ratio_series(
                points,
                snapshot,
                ratio,
                label(ratio.label_key(), language).to_string(),
            )
        })
        .collect()
}

/// Build one ratio series over the valid closes of a price history.
///
/// Bars without a close are dropped first, so output dates are a subset of
/// input dates and the chart never interpolates.
///
/// PER, PBR, and PSR divide each close by a per-share figure from the
/// snapshot. When that figure is missing or zero the divisor falls back to
/// one and the series is flagged `used_fallback`; flagged values equal the
/// raw closes. Dividend yield charts as a constant line, the snapshot's
/// fractional yield times 100; when the yield is missing the line sits at
/// zero and the series is flagged.
pub fn build_ratio_series(
    points: &[PricePoint],
    snapshot: &FundamentalsSnapshot,
    ratio: RatioKind,
    label: String,
) -> ValuationSeries {
    let per_share = match ratio {
        RatioKind::Per => snapshot.trailing_eps,
        RatioKind::Pbr => snapshot.book_value,
        RatioKind::Psr => snapshot.revenue_per_share,
        RatioKind::DividendYield => return dividend_yield_series(points, snapshot, label),
    };
    let (denominator, used_fallback) = usable_denominator(per_share);
    if used_fallback {
        warn!(
            "no usable {} denominator, series values fall back to raw closes",
            ratio
        );
    }

    let points = points
        .iter()
        .filter_map(|point| {
            let close = point.close?;
            let value = close.checked_div(denominator)?;
            Some(SeriesPoint {
                date: point.date,
                value: value.round_dp(RATIO_DECIMAL_PRECISION),
            })
        })
        .collect();

    ValuationSeries {
        ratio,
        label,
        points,
        used_fallback,
    }
}

/// A denominator is usable when present and non-zero. Anything else divides
/// by one and flags the series.
fn usable_denominator(per_share: Option<Decimal>) -> (Decimal, bool) {
    match per_share.filter(|value| !value.is_zero()) {
        Some(value) => (value, false),
        None => (Decimal::ONE, true),
    }
}

fn dividend_yield_series(
    points: &[PricePoint],
    snapshot: &FundamentalsSnapshot,
    label: String,
) -> ValuationSeries {
    let (value, used_fallback) = match snapshot.dividend_yield {
        Some(fraction) => (
            (fraction * Decimal::ONE_HUNDRED).round_dp(RATIO_DECIMAL_PRECISION),
            false,
        ),
        None => (Decimal::ZERO, true),
    };
    if used_fallback {
        warn!("no dividend yield in snapshot, series sits at zero");
    }

    let points = points
        .iter()
        .filter_map(|point| {
            point.close?;
            Some(SeriesPoint {
                date: point.date,
                value,
            })
        })
        .collect();

    ValuationSeries {
        ratio: RatioKind::DividendYield,
        label,
        points,
        used_fallback,
    }
}
