//! OBV (On-Balance Volume) indicator

use crate::common::math;
use crate::models::indicators::ObvIndicator;
use crate::models::series::Bar;

/// Cumulative signed volume per bar. A bar contributes `+volume` when its
/// close rose versus the prior bar, `-volume` otherwise. The first bar and
/// flat closes count as down (non-positive diff).
pub fn obv_series(bars: &[Bar]) -> Vec<f64> {
    let mut out = Vec::with_capacity(bars.len());
    let mut running = 0.0;
    let mut prev_close: Option<f64> = None;
    for bar in bars {
        let rose = matches!(prev_close, Some(prev) if bar.close > prev);
        running += if rose { bar.volume } else { -bar.volume };
        out.push(running);
        prev_close = Some(bar.close);
    }
    out
}

/// OBV at the last bar, its three prior values, and its `ma_period`-bar
/// rolling mean. `None` only for an empty series.
pub fn calculate_obv(bars: &[Bar], ma_period: usize) -> Option<ObvIndicator> {
    let series = obv_series(bars);
    let n = series.len();
    let value = *series.last()?;
    let prev = |offset: usize| {
        if n > offset {
            Some(series[n - 1 - offset])
        } else {
            None
        }
    };
    Some(ObvIndicator {
        value,
        prev_1: prev(1),
        prev_2: prev(2),
        prev_3: prev(3),
        ma: math::sma(&series, ma_period),
    })
}
