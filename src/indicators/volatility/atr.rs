//! ATR (Average True Range) indicator

use crate::common::math;
use crate::models::series::Bar;

/// True range per bar. The first bar has no previous close and is dropped,
/// so the output is one shorter than the input.
pub fn true_range_series(bars: &[Bar]) -> Vec<f64> {
    bars.windows(2)
        .map(|pair| math::true_range(pair[1].high, pair[1].low, pair[0].close))
        .collect()
}

/// ATR at the last bar: simple rolling mean of true range over `period`
/// bars. `None` until `period + 1` bars exist.
pub fn calculate_atr(bars: &[Bar], period: usize) -> Option<f64> {
    let tr = true_range_series(bars);
    math::sma(&tr, period)
}
