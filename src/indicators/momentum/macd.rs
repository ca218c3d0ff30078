//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(fast) - EMA(slow)
//! Signal = EMA(signal) of MACD
//! Histogram = MACD - Signal
//!
//! The EMAs are seeded with the first value (no bias adjustment), so the
//! triple is defined for any non-empty series; early values are simply
//! unstable until the slow window has seen enough bars.

use crate::common::math;
use crate::models::indicators::MacdIndicator;

/// MACD line per bar, aligned with the input closes.
pub fn macd_line(closes: &[f64], fast: usize, slow: usize) -> Vec<f64> {
    let fast_ema = math::ema_series(closes, fast);
    let slow_ema = math::ema_series(closes, slow);
    fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect()
}

/// MACD triple at the last bar. `None` only for an empty series.
pub fn calculate_macd(
    closes: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Option<MacdIndicator> {
    let line = macd_line(closes, fast, slow);
    let signal_line = math::ema_series(&line, signal);
    let macd = *line.last()?;
    let signal = *signal_line.last()?;
    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
    })
}
