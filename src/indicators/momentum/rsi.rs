//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS))
//! RS = Average Gain / Average Loss
//!
//! Gains and losses are the positive/negative parts of the close-to-close
//! diff, averaged with a simple rolling mean (not Wilder-smoothed).

use crate::common::math;
use crate::models::indicators::RsiIndicator;

/// RSI per bar, aligned with the input closes. Undefined before a full
/// window of diffs exists, and for a window with zero gain and zero loss.
pub fn rsi_series(closes: &[f64], period: usize) -> Vec<Option<f64>> {
    let n = closes.len();
    let mut out = vec![None; n];
    if period == 0 || n < period + 1 {
        return out;
    }

    let mut gains = Vec::with_capacity(n - 1);
    let mut losses = Vec::with_capacity(n - 1);
    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    let avg_gains = math::rolling_mean(&gains, period);
    let avg_losses = math::rolling_mean(&losses, period);

    for bar in period..n {
        // Diff index `bar - 1` holds the change into this bar.
        if let (Some(gain), Some(loss)) = (avg_gains[bar - 1], avg_losses[bar - 1]) {
            out[bar] = if loss == 0.0 {
                // Division limit: all-gain window pins RSI at 100. A window
                // that moved nowhere at all has no defined strength ratio.
                if gain > 0.0 {
                    Some(100.0)
                } else {
                    None
                }
            } else {
                let rs = gain / loss;
                Some(100.0 - 100.0 / (1.0 + rs))
            };
        }
    }
    out
}

/// RSI at the last bar, with its one-bar delta when the prior value is also
/// defined.
pub fn calculate_rsi(closes: &[f64], period: usize) -> Option<RsiIndicator> {
    let series = rsi_series(closes, period);
    let value = (*series.last()?)?;
    let delta = if series.len() >= 2 {
        series[series.len() - 2].map(|prev| value - prev)
    } else {
        None
    };
    Some(RsiIndicator { value, delta })
}
