//! Rolling-window and smoothing primitives.
//!
//! All helpers treat insufficient history as undefined (`None`), never as a
//! filled or extrapolated value.

/// Simple mean of the last `period` values, or `None` when fewer exist.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let tail = &values[values.len() - period..];
    Some(tail.iter().sum::<f64>() / period as f64)
}

/// Rolling simple mean, aligned with the input: `out[i]` covers
/// `values[i + 1 - period ..= i]` and is `None` before a full window exists.
pub fn rolling_mean(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0.0;
    for (i, &v) in values.iter().enumerate() {
        sum += v;
        if i >= period {
            sum -= values[i - period];
        }
        if i + 1 >= period {
            out.push(Some(sum / period as f64));
        } else {
            out.push(None);
        }
    }
    out
}

/// Sample standard deviation (n−1 denominator) of the last `period` values.
///
/// Needs at least two values in the window to be defined.
pub fn sample_std(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 || values.len() < period {
        return None;
    }
    let tail = &values[values.len() - period..];
    let mean = tail.iter().sum::<f64>() / period as f64;
    let var = tail.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (period as f64 - 1.0);
    Some(var.sqrt())
}

/// Exponential moving average series, smoothing factor `2 / (span + 1)`,
/// seeded with the first value and no bias-adjustment term. Defined for every
/// input index; an empty input yields an empty output.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    if values.is_empty() || span == 0 {
        return Vec::new();
    }
    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len());
    let mut prev = values[0];
    out.push(prev);
    for &v in &values[1..] {
        prev = alpha * v + (1.0 - alpha) * prev;
        out.push(prev);
    }
    out
}

/// True range of a bar given the previous close.
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - prev_close).abs();
    let lc = (low - prev_close).abs();
    hl.max(hc).max(lc)
}
