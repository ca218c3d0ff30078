//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::config::EmaWindows;
use crate::indicators::error::IndicatorError;
use crate::models::series::PriceSeries;
use serde::{Deserialize, Serialize};

/// EMA at the last bar, or `None` for an empty series.
pub fn calculate_ema(closes: &[f64], window: usize) -> Option<f64> {
    math::ema_series(closes, window).last().copied()
}

/// The three EMA horizons a stage classification reads from, computed once
/// and carried as a separate structure so the price series itself stays
/// untouched.
///
/// The stack remembers the windows it was computed under; a classifier
/// configured differently will refuse it rather than misread the columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmaStack {
    windows: EmaWindows,
    pub short: Vec<f64>,
    pub mid: Vec<f64>,
    pub long: Vec<f64>,
}

impl EmaStack {
    pub fn compute(series: &PriceSeries, windows: EmaWindows) -> Result<Self, IndicatorError> {
        if !windows.is_valid() {
            return Err(IndicatorError::InvalidWindows(format!(
                "EMA windows {}/{}/{} must be nonzero and strictly increasing",
                windows.short, windows.mid, windows.long
            )));
        }
        let closes = series.closes();
        Ok(Self {
            windows,
            short: math::ema_series(&closes, windows.short),
            mid: math::ema_series(&closes, windows.mid),
            long: math::ema_series(&closes, windows.long),
        })
    }

    pub fn windows(&self) -> EmaWindows {
        self.windows
    }

    /// (short, mid, long) at the last bar, or `None` for an empty stack.
    pub fn latest(&self) -> Option<(f64, f64, f64)> {
        Some((
            *self.short.last()?,
            *self.mid.last()?,
            *self.long.last()?,
        ))
    }
}

/// Golden/dead cross flags for a fast/slow EMA pair at the last two bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CrossFlags {
    pub golden: bool,
    pub dead: bool,
}

/// Golden iff the fast EMA moved from below to above the slow EMA between
/// the last two bars; dead for the mirror. Both false with fewer than two
/// bars.
pub fn detect_recent_cross(closes: &[f64], fast: usize, slow: usize) -> CrossFlags {
    let fast_ema = math::ema_series(closes, fast);
    let slow_ema = math::ema_series(closes, slow);
    let n = closes.len();
    if n < 2 {
        return CrossFlags::default();
    }
    let (prev_fast, curr_fast) = (fast_ema[n - 2], fast_ema[n - 1]);
    let (prev_slow, curr_slow) = (slow_ema[n - 2], slow_ema[n - 1]);
    CrossFlags {
        golden: prev_fast < prev_slow && curr_fast > curr_slow,
        dead: prev_fast > prev_slow && curr_fast < curr_slow,
    }
}
