//! Parameter structs with the crate's canonical defaults.
//!
//! Everything here is plain data: callers build these directly or
//! deserialize them from whatever config source they own.

use serde::{Deserialize, Serialize};

/// EMA horizons used for stage classification.
///
/// Canonical default is 5/20/40 bars. The windows travel with every
/// [`crate::indicators::trend::EmaStack`] computed from them, so a classifier
/// can refuse a stack built under different settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmaWindows {
    pub short: usize,
    pub mid: usize,
    pub long: usize,
}

impl Default for EmaWindows {
    fn default() -> Self {
        Self {
            short: 5,
            mid: 20,
            long: 40,
        }
    }
}

impl EmaWindows {
    /// Windows must be nonzero and strictly increasing short < mid < long.
    pub fn is_valid(&self) -> bool {
        self.short > 0 && self.short < self.mid && self.mid < self.long
    }
}

/// Window lengths for the indicator snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub atr_period: usize,
    pub bollinger_period: usize,
    pub obv_ma_period: usize,
    pub volume_avg_short: usize,
    pub volume_avg_long: usize,
    /// EMA pair compared for golden/dead cross detection.
    pub cross_fast: usize,
    pub cross_slow: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            atr_period: 14,
            bollinger_period: 20,
            obv_ma_period: 20,
            volume_avg_short: 5,
            volume_avg_long: 20,
            cross_fast: 5,
            cross_slow: 20,
        }
    }
}

impl IndicatorParams {
    pub fn is_valid(&self) -> bool {
        self.rsi_period > 0
            && self.macd_fast > 0
            && self.macd_fast < self.macd_slow
            && self.macd_signal > 0
            && self.atr_period > 0
            && self.bollinger_period > 1
            && self.obv_ma_period > 0
            && self.volume_avg_short > 0
            && self.volume_avg_long > 0
            && self.cross_fast > 0
            && self.cross_fast < self.cross_slow
    }
}

/// Trailing loss-cut policy.
///
/// The updater historically ran its own ATR window (20 bars), independent of
/// the snapshot's ATR(14).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailingStopPolicy {
    pub atr_period: usize,
    pub atr_multiplier: f64,
    /// Stops are rounded to this tick (yen).
    pub tick: f64,
}

impl Default for TrailingStopPolicy {
    fn default() -> Self {
        Self {
            atr_period: 20,
            atr_multiplier: 1.5,
            tick: 10.0,
        }
    }
}

/// Which environment the process runs in, for log formatting.
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}
