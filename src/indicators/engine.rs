//! Snapshot assembly: every indicator evaluated once at the series' last bar.

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::detect_recent_cross;
use crate::indicators::volatility::{calculate_atr, calculate_bollinger};
use crate::indicators::volume::{calculate_obv, calculate_volume_averages};
use crate::models::indicators::IndicatorSnapshot;
use crate::models::series::PriceSeries;
use tracing::debug;

pub struct IndicatorEngine {
    params: IndicatorParams,
}

impl IndicatorEngine {
    pub fn new(params: IndicatorParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> IndicatorParams {
        self.params
    }

    /// Compute the full snapshot for the series' final bar.
    ///
    /// Errors only on configuration problems (empty series, unusable window
    /// parameters). Indicators the history cannot support come back `None`.
    pub fn compute(&self, series: &PriceSeries) -> Result<IndicatorSnapshot, IndicatorError> {
        if !self.params.is_valid() {
            return Err(IndicatorError::InvalidWindows(format!(
                "{:?}",
                self.params
            )));
        }
        let last = series.last().ok_or(IndicatorError::EmptySeries)?;

        let bars = series.bars();
        let closes = series.closes();
        let volumes = series.volumes();
        let p = &self.params;

        debug!(bars = series.len(), date = %last.date, "computing indicator snapshot");

        let macd = calculate_macd(&closes, p.macd_fast, p.macd_slow, p.macd_signal)
            .ok_or(IndicatorError::EmptySeries)?;
        let obv = calculate_obv(bars, p.obv_ma_period).ok_or(IndicatorError::EmptySeries)?;
        let cross = detect_recent_cross(&closes, p.cross_fast, p.cross_slow);
        let price_max = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(IndicatorSnapshot {
            date: last.date,
            close: last.close,
            rsi: calculate_rsi(&closes, p.rsi_period),
            macd,
            atr: calculate_atr(bars, p.atr_period),
            bollinger: calculate_bollinger(&closes, p.bollinger_period),
            obv,
            volume: calculate_volume_averages(&volumes, p.volume_avg_short, p.volume_avg_long),
            recent_golden_cross: cross.golden,
            recent_dead_cross: cross.dead,
            price_max,
        })
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::new(IndicatorParams::default())
    }
}

/// Snapshot with the crate's default parameters.
pub fn compute_indicators(series: &PriceSeries) -> Result<IndicatorSnapshot, IndicatorError> {
    IndicatorEngine::default().compute(series)
}
