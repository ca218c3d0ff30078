//! Bollinger Bands indicator
//!
//! Middle = SMA(period) of close
//! Bands at ±1σ and ±2σ, sample standard deviation

use crate::common::math;
use crate::models::indicators::BollingerBands;

pub fn calculate_bollinger(closes: &[f64], period: usize) -> Option<BollingerBands> {
    let middle = math::sma(closes, period)?;
    let std = math::sample_std(closes, period)?;
    Some(BollingerBands {
        middle,
        plus_1sigma: middle + std,
        plus_2sigma: middle + 2.0 * std,
        minus_1sigma: middle - std,
        minus_2sigma: middle - 2.0 * std,
    })
}
