//! Trailing loss-cut proposals: 1.5×ATR from the latest close, rounded to
//! the 10-yen tick, ratcheting only in the position's favor.

use crate::config::TrailingStopPolicy;
use crate::indicators::volatility::calculate_atr;
use crate::models::series::PriceSeries;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Long,
    Short,
}

/// Round to the nearest multiple of `tick`.
pub fn round_to_tick(value: f64, tick: f64) -> f64 {
    (value / tick).round() * tick
}

/// The stop a fresh position would start from: close minus the ATR band for
/// longs, plus it for shorts.
pub fn trailing_stop(policy: &TrailingStopPolicy, position: Position, close: f64, atr: f64) -> f64 {
    let band = policy.atr_multiplier * atr;
    let raw = match position {
        Position::Long => close - band,
        Position::Short => close + band,
    };
    round_to_tick(raw, policy.tick)
}

/// A tightened stop, or `None` when the candidate does not improve on the
/// current one. Long stops only ever move up, short stops only down.
pub fn propose_update(
    policy: &TrailingStopPolicy,
    position: Position,
    close: f64,
    atr: f64,
    current_stop: f64,
) -> Option<f64> {
    let candidate = trailing_stop(policy, position, close, atr);
    let improves = match position {
        Position::Long => candidate > current_stop,
        Position::Short => candidate < current_stop,
    };
    improves.then_some(candidate)
}

/// Convenience over a price series: reads the policy's own ATR window (20
/// bars historically, independent of the snapshot's ATR) and the last close.
/// `None` when the history cannot support the ATR window or no update is due.
pub fn propose_from_series(
    policy: &TrailingStopPolicy,
    position: Position,
    series: &PriceSeries,
    current_stop: f64,
) -> Option<f64> {
    let atr = calculate_atr(series.bars(), policy.atr_period)?;
    let close = series.last()?.close;
    propose_update(policy, position, close, atr, current_stop)
}
