use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    /// One-bar change of RSI; needs two defined RSI values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub middle: f64,
    pub plus_1sigma: f64,
    pub plus_2sigma: f64,
    pub minus_1sigma: f64,
    pub minus_2sigma: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObvIndicator {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_2: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_3: Option<f64>,
    /// 20-bar rolling mean of OBV.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ma: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeAverages {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_5d: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_20d: Option<f64>,
}

/// Scalar indicator values at a series' final bar.
///
/// Fields an indicator could not produce for lack of history are `None`;
/// short history is a data-quality signal, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// Date of the bar the snapshot was taken at.
    pub date: NaiveDate,
    pub close: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiIndicator>,
    pub macd: MacdIndicator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBands>,
    pub obv: ObvIndicator,
    pub volume: VolumeAverages,
    pub recent_golden_cross: bool,
    pub recent_dead_cross: bool,
    /// Maximum close over the whole supplied series. Callers window the
    /// series themselves when they want a "since buy" reading.
    pub price_max: f64,
}
