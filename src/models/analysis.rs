//! Per-ticker analysis records produced by a screening pass.
//!
//! These are the rows a batch run hands to whatever store the caller owns.

use crate::models::indicators::IndicatorSnapshot;
use crate::stage::Stage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Static ticker metadata supplied by the caller's universe source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMeta {
    pub code: String,
    pub name: String,
    pub market: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_earnings_date: Option<NaiveDate>,
}

/// Stage reading of the benchmark index (e.g. TOPIX) shared by every record
/// in a screening run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkContext {
    pub stage: Stage,
    pub ema_short: f64,
    pub ema_mid: f64,
    pub ema_long: f64,
}

/// One ticker's full analysis: stage, EMA triple, and indicator snapshot,
/// alongside the benchmark context it was screened under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAnalysis {
    pub code: String,
    pub name: String,
    pub market: String,
    /// Date of the series' last bar, not the wall clock.
    pub date: NaiveDate,
    pub benchmark: BenchmarkContext,
    pub stage: Stage,
    pub ema_short: f64,
    pub ema_mid: f64,
    pub ema_long: f64,
    pub indicators: IndicatorSnapshot,
    pub volume: f64,
}
