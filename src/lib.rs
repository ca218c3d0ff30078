//! kabuscan: indicator and stage-classification kernel for Japanese equity
//! screening.
//!
//! The crate is pure computation over in-memory daily OHLCV series: an
//! indicator engine producing a snapshot at the latest bar, a six-state
//! moving-average-ordering stage classifier, and the screening rules built
//! on top of them. Price history arrives through the
//! [`services::market_data::PriceHistoryProvider`] seam; persistence and
//! delivery of results stay with the caller.

pub mod common;
pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod screening;
pub mod services;
pub mod stage;

pub use config::{EmaWindows, IndicatorParams};
pub use indicators::engine::{compute_indicators, IndicatorEngine};
pub use models::indicators::IndicatorSnapshot;
pub use models::series::{Bar, PriceSeries};
pub use stage::{Stage, StageClassifier};
