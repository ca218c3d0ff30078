//! Trend indicators: EMA stack and cross detection

pub mod ema;

pub use ema::*;
