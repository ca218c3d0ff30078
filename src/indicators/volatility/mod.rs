//! Volatility indicators: ATR, Bollinger Bands

pub mod atr;
pub mod bollinger;

pub use atr::*;
pub use bollinger::*;
