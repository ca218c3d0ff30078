//! Screening rules layered on the indicator and stage kernels: universe
//! filters, trailing loss-cut proposals, profit-target checks, and the
//! per-ticker analysis pass.

pub mod conditions;
pub mod screener;
pub mod stops;
pub mod targets;

pub use conditions::{CommonConditions, ScreenCandidate};
pub use screener::{ScreenError, StockScreener};
pub use stops::{propose_update, trailing_stop, Position};
pub use targets::target_reached;
