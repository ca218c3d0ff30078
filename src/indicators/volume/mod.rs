//! Volume indicators: OBV, rolling volume averages

pub mod averages;
pub mod obv;

pub use averages::*;
pub use obv::*;
