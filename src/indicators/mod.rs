pub mod engine;
pub mod error;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use engine::{compute_indicators, IndicatorEngine};
pub use error::IndicatorError;
