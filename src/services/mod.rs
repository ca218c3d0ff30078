//! Contracts consumed from the surrounding system.

pub mod market_data;

pub use market_data::PriceHistoryProvider;
