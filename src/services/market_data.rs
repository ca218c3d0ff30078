//! Price-history provider interface. Fetching is the surrounding system's
//! business; the kernel only states the contract it consumes.

use crate::models::series::PriceSeries;

pub trait PriceHistoryProvider {
    /// Daily OHLCV history for a ticker, oldest bar first.
    fn history(&self, ticker: &str) -> Result<PriceSeries, Box<dyn std::error::Error>>;
}
