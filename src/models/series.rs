use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One daily OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// An ordered daily price history.
///
/// Bars are ascending by date with no duplicates; gaps are fine (market
/// holidays are naturally absent). The series is immutable once built:
/// derived values (EMA stacks, snapshots) live in their own structures and
/// never get written back into the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesError {
    OutOfOrder { index: usize },
    DuplicateDate { date: NaiveDate },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::OutOfOrder { index } => {
                write!(f, "bar at index {} is not in ascending date order", index)
            }
            SeriesError::DuplicateDate { date } => {
                write!(f, "duplicate bar date {}", date)
            }
        }
    }
}

impl std::error::Error for SeriesError {}

impl PriceSeries {
    /// Build a series, validating date ordering.
    pub fn new(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        for (i, pair) in bars.windows(2).enumerate() {
            if pair[1].date < pair[0].date {
                return Err(SeriesError::OutOfOrder { index: i + 1 });
            }
            if pair[1].date == pair[0].date {
                return Err(SeriesError::DuplicateDate { date: pair[1].date });
            }
        }
        Ok(Self { bars })
    }

    /// An empty series. Valid to construct; most consumers treat it as
    /// insufficient data.
    pub fn empty() -> Self {
        Self { bars: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }
}

impl<'de> Deserialize<'de> for PriceSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bars = Vec::<Bar>::deserialize(deserializer)?;
        PriceSeries::new(bars).map_err(serde::de::Error::custom)
    }
}
