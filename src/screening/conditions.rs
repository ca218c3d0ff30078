//! Common buy/sell screening conditions: market segment, price ceiling,
//! volume floor, and earnings-date proximity.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A ticker as it enters the common filter: static metadata plus its latest
/// close and volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenCandidate {
    pub code: String,
    pub market: String,
    pub close: f64,
    pub volume: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_earnings_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonConditions {
    /// Market segment to keep (TSE Prime by default).
    pub market: String,
    /// Keep closes at or under this price.
    pub price_limit: f64,
    /// Keep volumes at or over this floor.
    pub volume_threshold: f64,
    /// Drop candidates reporting earnings within this many days.
    pub days_to_earnings: i64,
}

impl Default for CommonConditions {
    fn default() -> Self {
        Self {
            market: "Prime".to_string(),
            price_limit: 3000.0,
            volume_threshold: 50_000.0,
            days_to_earnings: 10,
        }
    }
}

impl CommonConditions {
    /// The reference date is a parameter so screening stays a pure function
    /// of its inputs.
    pub fn passes(&self, candidate: &ScreenCandidate, today: NaiveDate) -> bool {
        if candidate.market != self.market {
            return false;
        }
        if candidate.close > self.price_limit {
            return false;
        }
        if candidate.volume < self.volume_threshold {
            return false;
        }
        let deadline = today + Duration::days(self.days_to_earnings);
        match candidate.next_earnings_date {
            // No scheduled earnings is fine; an imminent report is not.
            None => true,
            Some(date) => date > deadline,
        }
    }

    pub fn filter(
        &self,
        candidates: &[ScreenCandidate],
        today: NaiveDate,
    ) -> Vec<ScreenCandidate> {
        candidates
            .iter()
            .filter(|c| self.passes(c, today))
            .cloned()
            .collect()
    }
}
