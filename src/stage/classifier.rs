//! Stage classification: map the ordering of three EMA horizons at the
//! latest bar to one of six trend-phase regimes.
//!
//! Stages 1–6 follow the Ichimoku-style grand-cycle reading: stage 1 is an
//! established advance (short above mid above long), stage 4 the mirror
//! decline, the rest the transitions between them.

use crate::config::EmaWindows;
use crate::indicators::trend::EmaStack;
use crate::models::series::PriceSeries;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Stage1,
    Stage2,
    Stage3,
    Stage4,
    Stage5,
    Stage6,
    /// Ties, NaN inputs, or a series too short to read.
    Indeterminate,
}

impl Stage {
    /// The regime number, or `None` for indeterminate.
    pub fn as_number(&self) -> Option<u8> {
        match self {
            Stage::Stage1 => Some(1),
            Stage::Stage2 => Some(2),
            Stage::Stage3 => Some(3),
            Stage::Stage4 => Some(4),
            Stage::Stage5 => Some(5),
            Stage::Stage6 => Some(6),
            Stage::Indeterminate => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_number() {
            Some(n) => write!(f, "stage {}", n),
            None => write!(f, "indeterminate"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    /// Classifier windows are zero or not strictly increasing.
    InvalidWindows(EmaWindows),
    /// The EMA stack was computed under different windows than the
    /// classifier's. Refusing to misread it beats guessing.
    WindowMismatch {
        expected: EmaWindows,
        got: EmaWindows,
    },
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageError::InvalidWindows(w) => write!(
                f,
                "EMA windows {}/{}/{} must be nonzero and strictly increasing",
                w.short, w.mid, w.long
            ),
            StageError::WindowMismatch { expected, got } => write!(
                f,
                "EMA stack windows {}/{}/{} do not match classifier windows {}/{}/{}",
                got.short, got.mid, got.long, expected.short, expected.mid, expected.long
            ),
        }
    }
}

impl std::error::Error for StageError {}

/// Classify a precomputed (short, mid, long) EMA triple.
///
/// Total over all inputs: the six strict orderings map to their stage, any
/// tie or NaN to indeterminate. No fallback branch fires for distinct
/// finite values.
pub fn classify_values(short: f64, mid: f64, long: f64) -> Stage {
    if short.is_nan() || mid.is_nan() || long.is_nan() {
        return Stage::Indeterminate;
    }
    if short > mid && mid > long {
        Stage::Stage1
    } else if mid > short && short > long {
        Stage::Stage2
    } else if mid > long && long > short {
        Stage::Stage3
    } else if long > mid && mid > short {
        Stage::Stage4
    } else if long > short && short > mid {
        Stage::Stage5
    } else if short > long && long > mid {
        Stage::Stage6
    } else {
        Stage::Indeterminate
    }
}

pub struct StageClassifier {
    windows: EmaWindows,
}

impl StageClassifier {
    pub fn new(windows: EmaWindows) -> Result<Self, StageError> {
        if !windows.is_valid() {
            return Err(StageError::InvalidWindows(windows));
        }
        Ok(Self { windows })
    }

    /// Classifier with the canonical 5/20/40 windows.
    pub fn with_defaults() -> Self {
        Self {
            windows: EmaWindows::default(),
        }
    }

    pub fn windows(&self) -> EmaWindows {
        self.windows
    }

    /// Classify the last row of a precomputed EMA stack.
    ///
    /// A stack computed under different windows is a configuration error,
    /// never silently reinterpreted. An empty stack reads as indeterminate.
    pub fn classify_stack(&self, stack: &EmaStack) -> Result<Stage, StageError> {
        if stack.windows() != self.windows {
            return Err(StageError::WindowMismatch {
                expected: self.windows,
                got: stack.windows(),
            });
        }
        Ok(match stack.latest() {
            Some((short, mid, long)) => classify_values(short, mid, long),
            None => Stage::Indeterminate,
        })
    }

    /// Compute the EMA stack for the series and classify its last bar.
    pub fn classify_series(&self, series: &PriceSeries) -> Result<Stage, StageError> {
        let stack = EmaStack::compute(series, self.windows)
            .map_err(|_| StageError::InvalidWindows(self.windows))?;
        self.classify_stack(&stack)
    }

    /// Latest stage per ticker. Empty series read as indeterminate rather
    /// than dropping the ticker.
    pub fn analyze_all(
        &self,
        table: &HashMap<String, PriceSeries>,
    ) -> Result<HashMap<String, Stage>, StageError> {
        let mut out = HashMap::with_capacity(table.len());
        for (ticker, series) in table {
            out.insert(ticker.clone(), self.classify_series(series)?);
        }
        Ok(out)
    }
}

impl Default for StageClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}
