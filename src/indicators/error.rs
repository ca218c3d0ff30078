use std::fmt;

/// Configuration-class failures of the indicator engine.
///
/// Short history is never an error; affected snapshot fields come back
/// `None` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    /// The series has no bars, so there is no final bar to snapshot.
    EmptySeries,
    /// A window parameter is zero, inverted, or otherwise unusable.
    InvalidWindows(String),
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::EmptySeries => write!(f, "price series is empty"),
            IndicatorError::InvalidWindows(detail) => {
                write!(f, "invalid window configuration: {}", detail)
            }
        }
    }
}

impl std::error::Error for IndicatorError {}
