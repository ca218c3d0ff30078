//! Six-state "grand cycle" stage classification from an EMA triple.

pub mod classifier;

pub use classifier::{classify_values, Stage, StageClassifier, StageError};
