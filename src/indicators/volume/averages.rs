//! Rolling volume averages

use crate::common::math;
use crate::models::indicators::VolumeAverages;

pub fn calculate_volume_averages(
    volumes: &[f64],
    short_period: usize,
    long_period: usize,
) -> VolumeAverages {
    VolumeAverages {
        avg_5d: math::sma(volumes, short_period),
        avg_20d: math::sma(volumes, long_period),
    }
}
