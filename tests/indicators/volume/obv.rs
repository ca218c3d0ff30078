//! Unit tests for the OBV indicator

use chrono::{Duration, NaiveDate};
use kabuscan::indicators::volume::{calculate_obv, calculate_volume_averages, obv_series};
use kabuscan::models::series::Bar;

fn bars_from(closes: &[f64], volume: f64) -> Vec<Bar> {
    let start = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Bar::new(
                start + Duration::days(i as i64),
                close,
                close + 1.0,
                close - 1.0,
                close,
                volume,
            )
        })
        .collect()
}

#[test]
fn test_obv_first_bar_counts_as_down() {
    let bars = bars_from(&[100.0], 500.0);
    assert_eq!(obv_series(&bars), vec![-500.0]);
}

#[test]
fn test_obv_flat_close_counts_as_down() {
    let bars = bars_from(&[100.0, 100.0], 500.0);
    assert_eq!(obv_series(&bars), vec![-500.0, -1000.0]);
}

#[test]
fn test_obv_strictly_increasing_in_uptrend() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
    let series = obv_series(&bars_from(&closes, 500.0));
    for pair in series.windows(2) {
        assert!(pair[1] > pair[0]);
    }
}

#[test]
fn test_obv_mixed_signs() {
    // up, down, up from the second bar on.
    let bars = bars_from(&[100.0, 101.0, 99.0, 103.0], 100.0);
    assert_eq!(obv_series(&bars), vec![-100.0, 0.0, -100.0, 0.0]);
}

#[test]
fn test_obv_prior_values() {
    let closes: Vec<f64> = (0..5).map(|i| 100.0 + i as f64).collect();
    let obv = calculate_obv(&bars_from(&closes, 100.0), 20).unwrap();
    assert_eq!(obv.value, 300.0);
    assert_eq!(obv.prev_1, Some(200.0));
    assert_eq!(obv.prev_2, Some(100.0));
    assert_eq!(obv.prev_3, Some(0.0));
    // 20-bar mean undefined on 5 bars.
    assert!(obv.ma.is_none());
}

#[test]
fn test_obv_prior_values_short_series() {
    let obv = calculate_obv(&bars_from(&[100.0, 101.0, 102.0], 100.0), 20).unwrap();
    assert_eq!(obv.prev_1, Some(0.0));
    assert_eq!(obv.prev_2, Some(-100.0));
    assert_eq!(obv.prev_3, None);
}

#[test]
fn test_obv_empty() {
    assert!(calculate_obv(&[], 20).is_none());
}

#[test]
fn test_obv_ma_with_enough_bars() {
    let closes: Vec<f64> = (0..25).map(|i| 100.0 + i as f64).collect();
    let obv = calculate_obv(&bars_from(&closes, 100.0), 20).unwrap();
    assert!(obv.ma.is_some());
}

#[test]
fn test_volume_averages() {
    let volumes: Vec<f64> = (1..=10).map(|i| i as f64 * 100.0).collect();
    let avgs = calculate_volume_averages(&volumes, 5, 20);
    // Last five: 600..=1000.
    assert_eq!(avgs.avg_5d, Some(800.0));
    assert_eq!(avgs.avg_20d, None);
}
