//! Unit tests for trailing loss-cut proposals

use chrono::{Duration, NaiveDate};
use kabuscan::config::TrailingStopPolicy;
use kabuscan::models::series::{Bar, PriceSeries};
use kabuscan::screening::stops::{
    propose_from_series, propose_update, round_to_tick, trailing_stop, Position,
};

#[test]
fn test_round_to_tick() {
    assert_eq!(round_to_tick(1234.0, 10.0), 1230.0);
    assert_eq!(round_to_tick(1236.0, 10.0), 1240.0);
    assert_eq!(round_to_tick(970.0, 10.0), 970.0);
}

#[test]
fn test_trailing_stop_bands() {
    let policy = TrailingStopPolicy::default();
    assert_eq!(trailing_stop(&policy, Position::Long, 1000.0, 20.0), 970.0);
    assert_eq!(trailing_stop(&policy, Position::Short, 1000.0, 20.0), 1030.0);
}

#[test]
fn test_long_stop_only_ratchets_up() {
    let policy = TrailingStopPolicy::default();
    assert_eq!(
        propose_update(&policy, Position::Long, 1000.0, 20.0, 960.0),
        Some(970.0)
    );
    // Equal or better current stop: no update.
    assert_eq!(propose_update(&policy, Position::Long, 1000.0, 20.0, 970.0), None);
    assert_eq!(propose_update(&policy, Position::Long, 1000.0, 20.0, 980.0), None);
}

#[test]
fn test_short_stop_only_ratchets_down() {
    let policy = TrailingStopPolicy::default();
    assert_eq!(
        propose_update(&policy, Position::Short, 1000.0, 20.0, 1040.0),
        Some(1030.0)
    );
    assert_eq!(
        propose_update(&policy, Position::Short, 1000.0, 20.0, 1030.0),
        None
    );
    assert_eq!(
        propose_update(&policy, Position::Short, 1000.0, 20.0, 1020.0),
        None
    );
}

#[test]
fn test_propose_from_series() {
    // Constant 20-point daily range, flat closes: ATR(20) is exactly 20.
    let start = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    let bars: Vec<Bar> = (0..25)
        .map(|i| {
            Bar::new(
                start + Duration::days(i as i64),
                1000.0,
                1010.0,
                990.0,
                1000.0,
                5_000.0,
            )
        })
        .collect();
    let series = PriceSeries::new(bars).unwrap();
    let policy = TrailingStopPolicy::default();

    assert_eq!(
        propose_from_series(&policy, Position::Long, &series, 900.0),
        Some(970.0)
    );
    assert_eq!(
        propose_from_series(&policy, Position::Long, &series, 975.0),
        None
    );
}

#[test]
fn test_propose_from_series_short_history() {
    // The policy's 20-bar ATR window needs 21 bars.
    let start = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
    let bars: Vec<Bar> = (0..20)
        .map(|i| {
            Bar::new(
                start + Duration::days(i as i64),
                1000.0,
                1010.0,
                990.0,
                1000.0,
                5_000.0,
            )
        })
        .collect();
    let series = PriceSeries::new(bars).unwrap();
    let policy = TrailingStopPolicy::default();
    assert_eq!(
        propose_from_series(&policy, Position::Long, &series, 0.0),
        None
    );
}
