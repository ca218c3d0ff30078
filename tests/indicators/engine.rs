//! Unit tests for the indicator engine snapshot assembly

use chrono::{Duration, NaiveDate};
use kabuscan::config::IndicatorParams;
use kabuscan::indicators::{compute_indicators, IndicatorEngine, IndicatorError};
use kabuscan::models::series::{Bar, PriceSeries};

fn rising_series(count: usize) -> PriceSeries {
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let bars = (0..count)
        .map(|i| {
            let close = 100.0 + i as f64;
            Bar::new(
                start + Duration::days(i as i64),
                close - 0.2,
                close + 0.5,
                close - 0.5,
                close,
                10_000.0 + i as f64 * 100.0,
            )
        })
        .collect();
    PriceSeries::new(bars).unwrap()
}

#[test]
fn test_empty_series_is_configuration_error() {
    let result = compute_indicators(&PriceSeries::empty());
    assert!(matches!(result, Err(IndicatorError::EmptySeries)));
}

#[test]
fn test_invalid_params_rejected() {
    let params = IndicatorParams {
        macd_fast: 26,
        macd_slow: 12,
        ..IndicatorParams::default()
    };
    let engine = IndicatorEngine::new(params);
    let result = engine.compute(&rising_series(40));
    assert!(matches!(result, Err(IndicatorError::InvalidWindows(_))));
}

#[test]
fn test_full_snapshot_on_long_uptrend() {
    let series = rising_series(40);
    let snapshot = compute_indicators(&series).unwrap();

    assert_eq!(snapshot.close, 139.0);
    assert_eq!(snapshot.price_max, 139.0);
    assert_eq!(snapshot.date, series.last().unwrap().date);

    // No losing bar anywhere: RSI pinned at the ceiling.
    let rsi = snapshot.rsi.unwrap();
    assert_eq!(rsi.value, 100.0);

    assert!(snapshot.macd.macd > 0.0);
    assert!(snapshot.macd.histogram > 0.0);
    assert!(snapshot.atr.is_some());

    let bands = snapshot.bollinger.unwrap();
    assert!(bands.plus_2sigma > bands.middle);
    assert!(bands.middle > bands.minus_2sigma);

    assert!(snapshot.obv.prev_1.is_some());
    assert!(snapshot.obv.value > snapshot.obv.prev_1.unwrap());
    assert!(snapshot.obv.ma.is_some());

    assert!(snapshot.volume.avg_5d.is_some());
    assert!(snapshot.volume.avg_20d.is_some());
}

#[test]
fn test_short_history_degrades_to_none() {
    let snapshot = compute_indicators(&rising_series(10)).unwrap();
    // Under every 14/20-bar window, but never an error.
    assert!(snapshot.rsi.is_none());
    assert!(snapshot.atr.is_none());
    assert!(snapshot.bollinger.is_none());
    assert!(snapshot.obv.ma.is_none());
    assert!(snapshot.volume.avg_5d.is_some());
    assert!(snapshot.volume.avg_20d.is_none());
    // EMAs seed from the first bar, so MACD and the max are still there.
    assert!(snapshot.macd.macd > 0.0);
    assert_eq!(snapshot.price_max, 109.0);
}

#[test]
fn test_no_cross_flags_in_steady_trend() {
    let snapshot = compute_indicators(&rising_series(40)).unwrap();
    // EMA5 has been above EMA20 the whole way; nothing crossed recently.
    assert!(!snapshot.recent_golden_cross);
    assert!(!snapshot.recent_dead_cross);
}

#[test]
fn test_snapshot_serializes() {
    let snapshot = compute_indicators(&rising_series(40)).unwrap();
    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed: kabuscan::models::indicators::IndicatorSnapshot =
        serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}
