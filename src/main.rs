use chrono::{Duration, NaiveDate};
use kabuscan::config::TrailingStopPolicy;
use kabuscan::indicators::compute_indicators;
use kabuscan::models::series::{Bar, PriceSeries};
use kabuscan::screening::{propose_update, Position};
use kabuscan::stage::StageClassifier;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    kabuscan::logging::init_logging();

    let series = demo_series()?;
    let snapshot = compute_indicators(&series)?;
    let classifier = StageClassifier::with_defaults();
    let stage = classifier.classify_series(&series)?;

    println!("Snapshot over {} bars:", series.len());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    println!("Stage: {}", stage);

    if let Some(atr) = snapshot.atr {
        let policy = TrailingStopPolicy::default();
        match propose_update(&policy, Position::Long, snapshot.close, atr, 0.0) {
            Some(stop) => println!("Proposed trailing stop (long): {:.0}", stop),
            None => println!("No trailing stop update due"),
        }
    }

    Ok(())
}

/// Sixty synthetic daily bars: a steady climb with a mild wobble, enough
/// history for every default window.
fn demo_series() -> Result<PriceSeries, Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).ok_or("bad start date")?;
    let mut bars = Vec::with_capacity(60);
    for i in 0..60 {
        let drift = 1200.0 + i as f64 * 6.0;
        let wobble = (i as f64 * 0.9).sin() * 8.0;
        let close = drift + wobble;
        bars.push(Bar::new(
            start + Duration::days(i),
            close - 3.0,
            close + 5.0,
            close - 6.0,
            close,
            80_000.0 + (i as f64 * 13.0) % 7_000.0,
        ));
    }
    Ok(PriceSeries::new(bars)?)
}
