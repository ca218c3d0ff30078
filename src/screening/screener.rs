//! Per-ticker analysis pass: stage plus indicator snapshot per ticker,
//! benchmark context alongside, failed tickers skipped with a warning.

use crate::config::{EmaWindows, IndicatorParams};
use crate::indicators::engine::IndicatorEngine;
use crate::indicators::error::IndicatorError;
use crate::indicators::trend::EmaStack;
use crate::models::analysis::{BenchmarkContext, StockAnalysis, StockMeta};
use crate::models::series::PriceSeries;
use crate::services::market_data::PriceHistoryProvider;
use crate::stage::{Stage, StageClassifier, StageError};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum ScreenError {
    /// A series with no bars where a full analysis was required.
    EmptySeries { ticker: String },
    Indicator(IndicatorError),
    Stage(StageError),
    Provider { ticker: String, message: String },
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenError::EmptySeries { ticker } => {
                write!(f, "no price history for {}", ticker)
            }
            ScreenError::Indicator(e) => write!(f, "indicator error: {}", e),
            ScreenError::Stage(e) => write!(f, "stage error: {}", e),
            ScreenError::Provider { ticker, message } => {
                write!(f, "provider failed for {}: {}", ticker, message)
            }
        }
    }
}

impl std::error::Error for ScreenError {}

impl From<IndicatorError> for ScreenError {
    fn from(e: IndicatorError) -> Self {
        ScreenError::Indicator(e)
    }
}

impl From<StageError> for ScreenError {
    fn from(e: StageError) -> Self {
        ScreenError::Stage(e)
    }
}

pub struct StockScreener {
    windows: EmaWindows,
    classifier: StageClassifier,
    engine: IndicatorEngine,
}

impl StockScreener {
    pub fn new(windows: EmaWindows, params: IndicatorParams) -> Result<Self, StageError> {
        Ok(Self {
            windows,
            classifier: StageClassifier::new(windows)?,
            engine: IndicatorEngine::new(params),
        })
    }

    pub fn with_defaults() -> Self {
        Self {
            windows: EmaWindows::default(),
            classifier: StageClassifier::with_defaults(),
            engine: IndicatorEngine::default(),
        }
    }

    /// Tickers whose latest stage equals `target`, sorted for stable output.
    pub fn filter_by_stage(
        &self,
        table: &HashMap<String, PriceSeries>,
        target: Stage,
    ) -> Result<Vec<String>, StageError> {
        let stages = self.classifier.analyze_all(table)?;
        let mut matched: Vec<String> = stages
            .into_iter()
            .filter(|(_, stage)| *stage == target)
            .map(|(ticker, _)| ticker)
            .collect();
        matched.sort();
        Ok(matched)
    }

    /// Stage and EMA triple of the benchmark index; shared by every record
    /// of a screening run. Unlike per-ticker analysis this must succeed, so
    /// an empty benchmark series is an error.
    pub fn benchmark_context(&self, series: &PriceSeries) -> Result<BenchmarkContext, ScreenError> {
        let stack = EmaStack::compute(series, self.windows)?;
        let (ema_short, ema_mid, ema_long) =
            stack.latest().ok_or_else(|| ScreenError::EmptySeries {
                ticker: "benchmark".to_string(),
            })?;
        let stage = self.classifier.classify_stack(&stack)?;
        Ok(BenchmarkContext {
            stage,
            ema_short,
            ema_mid,
            ema_long,
        })
    }

    /// One ticker's full analysis record. The record date is the series'
    /// last bar date, not the wall clock.
    pub fn analyze(
        &self,
        meta: &StockMeta,
        series: &PriceSeries,
        benchmark: BenchmarkContext,
    ) -> Result<StockAnalysis, ScreenError> {
        let last = *series.last().ok_or_else(|| ScreenError::EmptySeries {
            ticker: meta.code.clone(),
        })?;
        let stack = EmaStack::compute(series, self.windows)?;
        let (ema_short, ema_mid, ema_long) =
            stack.latest().ok_or_else(|| ScreenError::EmptySeries {
                ticker: meta.code.clone(),
            })?;
        let stage = self.classifier.classify_stack(&stack)?;
        let indicators = self.engine.compute(series)?;

        Ok(StockAnalysis {
            code: meta.code.clone(),
            name: meta.name.clone(),
            market: meta.market.clone(),
            date: last.date,
            benchmark,
            stage,
            ema_short,
            ema_mid,
            ema_long,
            indicators,
            volume: last.volume,
        })
    }

    /// Walk a universe through a provider. The benchmark must resolve;
    /// individual tickers that fail to fetch or analyze are logged and
    /// skipped, per-item, so one bad ticker never sinks the run.
    pub fn screen(
        &self,
        provider: &dyn PriceHistoryProvider,
        benchmark_ticker: &str,
        universe: &[StockMeta],
    ) -> Result<Vec<StockAnalysis>, ScreenError> {
        let benchmark_series =
            provider
                .history(benchmark_ticker)
                .map_err(|e| ScreenError::Provider {
                    ticker: benchmark_ticker.to_string(),
                    message: e.to_string(),
                })?;
        let benchmark = self.benchmark_context(&benchmark_series)?;

        let mut results = Vec::with_capacity(universe.len());
        for meta in universe {
            debug!(code = %meta.code, "screening ticker");
            let series = match provider.history(&meta.code) {
                Ok(series) => series,
                Err(e) => {
                    warn!(code = %meta.code, error = %e, "price history unavailable, skipping");
                    continue;
                }
            };
            match self.analyze(meta, &series, benchmark) {
                Ok(record) => results.push(record),
                Err(e) => {
                    warn!(code = %meta.code, error = %e, "analysis failed, skipping");
                }
            }
        }
        info!(
            analyzed = results.len(),
            universe = universe.len(),
            "screening pass complete"
        );
        Ok(results)
    }
}

impl Default for StockScreener {
    fn default() -> Self {
        Self::with_defaults()
    }
}
