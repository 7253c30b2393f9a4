#![allow(dead_code)]

use chrono::NaiveDate;
use tsmom::domain::config::{BacktestConfig, StrategyParams};
use tsmom::domain::series::{PricePoint, PriceSeries};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn day(offset: usize) -> NaiveDate {
    date(2024, 1, 1) + chrono::Duration::days(offset as i64)
}

/// Build a series from closes on consecutive days starting 2024-01-01.
pub fn make_series(closes: &[f64]) -> PriceSeries {
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: day(i),
            close,
        })
        .collect();
    PriceSeries::new(points).unwrap()
}

/// Geometric rise for `up` bars followed by a geometric fall for `down`
/// bars, starting at 100.
pub fn trend_series(up: usize, up_rate: f64, down: usize, down_rate: f64) -> PriceSeries {
    let mut closes = Vec::with_capacity(up + down);
    let mut price = 100.0;
    for _ in 0..up {
        price *= 1.0 + up_rate;
        closes.push(price);
    }
    for _ in 0..down {
        price *= 1.0 - down_rate;
        closes.push(price);
    }
    make_series(&closes)
}

pub fn default_params() -> StrategyParams {
    StrategyParams::default()
}

pub fn small_params() -> StrategyParams {
    StrategyParams {
        period_short: 2,
        period_long: 4,
        ..StrategyParams::default()
    }
}

pub fn default_config() -> BacktestConfig {
    BacktestConfig::default()
}
