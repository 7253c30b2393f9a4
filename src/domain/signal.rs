//! Momentum signal generation.
//!
//! The composite score is a weighted sum of the short- and long-horizon
//! log returns; the discrete state follows from a threshold rule. A bar
//! only gets a signal once both horizons are out of warm-up.

use chrono::NaiveDate;

use super::config::StrategyParams;
use super::returns::log_returns;
use super::series::PriceSeries;

/// Discrete signal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalState {
    Long,
    Short,
    Flat,
}

/// One signal record for a bar past the warm-up window.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub date: NaiveDate,
    pub momentum_short: f64,
    pub momentum_long: f64,
    pub score: f64,
    pub state: SignalState,
}

/// All signals for a series, in date order.
///
/// Materialized eagerly: the full series is known upfront, and the same
/// inputs always regenerate the identical sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalSeries {
    signals: Vec<Signal>,
}

impl SignalSeries {
    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Signal for a specific date. `None` for warm-up bars and dates not
    /// on the series calendar.
    pub fn signal_at(&self, date: NaiveDate) -> Option<&Signal> {
        self.signals
            .binary_search_by_key(&date, |s| s.date)
            .ok()
            .map(|i| &self.signals[i])
    }
}

/// Map a composite score to a state.
///
/// `score > threshold` is Long, `score < -threshold` is Short, everything
/// else is Flat. Equality at either boundary resolves to Flat and the
/// comparison is exact, with no epsilon: with the default threshold of
/// 0.0 an exactly-zero score is Flat, not directional.
pub fn classify(score: f64, threshold: f64) -> SignalState {
    if score > threshold {
        SignalState::Long
    } else if score < -threshold {
        SignalState::Short
    } else {
        SignalState::Flat
    }
}

/// Generate the signal sequence for a series.
pub fn generate_signals(series: &PriceSeries, params: &StrategyParams) -> SignalSeries {
    let short = log_returns(series, params.period_short);
    let long = log_returns(series, params.period_long);

    let mut signals = Vec::new();
    for (i, point) in series.points().iter().enumerate() {
        let (Some(momentum_short), Some(momentum_long)) = (short[i], long[i]) else {
            continue;
        };
        let score = params.weight_short * momentum_short + params.weight_long * momentum_long;
        signals.push(Signal {
            date: point.date,
            momentum_short,
            momentum_long,
            score,
            state: classify(score, params.threshold),
        });
    }
    SignalSeries { signals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::PricePoint;
    use approx::assert_relative_eq;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days((d - 1) as i64)
    }

    fn make_series(closes: &[f64]) -> PriceSeries {
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: date(i as u32 + 1),
                close,
            })
            .collect();
        PriceSeries::new(points).unwrap()
    }

    fn small_params() -> StrategyParams {
        StrategyParams {
            period_short: 2,
            period_long: 4,
            ..StrategyParams::default()
        }
    }

    #[test]
    fn classify_positive_score() {
        assert_eq!(classify(0.01, 0.0), SignalState::Long);
    }

    #[test]
    fn classify_negative_score() {
        assert_eq!(classify(-0.01, 0.0), SignalState::Short);
    }

    #[test]
    fn classify_zero_score_is_flat() {
        // Exact tie at the boundary, no epsilon.
        assert_eq!(classify(0.0, 0.0), SignalState::Flat);
    }

    #[test]
    fn classify_boundary_with_nonzero_threshold() {
        assert_eq!(classify(0.05, 0.05), SignalState::Flat);
        assert_eq!(classify(-0.05, 0.05), SignalState::Flat);
        assert_eq!(classify(0.050001, 0.05), SignalState::Long);
        assert_eq!(classify(-0.050001, 0.05), SignalState::Short);
        assert_eq!(classify(0.02, 0.05), SignalState::Flat);
    }

    #[test]
    fn warmup_produces_no_signals() {
        let series = make_series(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0]);
        let signals = generate_signals(&series, &small_params());

        // First defined bar is index 4 (period_long = 4).
        assert_eq!(signals.len(), 2);
        assert_eq!(signals.signals()[0].date, date(5));
        assert_eq!(signals.signals()[1].date, date(6));
    }

    #[test]
    fn score_is_weighted_sum_of_log_returns() {
        let series = make_series(&[100.0, 101.0, 102.0, 103.0, 104.0]);
        let params = small_params();
        let signals = generate_signals(&series, &params);

        let sig = &signals.signals()[0];
        let r_short = (104.0_f64 / 102.0).ln();
        let r_long = (104.0_f64 / 100.0).ln();
        assert_relative_eq!(sig.momentum_short, r_short);
        assert_relative_eq!(sig.momentum_long, r_long);
        assert_relative_eq!(sig.score, 0.4 * r_short + 0.6 * r_long);
        assert_eq!(sig.state, SignalState::Long);
    }

    #[test]
    fn constant_prices_are_flat() {
        let series = make_series(&[100.0; 10]);
        let signals = generate_signals(&series, &small_params());

        assert_eq!(signals.len(), 6);
        for sig in signals.signals() {
            assert_eq!(sig.score, 0.0);
            assert_eq!(sig.state, SignalState::Flat);
        }
    }

    #[test]
    fn declining_prices_are_short() {
        let series = make_series(&[110.0, 108.0, 106.0, 104.0, 102.0, 100.0]);
        let signals = generate_signals(&series, &small_params());

        for sig in signals.signals() {
            assert!(sig.score < 0.0);
            assert_eq!(sig.state, SignalState::Short);
        }
    }

    #[test]
    fn short_series_yields_empty_signal_set() {
        let series = make_series(&[100.0, 101.0, 102.0]);
        let signals = generate_signals(&series, &small_params());
        assert!(signals.is_empty());
    }

    #[test]
    fn signal_at_looks_up_by_date() {
        let series = make_series(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0]);
        let signals = generate_signals(&series, &small_params());

        assert!(signals.signal_at(date(5)).is_some());
        assert_eq!(signals.signal_at(date(5)).unwrap().date, date(5));
        // Warm-up bar.
        assert!(signals.signal_at(date(3)).is_none());
        // Not on the calendar.
        assert!(signals.signal_at(date(30)).is_none());
    }

    #[test]
    fn regeneration_is_deterministic() {
        let series = make_series(&[100.0, 103.0, 99.0, 104.0, 101.0, 105.0, 102.0]);
        let params = small_params();
        let a = generate_signals(&series, &params);
        let b = generate_signals(&series, &params);
        assert_eq!(a, b);
    }
}
