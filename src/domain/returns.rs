//! Multi-horizon log returns.

use super::series::PriceSeries;

/// h-period log return aligned to the input series.
///
/// `result[i] = ln(close[i] / close[i - period])` for `i >= period`;
/// earlier entries are `None` (warm-up). A series with fewer than
/// `period + 1` points yields all `None`, a valid empty outcome rather
/// than an error. Callers validate `period >= 1` via `StrategyParams::validate`.
pub fn log_returns(series: &PriceSeries, period: usize) -> Vec<Option<f64>> {
    let points = series.points();
    let mut out = Vec::with_capacity(points.len());
    for i in 0..points.len() {
        if period > 0 && i >= period {
            out.push(Some((points[i].close / points[i - period].close).ln()));
        } else {
            out.push(None);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::PricePoint;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn make_series(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PricePoint {
                date: start + chrono::Duration::days(i as i64),
                close,
            })
            .collect();
        PriceSeries::new(points).unwrap()
    }

    #[test]
    fn warmup_entries_are_none() {
        let series = make_series(&[100.0, 105.0, 110.0, 115.0, 120.0]);
        let returns = log_returns(&series, 3);

        assert_eq!(returns.len(), 5);
        assert!(returns[0].is_none());
        assert!(returns[1].is_none());
        assert!(returns[2].is_none());
        assert!(returns[3].is_some());
        assert!(returns[4].is_some());
    }

    #[test]
    fn log_return_values() {
        let series = make_series(&[100.0, 105.0, 110.0, 115.0]);
        let returns = log_returns(&series, 2);

        assert_relative_eq!(returns[2].unwrap(), (110.0_f64 / 100.0).ln());
        assert_relative_eq!(returns[3].unwrap(), (115.0_f64 / 105.0).ln());
    }

    #[test]
    fn negative_return_on_decline() {
        let series = make_series(&[100.0, 90.0, 80.0]);
        let returns = log_returns(&series, 2);

        let r = returns[2].unwrap();
        assert_relative_eq!(r, (80.0_f64 / 100.0).ln());
        assert!(r < 0.0);
    }

    #[test]
    fn constant_prices_give_zero_returns() {
        let series = make_series(&[50.0; 10]);
        let returns = log_returns(&series, 4);

        for r in returns.iter().skip(4) {
            assert_eq!(r.unwrap(), 0.0);
        }
    }

    #[test]
    fn short_series_yields_all_none() {
        // Fewer than period + 1 points: every entry undefined, no error.
        let series = make_series(&[100.0, 101.0, 102.0]);
        let returns = log_returns(&series, 5);

        assert_eq!(returns.len(), 3);
        assert!(returns.iter().all(|r| r.is_none()));
    }

    #[test]
    fn empty_series_yields_empty() {
        let series = PriceSeries::new(vec![]).unwrap();
        assert!(log_returns(&series, 5).is_empty());
    }
}
