//! Synthetic price data adapter.
//!
//! Seeded geometric random walk used for demo runs and as a stand-in
//! when no CSV data is configured. The same seed always reproduces the
//! same series.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::domain::error::TsmomError;
use crate::domain::series::{PricePoint, PriceSeries};
use crate::ports::data_port::DataPort;

pub struct SyntheticAdapter {
    pub start_date: NaiveDate,
    pub bars: usize,
    pub start_price: f64,
    /// Mean of the per-bar log return.
    pub drift: f64,
    /// Standard deviation of the per-bar log return.
    pub volatility: f64,
    pub seed: u64,
}

impl SyntheticAdapter {
    fn generate(&self) -> Result<Vec<PricePoint>, TsmomError> {
        let normal =
            Normal::new(self.drift, self.volatility).map_err(|e| TsmomError::Data {
                reason: format!("invalid synthetic parameters: {e}"),
            })?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut points = Vec::with_capacity(self.bars);
        let mut price = self.start_price;
        for i in 0..self.bars {
            // Log-normal steps keep the price strictly positive.
            price *= normal.sample(&mut rng).exp();
            points.push(PricePoint {
                date: self.start_date + chrono::Duration::days(i as i64),
                close: price,
            });
        }
        Ok(points)
    }
}

impl DataPort for SyntheticAdapter {
    fn fetch_closes(
        &self,
        _symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceSeries, TsmomError> {
        let points = self
            .generate()?
            .into_iter()
            .filter(|p| p.date >= start_date && p.date <= end_date)
            .collect();
        PriceSeries::new(points)
    }
}
