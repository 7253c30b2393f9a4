//! CSV close-price data adapter.
//!
//! Reads `{symbol}.csv` files with `date,close` columns. Ordering and
//! deduplication are this adapter's job; the core only validates.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::error::TsmomError;
use crate::domain::series::{PricePoint, PriceSeries};
use crate::ports::data_port::DataPort;

pub struct CsvAdapter {
    base_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, symbol: &str) -> PathBuf {
        self.base_path.join(format!("{symbol}.csv"))
    }
}

impl DataPort for CsvAdapter {
    fn fetch_closes(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceSeries, TsmomError> {
        let path = self.csv_path(symbol);
        let mut rdr = csv::Reader::from_path(&path).map_err(|e| TsmomError::Data {
            reason: format!("failed to open {}: {}", path.display(), e),
        })?;

        let mut points = Vec::new();
        for result in rdr.records() {
            let record = result.map_err(|e| TsmomError::Data {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;

            let date_str = record.get(0).ok_or_else(|| TsmomError::Data {
                reason: "missing date column".into(),
            })?;
            let date =
                NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| TsmomError::Data {
                    reason: format!("invalid date '{date_str}': {e}"),
                })?;

            if date < start_date || date > end_date {
                continue;
            }

            let close: f64 = record
                .get(1)
                .ok_or_else(|| TsmomError::Data {
                    reason: "missing close column".into(),
                })?
                .parse()
                .map_err(|e| TsmomError::Data {
                    reason: format!("invalid close value: {e}"),
                })?;

            points.push(PricePoint { date, close });
        }

        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        PriceSeries::new(points)
    }
}
