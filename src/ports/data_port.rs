//! Data access port trait.
//!
//! The core never performs I/O; an adapter behind this trait supplies an
//! already time-ordered, deduplicated close-price series.

use chrono::NaiveDate;

use crate::domain::error::TsmomError;
use crate::domain::series::PriceSeries;

pub trait DataPort {
    fn fetch_closes(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<PriceSeries, TsmomError>;
}
