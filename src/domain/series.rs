//! Close-price series representation and validation.

use chrono::NaiveDate;

use super::error::TsmomError;

/// A single close price at a date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// A close-price series with strictly increasing dates.
///
/// Construction rejects out-of-order or duplicate dates rather than
/// silently reordering, and rejects non-positive closes (log returns are
/// undefined there). Every series handed to the engine is sound by
/// construction; irregular calendars are fine.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, TsmomError> {
        for (i, point) in points.iter().enumerate() {
            if !point.close.is_finite() || point.close <= 0.0 {
                return Err(TsmomError::MalformedSeries {
                    index: i,
                    reason: "close must be positive and finite".into(),
                });
            }
            if i > 0 {
                let prev = points[i - 1].date;
                if point.date == prev {
                    return Err(TsmomError::MalformedSeries {
                        index: i,
                        reason: format!("duplicate date {}", point.date),
                    });
                }
                if point.date < prev {
                    return Err(TsmomError::MalformedSeries {
                        index: i,
                        reason: format!("date {} out of order", point.date),
                    });
                }
            }
        }
        Ok(PriceSeries { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
