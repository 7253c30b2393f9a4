//! Position and trade bookkeeping.

use chrono::NaiveDate;

/// Direction of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Long,
    Short,
}

/// The single open position the engine may hold.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenPosition {
    pub direction: Direction,
    pub entry_date: NaiveDate,
    pub entry_price: f64,
}

impl OpenPosition {
    pub fn new(direction: Direction, entry_date: NaiveDate, entry_price: f64) -> Self {
        OpenPosition {
            direction,
            entry_date,
            entry_price,
        }
    }

    /// Mark-to-market PnL against the given price.
    pub fn unrealized_pnl(&self, price: f64, position_size: f64) -> f64 {
        match self.direction {
            Direction::Long => (price - self.entry_price) * position_size,
            Direction::Short => (self.entry_price - price) * position_size,
        }
    }

    /// Realize the position into a closed trade.
    pub fn close(self, exit_date: NaiveDate, exit_price: f64, position_size: f64) -> Trade {
        let pnl = self.unrealized_pnl(exit_price, position_size);
        Trade {
            direction: self.direction,
            entry_date: self.entry_date,
            entry_price: self.entry_price,
            exit_date: Some(exit_date),
            exit_price: Some(exit_price),
            pnl: Some(pnl),
        }
    }

    /// Carry the position into the trade list without realizing it.
    pub fn into_open_trade(self) -> Trade {
        Trade {
            direction: self.direction,
            entry_date: self.entry_date,
            entry_price: self.entry_price,
            exit_date: None,
            exit_price: None,
            pnl: None,
        }
    }
}

/// One completed or still-open position episode.
///
/// Exit fields and PnL are `None` while the episode is open; a position
/// still open at the end of the series is reported this way rather than
/// force-closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub direction: Direction,
    pub entry_date: NaiveDate,
    pub entry_price: f64,
    pub exit_date: Option<NaiveDate>,
    pub exit_price: Option<f64>,
    pub pnl: Option<f64>,
}

impl Trade {
    pub fn is_closed(&self) -> bool {
        self.exit_price.is_some()
    }

    /// Holding duration in days; `None` while open.
    pub fn holding_days(&self) -> Option<i64> {
        self.exit_date.map(|exit| (exit - self.entry_date).num_days())
    }
}
