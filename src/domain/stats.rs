//! Summary statistics over a backtest result.
//!
//! Read-only consumers of [`BacktestResult`]: open trades count toward
//! `open_trades` only and are excluded from win-rate, PnL and duration
//! figures. Distribution moments (skew, kurtosis) are left to the
//! caller's statistics library; [`pnl_series`] exposes the raw inputs.

use super::engine::BacktestResult;
use super::position::{Direction, Trade};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Closed trades only.
    pub total_trades: usize,
    pub open_trades: usize,
    pub winning_trades: usize,
    pub losing_trades: usize,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub avg_pnl: f64,
    pub largest_win: f64,
    /// Most negative closed PnL (zero when no losers).
    pub largest_loss: f64,
    pub avg_holding_days: f64,
    pub max_holding_days: i64,
    pub min_holding_days: i64,
    /// final_equity / initial_capital - 1.
    pub cumulative_return: f64,
}

impl SummaryStats {
    pub fn compute(result: &BacktestResult) -> Self {
        let closed: Vec<&Trade> = result.trades.iter().filter(|t| t.is_closed()).collect();
        let open_trades = result.trades.len() - closed.len();

        let mut winning_trades = 0usize;
        let mut losing_trades = 0usize;
        let mut total_pnl = 0.0_f64;
        let mut largest_win = 0.0_f64;
        let mut largest_loss = 0.0_f64;
        let mut total_days = 0i64;
        let mut max_holding_days = 0i64;
        let mut min_holding_days = 0i64;

        for (i, trade) in closed.iter().enumerate() {
            let pnl = trade.pnl.unwrap_or(0.0);
            total_pnl += pnl;
            if pnl > 0.0 {
                winning_trades += 1;
                if pnl > largest_win {
                    largest_win = pnl;
                }
            } else if pnl < 0.0 {
                losing_trades += 1;
                if pnl < largest_loss {
                    largest_loss = pnl;
                }
            }

            let days = trade.holding_days().unwrap_or(0);
            total_days += days;
            if i == 0 {
                max_holding_days = days;
                min_holding_days = days;
            } else {
                max_holding_days = max_holding_days.max(days);
                min_holding_days = min_holding_days.min(days);
            }
        }

        let total_trades = closed.len();
        let win_rate = if total_trades > 0 {
            winning_trades as f64 / total_trades as f64
        } else {
            0.0
        };
        let avg_pnl = if total_trades > 0 {
            total_pnl / total_trades as f64
        } else {
            0.0
        };
        let avg_holding_days = if total_trades > 0 {
            total_days as f64 / total_trades as f64
        } else {
            0.0
        };
        let cumulative_return = if result.initial_capital > 0.0 {
            result.final_equity / result.initial_capital - 1.0
        } else {
            0.0
        };

        SummaryStats {
            total_trades,
            open_trades,
            winning_trades,
            losing_trades,
            win_rate,
            total_pnl,
            avg_pnl,
            largest_win,
            largest_loss,
            avg_holding_days,
            max_holding_days,
            min_holding_days,
            cumulative_return,
        }
    }
}

/// Long-vs-short breakdown over closed trades.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionBreakdown {
    pub long_trades: usize,
    pub short_trades: usize,
    pub long_win_rate: f64,
    pub short_win_rate: f64,
    pub long_avg_pnl: f64,
    pub short_avg_pnl: f64,
}

pub fn direction_breakdown(result: &BacktestResult) -> DirectionBreakdown {
    let (longs, shorts): (Vec<&Trade>, Vec<&Trade>) = result
        .trades
        .iter()
        .filter(|t| t.is_closed())
        .partition(|t| t.direction == Direction::Long);

    fn side_stats(trades: &[&Trade]) -> (f64, f64) {
        if trades.is_empty() {
            return (0.0, 0.0);
        }
        let wins = trades
            .iter()
            .filter(|t| t.pnl.unwrap_or(0.0) > 0.0)
            .count();
        let total: f64 = trades.iter().map(|t| t.pnl.unwrap_or(0.0)).sum();
        (
            wins as f64 / trades.len() as f64,
            total / trades.len() as f64,
        )
    }

    let (long_win_rate, long_avg_pnl) = side_stats(&longs);
    let (short_win_rate, short_avg_pnl) = side_stats(&shorts);

    DirectionBreakdown {
        long_trades: longs.len(),
        short_trades: shorts.len(),
        long_win_rate,
        short_win_rate,
        long_avg_pnl,
        short_avg_pnl,
    }
}

/// Raw closed-trade PnL sequence, in close order.
pub fn pnl_series(result: &BacktestResult) -> Vec<f64> {
    result.trades.iter().filter_map(|t| t.pnl).collect()
}
