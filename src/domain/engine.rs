//! Signal-to-position state machine and equity simulation.
//!
//! Single forward pass over the series, one signal-to-action evaluation
//! per bar, no lookahead. At most one position is open at any time:
//! a state change closes the current position at the bar's close price
//! and, for a directional signal, opens the replacement at the same bar
//! and price (a reversal has zero gap). A position still open at the
//! last bar stays open in the trade list.

use chrono::NaiveDate;

use super::config::{BacktestConfig, StrategyParams};
use super::error::TsmomError;
use super::position::{Direction, OpenPosition, Trade};
use super::series::PriceSeries;
use super::signal::{generate_signals, SignalSeries, SignalState};

/// Equity at one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityPoint {
    pub date: NaiveDate,
    pub equity: f64,
}

/// Everything one backtest run produces. A read-only snapshot: the
/// engine keeps no reference after returning it.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestResult {
    pub initial_capital: f64,
    pub final_equity: f64,
    pub trades: Vec<Trade>,
    pub equity_curve: Vec<EquityPoint>,
}

/// Generate signals for the series and run the position lifecycle over
/// them. Parameter errors surface here, before any simulation progress.
pub fn run_backtest(
    series: &PriceSeries,
    params: &StrategyParams,
    config: &BacktestConfig,
) -> Result<BacktestResult, TsmomError> {
    params.validate()?;
    config.validate()?;
    let signals = generate_signals(series, params);
    Ok(simulate(series, &signals, config))
}

/// Run the state machine over pre-computed signals.
///
/// The equity curve has one point per series bar: initial capital plus
/// realized PnL of all trades closed so far plus the mark-to-market PnL
/// of the open position at that bar's close. Warm-up bars (no signal)
/// take no action, so the curve is flat there.
pub fn simulate(
    series: &PriceSeries,
    signals: &SignalSeries,
    config: &BacktestConfig,
) -> BacktestResult {
    let size = config.position_size;
    let mut trades: Vec<Trade> = Vec::new();
    let mut equity_curve = Vec::with_capacity(series.len());
    let mut open: Option<OpenPosition> = None;
    let mut held_state = SignalState::Flat;
    let mut realized = 0.0_f64;

    for point in series.points() {
        if let Some(signal) = signals.signal_at(point.date) {
            if signal.state != held_state {
                if let Some(position) = open.take() {
                    let trade = position.close(point.date, point.close, size);
                    realized += trade.pnl.unwrap_or(0.0);
                    trades.push(trade);
                }
                open = match signal.state {
                    SignalState::Long => {
                        Some(OpenPosition::new(Direction::Long, point.date, point.close))
                    }
                    SignalState::Short => {
                        Some(OpenPosition::new(Direction::Short, point.date, point.close))
                    }
                    SignalState::Flat => None,
                };
                held_state = signal.state;
            }
        }

        let unrealized = open
            .as_ref()
            .map(|p| p.unrealized_pnl(point.close, size))
            .unwrap_or(0.0);
        equity_curve.push(EquityPoint {
            date: point.date,
            equity: config.initial_capital + realized + unrealized,
        });
    }

    // Deliberate policy: an episode still open at series end is reported
    // open, not force-closed.
    if let Some(position) = open.take() {
        trades.push(position.into_open_trade());
    }

    let final_equity = equity_curve
        .last()
        .map(|p| p.equity)
        .unwrap_or(config.initial_capital);

    BacktestResult {
        initial_capital: config.initial_capital,
        final_equity,
        trades,
        equity_curve,
    }
}
