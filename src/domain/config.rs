//! Strategy and backtest parameter sets.

use super::error::TsmomError;

/// Parameters for the two-horizon momentum signal.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyParams {
    pub period_short: usize,
    pub period_long: usize,
    pub weight_short: f64,
    pub weight_long: f64,
    pub threshold: f64,
}

impl Default for StrategyParams {
    fn default() -> Self {
        StrategyParams {
            period_short: 5,
            period_long: 20,
            weight_short: 0.4,
            weight_long: 0.6,
            threshold: 0.0,
        }
    }
}

impl StrategyParams {
    /// Check the parameter set before any signal is computed.
    pub fn validate(&self) -> Result<(), TsmomError> {
        if self.period_short == 0 {
            return Err(invalid("period_short", "must be positive"));
        }
        if self.period_long == 0 {
            return Err(invalid("period_long", "must be positive"));
        }
        if self.period_short >= self.period_long {
            return Err(invalid(
                "period_short",
                "must be strictly less than period_long",
            ));
        }
        if !self.weight_short.is_finite() {
            return Err(invalid("weight_short", "must be finite"));
        }
        if !self.weight_long.is_finite() {
            return Err(invalid("weight_long", "must be finite"));
        }
        // Also rejects NaN.
        if !(self.threshold >= 0.0) || !self.threshold.is_finite() {
            return Err(invalid("threshold", "must be non-negative and finite"));
        }
        Ok(())
    }
}

/// Capital and sizing parameters for the simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestConfig {
    pub initial_capital: f64,
    /// Units of the asset per position. PnL = price delta * position_size.
    pub position_size: f64,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        BacktestConfig {
            initial_capital: 100_000.0,
            position_size: 1.0,
        }
    }
}

impl BacktestConfig {
    pub fn validate(&self) -> Result<(), TsmomError> {
        if !(self.initial_capital > 0.0) || !self.initial_capital.is_finite() {
            return Err(invalid("initial_capital", "must be positive and finite"));
        }
        if !(self.position_size > 0.0) || !self.position_size.is_finite() {
            return Err(invalid("position_size", "must be positive and finite"));
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> TsmomError {
    TsmomError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
