//! Configuration-file validation.
//!
//! Checks every config section before a run so bad values surface as
//! `[section] key` errors up front rather than mid-backtest.

use chrono::NaiveDate;

use super::error::TsmomError;
use crate::ports::config_port::ConfigPort;

pub fn validate_strategy_config(config: &dyn ConfigPort) -> Result<(), TsmomError> {
    let period_short = config.get_int("strategy", "period_short", 5);
    if period_short <= 0 {
        return Err(config_invalid(
            "strategy",
            "period_short",
            "must be positive",
        ));
    }
    let period_long = config.get_int("strategy", "period_long", 20);
    if period_long <= 0 {
        return Err(config_invalid("strategy", "period_long", "must be positive"));
    }
    if period_short >= period_long {
        return Err(config_invalid(
            "strategy",
            "period_short",
            "must be strictly less than period_long",
        ));
    }

    let weight_short = config.get_double("strategy", "weight_short", 0.4);
    let weight_long = config.get_double("strategy", "weight_long", 0.6);
    if !weight_short.is_finite() || !weight_long.is_finite() {
        return Err(config_invalid(
            "strategy",
            "weight_short",
            "weights must be finite",
        ));
    }

    let threshold = config.get_double("strategy", "threshold", 0.0);
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(config_invalid(
            "strategy",
            "threshold",
            "must be non-negative",
        ));
    }
    Ok(())
}

pub fn validate_backtest_config(config: &dyn ConfigPort) -> Result<(), TsmomError> {
    let initial_capital = config.get_double("backtest", "initial_capital", 100_000.0);
    if !initial_capital.is_finite() || initial_capital <= 0.0 {
        return Err(config_invalid(
            "backtest",
            "initial_capital",
            "must be positive",
        ));
    }
    let position_size = config.get_double("backtest", "position_size", 1.0);
    if !position_size.is_finite() || position_size <= 0.0 {
        return Err(config_invalid(
            "backtest",
            "position_size",
            "must be positive",
        ));
    }
    Ok(())
}

pub fn validate_data_config(config: &dyn ConfigPort) -> Result<(), TsmomError> {
    let source = config
        .get_string("data", "source")
        .unwrap_or_else(|| "synthetic".to_string());

    match source.as_str() {
        "csv" => {
            require_string(config, "data", "path")?;
            require_string(config, "data", "symbol")?;
            let start = require_date(config, "data", "start_date")?;
            let end = require_date(config, "data", "end_date")?;
            if start >= end {
                return Err(config_invalid(
                    "data",
                    "start_date",
                    "must be before end_date",
                ));
            }
            Ok(())
        }
        "synthetic" => {
            let bars = config.get_int("data", "bars", 500);
            if bars <= 0 {
                return Err(config_invalid("data", "bars", "must be positive"));
            }
            let start_price = config.get_double("data", "start_price", 100.0);
            if !start_price.is_finite() || start_price <= 0.0 {
                return Err(config_invalid("data", "start_price", "must be positive"));
            }
            let volatility = config.get_double("data", "volatility", 0.02);
            if !volatility.is_finite() || volatility < 0.0 {
                return Err(config_invalid(
                    "data",
                    "volatility",
                    "must be non-negative",
                ));
            }
            Ok(())
        }
        other => Err(config_invalid(
            "data",
            "source",
            &format!("unknown source '{other}', expected csv or synthetic"),
        )),
    }
}

fn require_string(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<String, TsmomError> {
    match config.get_string(section, key) {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(TsmomError::ConfigMissing {
            section: section.to_string(),
            key: key.to_string(),
        }),
    }
}

fn require_date(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<NaiveDate, TsmomError> {
    let value = require_string(config, section, key)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| {
        config_invalid(
            section,
            key,
            &format!("invalid {key} format, expected YYYY-MM-DD"),
        )
    })
}

fn config_invalid(section: &str, key: &str, reason: &str) -> TsmomError {
    TsmomError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.to_string(),
    }
}
