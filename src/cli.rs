//! CLI definition and dispatch.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::synthetic_adapter::SyntheticAdapter;
use crate::domain::config::{BacktestConfig, StrategyParams};
use crate::domain::config_validation::{
    validate_backtest_config, validate_data_config, validate_strategy_config,
};
use crate::domain::engine::{run_backtest, BacktestResult};
use crate::domain::error::TsmomError;
use crate::domain::series::PriceSeries;
use crate::domain::signal::{generate_signals, SignalState};
use crate::domain::stats::{direction_breakdown, DirectionBreakdown, SummaryStats};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;

#[derive(Parser, Debug)]
#[command(name = "tsmom", about = "Two-horizon time-series-momentum backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a backtest and print the performance report
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the tail of the generated signal table
    Signals {
        #[arg(short, long)]
        config: PathBuf,
        /// Number of signals to show
        #[arg(long, default_value_t = 10)]
        last: usize,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest { config } => run_backtest_command(&config),
        Command::Signals { config, last } => run_signals_command(&config, last),
        Command::Validate { config } => run_validate_command(&config),
    }
}

fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, TsmomError> {
    FileConfigAdapter::from_file(path).map_err(|e| TsmomError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn validate_all(config: &dyn ConfigPort) -> Result<(), TsmomError> {
    validate_data_config(config)?;
    validate_strategy_config(config)?;
    validate_backtest_config(config)?;
    Ok(())
}

fn build_strategy_params(config: &dyn ConfigPort) -> StrategyParams {
    StrategyParams {
        period_short: config.get_int("strategy", "period_short", 5) as usize,
        period_long: config.get_int("strategy", "period_long", 20) as usize,
        weight_short: config.get_double("strategy", "weight_short", 0.4),
        weight_long: config.get_double("strategy", "weight_long", 0.6),
        threshold: config.get_double("strategy", "threshold", 0.0),
    }
}

fn build_backtest_config(config: &dyn ConfigPort) -> BacktestConfig {
    BacktestConfig {
        initial_capital: config.get_double("backtest", "initial_capital", 100_000.0),
        position_size: config.get_double("backtest", "position_size", 1.0),
    }
}

fn load_series(config: &dyn ConfigPort) -> Result<PriceSeries, TsmomError> {
    let source = config
        .get_string("data", "source")
        .unwrap_or_else(|| "synthetic".to_string());

    match source.as_str() {
        "csv" => {
            let path = config.get_string("data", "path").unwrap_or_default();
            let symbol = config.get_string("data", "symbol").unwrap_or_default();
            let start = parse_date(config, "start_date")?;
            let end = parse_date(config, "end_date")?;
            CsvAdapter::new(PathBuf::from(path)).fetch_closes(&symbol, start, end)
        }
        _ => {
            let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default();
            let adapter = SyntheticAdapter {
                start_date: start,
                bars: config.get_int("data", "bars", 500) as usize,
                start_price: config.get_double("data", "start_price", 100.0),
                drift: config.get_double("data", "drift", 0.0005),
                volatility: config.get_double("data", "volatility", 0.02),
                seed: config.get_int("data", "seed", 42) as u64,
            };
            adapter.fetch_closes("SYN", NaiveDate::MIN, NaiveDate::MAX)
        }
    }
}

fn parse_date(config: &dyn ConfigPort, key: &str) -> Result<NaiveDate, TsmomError> {
    let value = config
        .get_string("data", key)
        .ok_or_else(|| TsmomError::ConfigMissing {
            section: "data".to_string(),
            key: key.to_string(),
        })?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| TsmomError::ConfigInvalid {
        section: "data".to_string(),
        key: key.to_string(),
        reason: format!("invalid {key} format, expected YYYY-MM-DD"),
    })
}

fn run_backtest_command(config_path: &PathBuf) -> ExitCode {
    match backtest_pipeline(config_path) {
        Ok((result, stats, breakdown)) => {
            print_report(&result, &stats, &breakdown);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn backtest_pipeline(
    config_path: &PathBuf,
) -> Result<(BacktestResult, SummaryStats, DirectionBreakdown), TsmomError> {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = load_config(config_path)?;
    validate_all(&adapter)?;

    let params = build_strategy_params(&adapter);
    let bt_config = build_backtest_config(&adapter);

    let series = load_series(&adapter)?;
    eprintln!("Loaded {} bars", series.len());

    let result = run_backtest(&series, &params, &bt_config)?;
    let stats = SummaryStats::compute(&result);
    let breakdown = direction_breakdown(&result);
    Ok((result, stats, breakdown))
}

fn print_report(result: &BacktestResult, stats: &SummaryStats, breakdown: &DirectionBreakdown) {
    println!("{}", "=".repeat(60));
    println!("BACKTEST REPORT");
    println!("{}", "=".repeat(60));

    println!("\nTRADES:");
    println!("  Closed:          {}", stats.total_trades);
    println!("  Still open:      {}", stats.open_trades);
    println!(
        "  Long:   {:>4} | Win rate: {:>6.2}%",
        breakdown.long_trades,
        breakdown.long_win_rate * 100.0
    );
    println!(
        "  Short:  {:>4} | Win rate: {:>6.2}%",
        breakdown.short_trades,
        breakdown.short_win_rate * 100.0
    );
    println!("  Overall win rate: {:.2}%", stats.win_rate * 100.0);

    println!("\nPERFORMANCE:");
    println!("  Initial capital: {:>12.2}", result.initial_capital);
    println!("  Final equity:    {:>12.2}", result.final_equity);
    println!(
        "  Cumulative ret.: {:>11.2}%",
        stats.cumulative_return * 100.0
    );
    println!("  Total PnL:       {:>12.2}", stats.total_pnl);
    println!("  Avg PnL:         {:>12.2}", stats.avg_pnl);
    println!("  Largest win:     {:>12.2}", stats.largest_win);
    println!("  Largest loss:    {:>12.2}", stats.largest_loss);

    println!("\nHOLDING DURATION (days):");
    println!("  Avg: {:>6.1}", stats.avg_holding_days);
    println!("  Max: {:>6}", stats.max_holding_days);
    println!("  Min: {:>6}", stats.min_holding_days);

    println!("\n{}", "=".repeat(60));
}

fn run_signals_command(config_path: &PathBuf, last: usize) -> ExitCode {
    let pipeline = || -> Result<(), TsmomError> {
        let adapter = load_config(config_path)?;
        validate_all(&adapter)?;
        let params = build_strategy_params(&adapter);
        params.validate()?;

        let series = load_series(&adapter)?;
        let signals = generate_signals(&series, &params);

        println!(
            "{:<12} {:>12} {:>12} {:>12}  {}",
            "date", "mom_short", "mom_long", "score", "state"
        );
        let skip = signals.len().saturating_sub(last);
        for sig in signals.signals().iter().skip(skip) {
            let state = match sig.state {
                SignalState::Long => "LONG",
                SignalState::Short => "SHORT",
                SignalState::Flat => "FLAT",
            };
            println!(
                "{:<12} {:>12.6} {:>12.6} {:>12.6}  {}",
                sig.date, sig.momentum_short, sig.momentum_long, sig.score, state
            );
        }
        Ok(())
    };

    match pipeline() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_validate_command(config_path: &PathBuf) -> ExitCode {
    let result = load_config(config_path).and_then(|adapter| {
        validate_all(&adapter)?;
        build_strategy_params(&adapter).validate()?;
        build_backtest_config(&adapter).validate()
    });

    match result {
        Ok(()) => {
            println!("Configuration OK");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn build_strategy_params_uses_defaults() {
        let params = build_strategy_params(&adapter("[strategy]\n"));
        assert_eq!(params, StrategyParams::default());
    }

    #[test]
    fn build_strategy_params_reads_overrides() {
        let params = build_strategy_params(&adapter(
            "[strategy]\nperiod_short = 3\nperiod_long = 12\nweight_short = 0.5\n\
             weight_long = 0.5\nthreshold = 0.02\n",
        ));
        assert_eq!(params.period_short, 3);
        assert_eq!(params.period_long, 12);
        assert!((params.weight_short - 0.5).abs() < f64::EPSILON);
        assert!((params.threshold - 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn build_backtest_config_reads_values() {
        let config = build_backtest_config(&adapter(
            "[backtest]\ninitial_capital = 50000\nposition_size = 2.5\n",
        ));
        assert!((config.initial_capital - 50_000.0).abs() < f64::EPSILON);
        assert!((config.position_size - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn load_series_defaults_to_synthetic() {
        let series = load_series(&adapter("[data]\nbars = 60\nseed = 5\n")).unwrap();
        assert_eq!(series.len(), 60);
    }

    #[test]
    fn synthetic_series_is_reproducible() {
        let content = "[data]\nsource = synthetic\nbars = 50\nseed = 11\n";
        let a = load_series(&adapter(content)).unwrap();
        let b = load_series(&adapter(content)).unwrap();
        assert_eq!(a, b);
    }
}
