use clap::Parser;
use tsmom::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
