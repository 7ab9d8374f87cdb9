mod cli;
mod error;
mod inspect;
mod transform;

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use crate::cli::Cli;
use crate::cli::Commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let result = match cli.command {
        Commands::Transform(args) => transform::transform(args),
        Commands::Fields(args) => inspect::fields(args),
        Commands::Lookup(args) => inspect::lookup(args),
        Commands::Options(args) => inspect::options(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
