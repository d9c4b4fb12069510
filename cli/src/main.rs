mod embed;
mod host;
mod imports;
mod output;
mod times;
mod types;

use clap::Parser;
use std::process;

use crate::imports::*;
use crate::output::write_embed;
use crate::times::print_times;
use crate::types::Command;

#[derive(Parser, Debug)]
#[clap(version, about = "Format stop times and embed the Transitous journey planner widget")]
pub struct CliArgs {
    /// Logging verbosity level (valid values: off, error, warn, info, debug, trace)
    #[clap(short, long, value_name = "LEVEL", default_value = "info")]
    verbosity: log::LevelFilter,

    #[clap(subcommand)]
    command: Command,
}

fn main() {
    dotenv::dotenv().ok();
    let cli_args = CliArgs::parse();
    if env::var(env_logger::DEFAULT_FILTER_ENV).is_ok() {
        env_logger::init();
    } else {
        env_logger::builder()
            .filter(Some(env!("CARGO_PKG_NAME")), cli_args.verbosity)
            .filter(Some("transitous_shared"), cli_args.verbosity)
            .format_timestamp(None)
            .format_target(false)
            .init();
    }
    let result = match &cli_args.command {
        Command::Times(options) => print_times(options),
        Command::Embed(options) => write_embed(options),
    };
    if let Err(error) = result {
        error!("{:?}", error);
        process::exit(1);
    }
}
