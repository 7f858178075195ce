mod cli;
mod config;
mod convert;
mod convert_cmd;
mod display;
mod jdn_cmd;
mod logging;
mod today_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Convert(args) => convert_cmd::run(args, &config),
        Command::ToJdn(args) => jdn_cmd::run_to_jdn(args, &config),
        Command::FromJdn(args) => jdn_cmd::run_from_jdn(args, &config),
        Command::Today(args) => today_cmd::run(args, &config),
    }
}
