mod cli;
mod config;
mod convert;
mod logging;
mod report;
mod run_cmd;
mod trace_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!(
        version = env!("CARGO_PKG_VERSION"),
        command = cli.command.name(),
        "cessim starting"
    );

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run_cmd::run(args),
        Command::Trace(args) => trace_cmd::run(args),
    }
}
