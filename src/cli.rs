use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Markov cohort simulator for smoking cessation.
#[derive(Parser)]
#[command(
    name = "cessim",
    version,
    about = "Markov cohort simulation of smoking cessation, mortality and cost"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Simulate a cohort and report the proportion quit and discounted cost.
    Run(RunArgs),
    /// Simulate a single individual and print its cycle-by-cycle trajectory.
    Trace(TraceArgs),
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Run(_) => "run",
            Self::Trace(_) => "trace",
        }
    }
}

/// Overrides shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file. Built-in defaults are used if omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override global RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override cycle length (years) from config.
    #[arg(long = "cycle-length")]
    pub cycle_length: Option<f64>,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override cohort size from config.
    #[arg(short = 'n', long = "individuals")]
    pub n_individuals: Option<usize>,

    /// Write the summary as JSON to this path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `trace` subcommand.
#[derive(clap::Args)]
pub struct TraceArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Identifier given to the traced individual.
    #[arg(long, default_value_t = 0)]
    pub id: u64,

    /// Write the trajectory JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
