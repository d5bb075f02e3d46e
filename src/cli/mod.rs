pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "voltaic",
    version,
    about = "Print circuit simulation directives and results",
    long_about = "Voltaic renders what a circuit simulator hands over: analysis directives in \
                  netlist syntax, symbolic node voltages and transfer functions, numeric sweep \
                  tables and the gmin check report, with uniform E:/W: diagnostics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Report errors and warnings on stdout instead of stderr
    #[arg(long, global = true)]
    pub diagnostics_to_stdout: bool,

    /// Configuration file (defaults to $VOLTAIC_HOME/config.toml)
    #[arg(long, value_name = "PATH", env = "VOLTAIC_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print analysis descriptors as netlist directives
    Analyses(commands::analyses::AnalysesArgs),

    /// Print symbolic results, transfer functions or equations
    Symbolic(commands::symbolic::SymbolicArgs),

    /// Print whitespace-separated columns as a table
    Table(commands::table::TableArgs),

    /// Print the gmin check report
    Check(commands::check::CheckArgs),

    /// Show or initialise the configuration
    Config(commands::config::ConfigArgs),
}
