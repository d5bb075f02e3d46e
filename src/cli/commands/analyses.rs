use crate::input::load_analyses;
use clap::Args;
use std::path::PathBuf;
use voltaic_utils::{print_analysis, print_info_line};

#[derive(Args)]
pub struct AnalysesArgs {
    /// TOML or JSON file with an `analysis` list
    #[arg(value_name = "FILE")]
    pub input: PathBuf,
}

pub fn run(args: AnalysesArgs, verbose: u8) -> anyhow::Result<()> {
    let analyses = load_analyses(&args.input)?;
    print_info_line(
        (format!("{} analyses in {}", analyses.len(), args.input.display()), 1),
        verbose,
        true,
    );
    for an in &analyses {
        print_analysis(an);
    }
    Ok(())
}
