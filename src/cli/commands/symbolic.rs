use crate::input::{load_equations, load_symbolic_results, load_transfer_functions};
use clap::Args;
use std::path::PathBuf;
use voltaic_utils::{
    print_symbolic_equations, print_symbolic_results, print_symbolic_transfer_functions,
};

#[derive(Args)]
pub struct SymbolicArgs {
    /// JSON file produced by the symbolic solver
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Input holds transfer functions (gain, gain0, poles, zeros)
    #[arg(long, conflicts_with = "equations")]
    pub transfer: bool,

    /// Input is a list of circuit equations
    #[arg(long)]
    pub equations: bool,
}

pub fn run(args: SymbolicArgs) -> anyhow::Result<()> {
    if args.transfer {
        let tfs = load_transfer_functions(&args.input)?;
        print_symbolic_transfer_functions(tfs.iter());
    } else if args.equations {
        let equations = load_equations(&args.input)?;
        print_symbolic_equations(&equations);
    } else {
        let results = load_symbolic_results(&args.input)?;
        print_symbolic_results(&results);
    }
    Ok(())
}
