use clap::Args;
use voltaic_utils::display::DEFAULT_CHECK_VERBOSITY;
use voltaic_utils::print_result_check;

#[derive(Args)]
pub struct CheckArgs {
    /// Variables whose value moved when gmin was removed
    #[arg(value_name = "VAR")]
    pub badvars: Vec<String>,

    /// Print nothing when the check passes
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: CheckArgs, verbose: u8) -> anyhow::Result<()> {
    let verbose = if args.quiet {
        0
    } else if verbose == 0 {
        DEFAULT_CHECK_VERBOSITY
    } else {
        verbose
    };
    print_result_check(&args.badvars, verbose);
    Ok(())
}
