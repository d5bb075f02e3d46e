use clap::Parser;
use std::process;
use voltaic::cli::{Cli, Commands};
use voltaic::VoltaicError;
use voltaic_core::config::resolve_config;
use voltaic_core::{install_config, Locale};
use voltaic_utils::{print_general_error, warn_if_locale_unset};
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize logging with VOLTAIC_LOG environment variable support
    let log_level = std::env::var("VOLTAIC_LOG").unwrap_or_else(|_| "warn".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let to_stdout = cli.diagnostics_to_stdout;
    warn_if_locale_unset(&Locale::detect(), to_stdout);

    if let Err(e) = run(cli) {
        print_general_error(&e.to_string(), to_stdout);

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<VoltaicError>() {
            Some(VoltaicError::Configuration(_)) => 2,
            Some(VoltaicError::Io(_)) | Some(VoltaicError::NotFound(_)) => 3,
            Some(VoltaicError::Parse(_)) | Some(VoltaicError::Serialization(_)) => 4,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(cli.config.as_deref())?;
    install_config(config);

    tracing::debug!(verbose = cli.verbose, "Configuration installed");

    match cli.command {
        Commands::Analyses(args) => voltaic::cli::commands::analyses::run(args, cli.verbose),
        Commands::Symbolic(args) => voltaic::cli::commands::symbolic::run(args),
        Commands::Table(args) => {
            voltaic::cli::commands::table::run(args, cli.diagnostics_to_stdout)
        }
        Commands::Check(args) => voltaic::cli::commands::check::run(args, cli.verbose),
        Commands::Config(args) => voltaic::cli::commands::config::run(args),
    }
}
