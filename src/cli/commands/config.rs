use clap::Args;
use colored::*;
use voltaic_core::config::save_config;
use voltaic_core::{active_config, config_path, Config, VoltaicError};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the default configuration to $VOLTAIC_HOME/config.toml
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing configuration file
    #[arg(long, requires = "init")]
    pub force: bool,
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    if args.init {
        let path = config_path();
        if path.exists() && !args.force {
            return Err(VoltaicError::InvalidInput(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            ))
            .into());
        }
        save_config(&path, &Config::default())?;
        println!("{} {}", "Wrote".green(), path.display());
        return Ok(());
    }

    let rendered = toml::to_string_pretty(&active_config())
        .map_err(|e| VoltaicError::Configuration(format!("Failed to serialize config: {}", e)))?;
    print!("{}", rendered);
    Ok(())
}
