mod config;
mod error;
mod options;
mod outdir;
mod run;

use anyhow::Result;
use chanmodel::ManifestPerformance;
use clap::Parser;
use config::Config;
use log::debug;
use options::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::try_from(cli)?;
    debug!("{config:?}");

    let mut engine = ManifestPerformance::new();
    run::execute(&config, &mut engine)?;
    Ok(())
}
