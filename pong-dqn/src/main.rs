mod args;
use anyhow::{bail, Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use pong_dqn_core::DriverConfig;
use std::{
    fs::File,
    io::{self, Write},
};

fn load_config(args: &Args) -> Result<DriverConfig> {
    let config = match &args.config {
        Some(path) => DriverConfig::load(path)
            .with_context(|| format!("failed to load configuration from {:?}", path))?,
        None => DriverConfig::default(),
    };

    Ok(match &args.checkpoint {
        Some(path) => config.checkpoint_path(path),
        None => config,
    })
}

fn show_config(config: &DriverConfig, out: &mut impl Write) -> Result<()> {
    out.write_all(serde_yaml::to_string(config)?.as_bytes())?;
    Ok(())
}

fn check(config: &DriverConfig) -> Result<()> {
    config.validate()?;
    info!("Configuration is valid");

    let path = &config.checkpoint_path;
    File::open(path).with_context(|| format!("checkpoint {:?} is not readable", path))?;
    info!("Checkpoint {:?} is readable", path);

    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;

    match args.mode.as_str() {
        "show_config" => show_config(&config, &mut io::stdout())?,
        "check" => check(&config)?,
        mode => bail!("mode must be either 'show_config' or 'check', got '{}'", mode),
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(&Args::parse())
}
