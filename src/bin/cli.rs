// src/bin/cli.rs
use clap::Parser;
use covid_impact::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init(log::LogTarget::Stderr);

    cli::run(cli::Args::parse())?;
    Ok(())
}
