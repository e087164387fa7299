// src/bin/carconf.rs

use anyhow::Result;
use carconf::cli::{Cli, Session, dispatcher};
use clap::Parser;
use colored::*;

/// Entry point: sets up logging, builds the session, dispatches the action and
/// reports any error in one place.
fn main() {
    env_logger::init();

    if let Err(e) = run_cli(Cli::parse()) {
        eprintln!("\n{}: {:#}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);
    let session = Session::from_cli(&cli)?;
    dispatcher::dispatch(cli.args, &session)
}
