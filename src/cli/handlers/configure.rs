// src/cli/handlers/configure.rs

use crate::cli::{Session, args::ConfigureArgs, handlers::commons};
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

/// The handler for `configure`: applies each `--select GROUP=OPTION` choice and
/// prints the resulting configuration and total price.
///
/// Unknown group or option names go through the recovery protocol, so in
/// interactive mode the operator is asked for a replacement.
pub fn handle(args: Vec<String>, session: &Session) -> Result<()> {
    let configure_args = ConfigureArgs::try_parse_from(&args)?;
    let handle = commons::load_source(session, &configure_args.source)?;

    if configure_args.all {
        commons::print_listing(&handle)?;
    }

    for raw in &configure_args.select {
        let (group, option) = commons::parse_selection(raw)?;
        handle
            .set_selection(group, option, session.catalog.recovery())
            .with_context(|| format!("Could not select '{}' in '{}'", option, group))?;
        log::debug!("Selected '{}' in '{}'.", option, group);
    }

    commons::print_configuration(&handle)?;

    let unconfigured: Vec<String> = handle.read(|auto| {
        auto.groups()
            .iter()
            .filter(|group| group.selection().is_none())
            .map(|group| group.name().to_string())
            .collect()
    })?;
    if !unconfigured.is_empty() {
        println!(
            "{} No choice yet for: {}",
            "ℹ".blue(),
            unconfigured.join(", ").dimmed()
        );
    }
    Ok(())
}
