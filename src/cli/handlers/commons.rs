// src/cli/handlers/commons.rs

// Helpers shared by several handlers.

use anyhow::{Context, Result, anyhow, bail};
use colored::Colorize;
use std::path::Path;

use crate::cli::Session;
use crate::core::catalog::AutoHandle;

/// Parses and registers the automobile described by `source`.
pub fn load_source(session: &Session, source: &Path) -> Result<AutoHandle> {
    session
        .catalog
        .build_and_register(source)
        .with_context(|| format!("Could not build an automobile from '{}'", source.display()))
}

/// Splits a `GROUP=OPTION` argument at its first `=`.
///
/// Both sides are kept verbatim so names with spaces work when quoted.
pub fn parse_selection(raw: &str) -> Result<(&str, &str)> {
    let (group, option) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("Invalid selection '{}': expected GROUP=OPTION", raw))?;
    if group.is_empty() || option.is_empty() {
        bail!("Invalid selection '{}': group and option must not be empty", raw);
    }
    Ok((group, option))
}

/// Turns the `Ok(None)` of a catalog delegate into an error naming the automobile.
pub fn require<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| anyhow!("No automobile named '{}' is registered", name))
}

/// Prints a section header in the style shared by every listing.
pub fn print_header(title: &str, name: &str) {
    println!("\n--- {} '{}' ---", title, name.yellow());
}

/// Prints the full option listing of `handle`.
pub fn print_listing(handle: &AutoHandle) -> Result<()> {
    print_header("Automobile", handle.name());
    print!("{}", handle.render()?);
    Ok(())
}

/// Prints the chosen options and the total price of `handle`.
pub fn print_configuration(handle: &AutoHandle) -> Result<()> {
    print_header("Configuration", handle.name());
    print!("{}", handle.render_configuration()?);
    Ok(())
}

/// Writes a snapshot of `handle` when `destination` is given.
pub fn save_if_requested(
    session: &Session,
    handle: &AutoHandle,
    destination: Option<&Path>,
) -> Result<()> {
    let Some(destination) = destination else {
        return Ok(());
    };
    let written = session
        .catalog
        .save_snapshot(handle.name(), destination)
        .with_context(|| format!("Could not write snapshot '{}'", destination.display()))?;
    let written = require(written, handle.name())?;
    println!(
        "{} Snapshot written to '{}'.",
        "✔".green(),
        written.display()
    );
    Ok(())
}
