// src/cli/handlers/show.rs

use crate::cli::{Session, args::ShowArgs, handlers::commons};
use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;

/// The handler for `show`: builds every source and prints each automobile.
///
/// A source that fails to build is reported and skipped; the command fails
/// only when none of them could be built.
pub fn handle(args: Vec<String>, session: &Session) -> Result<()> {
    let show_args = ShowArgs::try_parse_from(&args)?;

    let results = session.catalog.build_many(&show_args.sources);
    let mut failures = 0usize;
    for (source, result) in show_args.sources.iter().zip(results) {
        match result {
            Ok(handle) => commons::print_listing(&handle)?,
            Err(e) => {
                failures += 1;
                eprintln!(
                    "{} Skipping '{}': {}",
                    "⚠".yellow(),
                    source.display(),
                    e
                );
            }
        }
    }

    if failures == show_args.sources.len() {
        bail!("None of the {} source(s) could be built", failures);
    }
    println!(
        "\n{} automobile(s) in the catalog: {}",
        session.catalog.len(),
        session.catalog.names().join(", ").cyan()
    );
    Ok(())
}
