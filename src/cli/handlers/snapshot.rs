// src/cli/handlers/snapshot.rs

use crate::cli::{
    Session,
    args::{LoadArgs, SaveArgs},
    handlers::commons,
};
use anyhow::{Context, Result};
use clap::Parser;

/// The handler for `save`: builds an automobile and writes its snapshot.
pub fn handle_save(args: Vec<String>, session: &Session) -> Result<()> {
    let save_args = SaveArgs::try_parse_from(&args)?;
    let handle = commons::load_source(session, &save_args.source)?;

    let destination = save_args
        .out
        .unwrap_or_else(|| session.settings.snapshot_file.clone());
    commons::save_if_requested(session, &handle, Some(destination.as_path()))
}

/// The handler for `load`: restores a snapshot into the catalog and prints it.
pub fn handle_load(args: Vec<String>, session: &Session) -> Result<()> {
    let load_args = LoadArgs::try_parse_from(&args)?;
    let source = load_args
        .snapshot
        .unwrap_or_else(|| session.settings.snapshot_file.clone());

    let handle = session
        .catalog
        .restore_snapshot(&source)
        .with_context(|| format!("Could not read snapshot '{}'", source.display()))?;

    if load_args.configuration {
        commons::print_configuration(&handle)
    } else {
        commons::print_listing(&handle)
    }
}
