// src/cli/handlers/update.rs

// Single-edit actions. Each builds the automobile, applies one change through
// the catalog, prints the result and optionally snapshots it.

use crate::cli::{
    Session,
    args::{AddOptionArgs, RemoveOptionArgs, RenameSetArgs, SetPriceArgs},
    handlers::commons,
};
use crate::models::format_price;
use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

/// The handler for `rename-set`.
pub fn handle_rename_set(args: Vec<String>, session: &Session) -> Result<()> {
    let rename_args = RenameSetArgs::try_parse_from(&args)?;
    let handle = commons::load_source(session, &rename_args.source)?;

    let renamed = session
        .catalog
        .update_group_name(handle.name(), &rename_args.group, &rename_args.new_name)
        .with_context(|| format!("Could not rename option set '{}'", rename_args.group))?;
    commons::require(renamed, handle.name())?;

    println!(
        "{} Option set renamed to '{}'.",
        "✔".green(),
        rename_args.new_name.cyan()
    );
    commons::print_listing(&handle)?;
    commons::save_if_requested(session, &handle, rename_args.save.as_deref())
}

/// The handler for `set-price`.
pub fn handle_set_price(args: Vec<String>, session: &Session) -> Result<()> {
    let price_args = SetPriceArgs::try_parse_from(&args)?;
    let handle = commons::load_source(session, &price_args.source)?;

    let updated = session
        .catalog
        .update_option_price(
            handle.name(),
            &price_args.group,
            &price_args.option,
            price_args.price,
        )
        .with_context(|| format!("Could not reprice '{}'", price_args.option))?;
    commons::require(updated, handle.name())?;

    println!(
        "{} Price set to {}.",
        "✔".green(),
        format_price(price_args.price).cyan()
    );
    commons::print_listing(&handle)?;
    commons::save_if_requested(session, &handle, price_args.save.as_deref())
}

/// The handler for `add-option`.
pub fn handle_add_option(args: Vec<String>, session: &Session) -> Result<()> {
    let add_args = AddOptionArgs::try_parse_from(&args)?;
    let handle = commons::load_source(session, &add_args.source)?;

    handle
        .add_option(
            &add_args.group,
            &add_args.option,
            add_args.price,
            session.catalog.recovery(),
        )
        .with_context(|| format!("Could not add '{}'", add_args.option))?;

    println!("{} Added '{}'.", "✔".green(), add_args.option.cyan());
    commons::print_listing(&handle)?;
    commons::save_if_requested(session, &handle, add_args.save.as_deref())
}

/// The handler for `remove-option`.
pub fn handle_remove_option(args: Vec<String>, session: &Session) -> Result<()> {
    let remove_args = RemoveOptionArgs::try_parse_from(&args)?;
    let handle = commons::load_source(session, &remove_args.source)?;

    let removed = handle
        .remove_option(
            &remove_args.group,
            &remove_args.option,
            session.catalog.recovery(),
        )
        .with_context(|| format!("Could not remove '{}'", remove_args.option))?;

    println!(
        "{} Removed '{}' ({}).",
        "✔".green(),
        removed.name().cyan(),
        format_price(removed.price())
    );
    commons::print_listing(&handle)?;
    commons::save_if_requested(session, &handle, remove_args.save.as_deref())
}
