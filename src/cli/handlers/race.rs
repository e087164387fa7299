// src/cli/handlers/race.rs

use crate::cli::{Session, args::RaceArgs, handlers::commons};
use crate::models::format_price;
use anyhow::{Result, anyhow};
use clap::Parser;
use colored::Colorize;
use std::thread;

/// The handler for `race`: several workers reprice the same option of one
/// shared automobile at the same time.
///
/// Every update takes the automobile's lock, so the final price is exactly one
/// of the prices written, never a mix. Which one wins depends on scheduling.
pub fn handle(args: Vec<String>, session: &Session) -> Result<()> {
    let race_args = RaceArgs::try_parse_from(&args)?;
    let handle = commons::load_source(session, &race_args.source)?;
    let name = handle.name().to_string();

    let outcomes: Vec<Result<()>> = thread::scope(|scope| {
        let workers: Vec<_> = (0..race_args.workers)
            .map(|worker| {
                let name = name.as_str();
                let race_args = &race_args;
                scope.spawn(move || -> Result<()> {
                    let price = race_args.price + f32::from(worker);
                    log::debug!("Worker {} writes {}.", worker + 1, price);
                    let updated = session.catalog.update_option_price(
                        name,
                        &race_args.group,
                        &race_args.option,
                        price,
                    )?;
                    commons::require(updated, name)?;
                    Ok(())
                })
            })
            .collect();

        workers
            .into_iter()
            .enumerate()
            .map(|(worker, join_handle)| {
                let outcome = join_handle
                    .join()
                    .map_err(|_| anyhow!("Worker {} panicked", worker + 1))
                    .and_then(|result| result);
                println!("Worker {} is done.", worker + 1);
                outcome
            })
            .collect()
    });
    for outcome in outcomes {
        outcome?;
    }

    // Names may have been replaced during recovery; then there is no single price to report.
    let final_price = handle.read(|auto| {
        auto.group_by_name(&race_args.group)
            .and_then(|group| group.option_by_name(&race_args.option))
            .map(|option| option.price())
            .ok()
    })?;
    if let Some(final_price) = final_price {
        println!(
            "{} Final price of '{}': {}",
            "✔".green(),
            race_args.option,
            format_price(final_price).cyan()
        );
    }
    commons::print_listing(&handle)
}
