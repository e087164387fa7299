// src/cli/mod.rs

use crate::core::catalog::Catalog;
use crate::core::settings::{RecoveryMode, Settings};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

/// Per-action argument structs.
pub mod args;
/// Action registry and routing.
pub mod dispatcher;
/// One handler per action.
pub mod handlers;

/// carconf: build, configure and price automobiles from tab-separated source files.
///
/// Usage: `carconf [OPTIONS] <action> [args...]`
///
/// Actions:
///   show <source>...                              print every option of each automobile
///   configure <source> --select <GROUP=OPTION>... select options and print the total price
///   rename-set <source> <group> <new-name>        rename an option set
///   set-price <source> <group> <option> <price>   change an option price
///   save <source> [--out <file>]                  write a binary snapshot
///   load [<file>]                                 print an automobile from a snapshot
///   race <source> <group> <option> <price>        update one price from several threads
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Settings file to use instead of `~/.config/carconf/carconf.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail on the first unknown option set or option name instead of prompting.
    #[arg(long, global = true)]
    pub fail_fast: bool,

    /// Diagnostic log file, overriding the settings file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// The action followed by its arguments.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Everything a handler needs: the effective settings and the catalog they built.
#[derive(Debug)]
pub struct Session {
    /// Effective settings after command-line overrides.
    pub settings: Settings,
    /// The catalog shared by every handler of this invocation.
    pub catalog: Arc<Catalog>,
}

impl Session {
    /// Loads settings, applies command-line overrides and creates the catalog.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => Settings::load(path),
            None => Settings::load_default(),
        }
        .context("Failed to load settings")?;

        if cli.fail_fast {
            settings.recovery = RecoveryMode::FailFast;
        }
        if let Some(log_file) = &cli.log_file {
            settings.log_file = log_file.clone();
        }
        log::debug!("Effective settings: {:?}", settings);

        let recovery = settings.build_recovery().with_context(|| {
            format!(
                "Failed to create diagnostic log '{}'",
                settings.log_file.display()
            )
        })?;

        Ok(Self {
            settings,
            catalog: Arc::new(Catalog::new(Arc::new(recovery))),
        })
    }
}
