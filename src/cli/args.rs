// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

/// Arguments of `show`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct ShowArgs {
    /// Source files to build. They are parsed in parallel and printed in order.
    #[arg(required = true)]
    pub sources: Vec<PathBuf>,
}

/// Arguments of `configure`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct ConfigureArgs {
    /// The automobile source file.
    pub source: PathBuf,

    /// A choice in the form `GROUP=OPTION`. Repeat for every group to configure.
    #[arg(long, short, value_name = "GROUP=OPTION")]
    pub select: Vec<String>,

    /// Also print the full option listing.
    #[arg(long)]
    pub all: bool,
}

/// Arguments of `rename-set`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct RenameSetArgs {
    /// The automobile source file.
    pub source: PathBuf,

    /// The current option set name.
    pub group: String,

    /// The new option set name.
    pub new_name: String,

    /// Write a snapshot of the edited automobile here.
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Arguments of `set-price`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct SetPriceArgs {
    /// The automobile source file.
    pub source: PathBuf,

    /// The option set holding the option.
    pub group: String,

    /// The option to reprice.
    pub option: String,

    /// The new price.
    #[arg(allow_negative_numbers = true)]
    pub price: f32,

    /// Write a snapshot of the edited automobile here.
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Arguments of `add-option`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct AddOptionArgs {
    /// The automobile source file.
    pub source: PathBuf,

    /// The option set receiving the option.
    pub group: String,

    /// The new option name.
    pub option: String,

    /// The new option price.
    #[arg(allow_negative_numbers = true)]
    pub price: f32,

    /// Write a snapshot of the edited automobile here.
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Arguments of `remove-option`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct RemoveOptionArgs {
    /// The automobile source file.
    pub source: PathBuf,

    /// The option set holding the option.
    pub group: String,

    /// The option to remove.
    pub option: String,

    /// Write a snapshot of the edited automobile here.
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Arguments of `save`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct SaveArgs {
    /// The automobile source file.
    pub source: PathBuf,

    /// Snapshot destination. Defaults to `snapshot_file` from the settings.
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

/// Arguments of `load`.
#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true)]
pub struct LoadArgs {
    /// Snapshot to read. Defaults to `snapshot_file` from the settings.
    pub snapshot: Option<PathBuf>,

    /// Print only the selected options and the total price.
    #[arg(long)]
    pub configuration: bool,
}

/// Arguments of `race`.
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
pub struct RaceArgs {
    /// The automobile source file.
    pub source: PathBuf,

    /// The option set holding the contested option.
    pub group: String,

    /// The option every worker reprices.
    pub option: String,

    /// The price written by the first worker; worker `n` writes `price + n`.
    #[arg(allow_negative_numbers = true)]
    pub price: f32,

    /// Number of concurrent workers.
    #[arg(long, short, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: u16,
}
