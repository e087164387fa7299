//! # carconf
//!
//! A catalog of automobile configurations: automobiles are built from a
//! tab-separated text description, registered in a [`Catalog`], configured
//! by selecting one option per option group, and priced.
//!
//! Every automobile is guarded by its own lock, so any number of threads can
//! share one catalog and operate on the same or different automobiles.

/// Command-line surface of the `carconf` binary.
pub mod cli;
/// Fixed widths, separators and default file names.
pub mod constants;
/// Catalog, parser, recovery protocol, snapshots and settings.
pub mod core;
/// Options, option groups and automobiles.
pub mod models;

pub use crate::core::catalog::{AutoHandle, Catalog};
pub use crate::core::errors::{AutoError, AutoResult, ErrorKind, NotFound};
pub use crate::core::recovery::{FailFast, NameResolver, PromptResolver, Recovery, ScriptedResolver};
pub use crate::models::{AutoOption, Automobile, OptionGroup};
