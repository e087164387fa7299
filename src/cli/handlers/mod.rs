// src/cli/handlers/mod.rs

// One module per action group; shared helpers live in `commons`.

/// Helpers shared by several handlers.
pub mod commons;
/// `configure`.
pub mod configure;
/// `race`.
pub mod race;
/// `show`.
pub mod show;
/// `save` and `load`.
pub mod snapshot;
/// `rename-set`, `set-price`, `add-option` and `remove-option`.
pub mod update;
