// src/cli/dispatcher.rs

use anyhow::{Result, anyhow};
use colored::Colorize;

use crate::cli::{Session, handlers};

/// A command name, its aliases and its handler.
struct CommandDefinition {
    name: &'static str,
    aliases: &'static [&'static str],
    handler: fn(Vec<String>, &Session) -> Result<()>,
}

/// Every action the binary understands.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "show",
        aliases: &["ls"],
        handler: handlers::show::handle,
    },
    CommandDefinition {
        name: "configure",
        aliases: &["conf"],
        handler: handlers::configure::handle,
    },
    CommandDefinition {
        name: "rename-set",
        aliases: &["rename"],
        handler: handlers::update::handle_rename_set,
    },
    CommandDefinition {
        name: "set-price",
        aliases: &["price"],
        handler: handlers::update::handle_set_price,
    },
    CommandDefinition {
        name: "add-option",
        aliases: &["add"],
        handler: handlers::update::handle_add_option,
    },
    CommandDefinition {
        name: "remove-option",
        aliases: &["rm"],
        handler: handlers::update::handle_remove_option,
    },
    CommandDefinition {
        name: "save",
        aliases: &[],
        handler: handlers::snapshot::handle_save,
    },
    CommandDefinition {
        name: "load",
        aliases: &[],
        handler: handlers::snapshot::handle_load,
    },
    CommandDefinition {
        name: "race",
        aliases: &[],
        handler: handlers::race::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// The names of every registered command, in registry order.
pub fn command_names() -> Vec<&'static str> {
    COMMAND_REGISTRY.iter().map(|cmd| cmd.name).collect()
}

/// Routes `action` to its handler with the remaining arguments.
pub fn dispatch(all_args: Vec<String>, session: &Session) -> Result<()> {
    log::debug!("Dispatching args: {:?}", all_args);

    let mut args = all_args.into_iter();
    let Some(action) = args.next() else {
        println!(
            "{} {}",
            "Available actions:".bold(),
            command_names().join(", ")
        );
        return Ok(());
    };

    let command = find_command(&action).ok_or_else(|| {
        anyhow!(
            "Unknown action '{}'. Available actions: {}",
            action,
            command_names().join(", ")
        )
    })?;
    log::debug!("Running '{}' handler.", command.name);
    (command.handler)(args.collect(), session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_command_by_name_and_alias() {
        assert_eq!(find_command("configure").map(|c| c.name), Some("configure"));
        assert_eq!(find_command("conf").map(|c| c.name), Some("configure"));
        assert_eq!(find_command("rm").map(|c| c.name), Some("remove-option"));
        assert!(find_command("Configure").is_none());
    }

    #[test]
    fn test_registry_has_no_duplicate_names() {
        let mut seen: Vec<&str> = Vec::new();
        for cmd in COMMAND_REGISTRY {
            for name in std::iter::once(&cmd.name).chain(cmd.aliases.iter()) {
                assert!(!seen.contains(name), "'{}' registered twice", name);
                seen.push(*name);
            }
        }
    }
}
