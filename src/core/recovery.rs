//! # Recovery
//!
//! Name-resolution failure handling. A lookup miss is *reported* (one console
//! line, one diagnostic log line) and then, for the kinds that allow it, *fixed*
//! by asking a [`NameResolver`] for a replacement name. Callers retry their
//! lookup with the replacement until it resolves or the resolver gives up.
//!
//! The resolver is a strategy object so the data model never touches the console:
//! the binary plugs in [`PromptResolver`], tests plug in [`ScriptedResolver`], and
//! batch callers use [`FailFast`].

use crate::core::diagnostics::DiagnosticLog;
use crate::core::errors::{AutoError, AutoResult, ErrorKind, NotFound};
use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Supplies replacement names after a lookup miss.
///
/// Resolvers are shared by every thread using a catalog, so each one guards its
/// own state. A resolver must not serialise callers beyond what its medium needs.
pub trait NameResolver: Send + Sync {
    /// Returns a replacement name for a miss of `kind`, or `Ok(None)` to give up.
    fn replacement(&self, kind: ErrorKind) -> AutoResult<Option<String>>;
}

/// Locks a resolver's internal state, recovering it if a holder panicked.
fn lock_state<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Asks the operator for a replacement name on the terminal.
#[derive(Debug, Default)]
pub struct PromptResolver {
    // One prompt on the terminal at a time.
    terminal: Mutex<()>,
}

impl NameResolver for PromptResolver {
    fn replacement(&self, kind: ErrorKind) -> AutoResult<Option<String>> {
        let prompt = match kind {
            ErrorKind::OptionSetNotFound => "Enter one of the existing option set names",
            ErrorKind::OptionNotFound => "Enter one of the existing option names",
            _ => return Ok(None),
        };
        let _terminal = lock_state(&self.terminal);
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AutoError::Prompt(e.to_string()))?;

        // An empty answer is how the operator abandons the operation.
        if input.is_empty() {
            Ok(None)
        } else {
            Ok(Some(input))
        }
    }
}

/// Replays a fixed sequence of answers, then gives up.
#[derive(Debug, Default)]
pub struct ScriptedResolver {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedResolver {
    /// Creates a resolver that answers with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
        }
    }

    /// Number of answers not consumed yet.
    pub fn remaining(&self) -> usize {
        lock_state(&self.answers).len()
    }
}

impl NameResolver for ScriptedResolver {
    fn replacement(&self, _kind: ErrorKind) -> AutoResult<Option<String>> {
        Ok(lock_state(&self.answers).pop_front())
    }
}

/// Never supplies a replacement; every miss becomes an [`AutoError::Unresolved`].
#[derive(Debug, Default)]
pub struct FailFast;

impl NameResolver for FailFast {
    fn replacement(&self, _kind: ErrorKind) -> AutoResult<Option<String>> {
        Ok(None)
    }
}

/// The recovery protocol: report, log, and fetch replacement names.
pub struct Recovery {
    resolver: Box<dyn NameResolver>,
    log: Arc<DiagnosticLog>,
    echo: bool,
}

impl fmt::Debug for Recovery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recovery")
            .field("log", &self.log.path())
            .field("echo", &self.echo)
            .finish_non_exhaustive()
    }
}

impl Recovery {
    /// Creates a protocol instance writing to `log` and asking `resolver` for fixes.
    pub fn new(resolver: Box<dyn NameResolver>, log: Arc<DiagnosticLog>) -> Self {
        Self {
            resolver,
            log,
            echo: true,
        }
    }

    /// Disables the console line printed for every reported failure.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// The diagnostic log this protocol writes to.
    pub fn log(&self) -> &DiagnosticLog {
        &self.log
    }

    /// Surfaces a failure: one console line first, then one flushed log line.
    pub fn report(&self, kind: ErrorKind) {
        if self.echo {
            eprintln!("{}", kind.message().yellow());
        }
        log::warn!("{}", kind);
        if let Err(e) = self.log.record(kind) {
            log::error!(
                "Could not write to diagnostic log '{}': {}",
                self.log.path().display(),
                e
            );
        }
    }

    /// Reports `kind` and returns the error a caller surfaces when it cannot continue.
    pub fn fail(&self, kind: ErrorKind) -> AutoError {
        self.report(kind);
        AutoError::Unresolved { kind }
    }

    /// Obtains a replacement name for a miss of `kind`.
    ///
    /// Kinds without an interactive fix, and resolvers that give up, yield
    /// [`AutoError::Unresolved`].
    pub fn fix(&self, kind: ErrorKind) -> AutoResult<String> {
        if !kind.has_interactive_fix() {
            return Err(AutoError::Unresolved { kind });
        }
        match self.resolver.replacement(kind)? {
            Some(name) => {
                log::debug!("Retrying lookup with replacement name '{}'", name);
                Ok(name)
            }
            None => Err(AutoError::Unresolved { kind }),
        }
    }

    /// Reports a model-level miss and fetches its replacement in one step.
    pub fn recover(&self, miss: &NotFound) -> AutoResult<String> {
        log::debug!("Lookup miss: {}", miss);
        self.report(miss.kind);
        self.fix(miss.kind)
    }

    /// Runs `lookup` with `name`, then with each replacement name, until it succeeds.
    pub fn resolve<T>(
        &self,
        name: &str,
        mut lookup: impl FnMut(&str) -> Result<T, NotFound>,
    ) -> AutoResult<T> {
        let mut current = name.to_string();
        loop {
            match lookup(&current) {
                Ok(found) => return Ok(found),
                Err(miss) => current = self.recover(&miss)?,
            }
        }
    }
}
