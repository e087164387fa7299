//! # Catalog
//!
//! The shared registry of automobiles and the per-automobile access handle.
//!
//! Every automobile lives behind its own mutex inside an [`AutoHandle`]. Each
//! public operation takes that lock once and runs its entire find-then-mutate
//! (or find-then-read) sequence before releasing it, so a rename and a price
//! update on the same automobile can never interleave their lookups with each
//! other's writes. Different automobiles never contend.
//!
//! When a name lookup misses, the lock is released *before* the recovery
//! protocol asks for a replacement name, and the whole operation is retried
//! from scratch under a fresh lock. A slow operator therefore only stalls the
//! caller waiting on the prompt.

use crate::core::errors::{AutoError, AutoResult, ErrorKind, NotFound};
use crate::core::parser::TextParser;
use crate::core::recovery::Recovery;
use crate::core::snapshot;
use crate::models::{AutoOption, Automobile};
use indexmap::IndexMap;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// The names a recovering operation is currently trying.
///
/// A miss only ever replaces the name of the kind that missed, so a retry keeps
/// any name that already resolved.
#[derive(Debug, Clone)]
struct Target {
    group: String,
    option: String,
}

impl Target {
    fn new(group: &str, option: &str) -> Self {
        Self {
            group: group.to_string(),
            option: option.to_string(),
        }
    }

    fn replace(&mut self, miss: &NotFound, replacement: String) {
        match miss.kind {
            ErrorKind::OptionSetNotFound => self.group = replacement,
            ErrorKind::OptionNotFound => self.option = replacement,
            _ => {}
        }
    }
}

/// A shared, lockable reference to one registered automobile.
#[derive(Debug, Clone)]
pub struct AutoHandle {
    name: Arc<str>,
    inner: Arc<Mutex<Automobile>>,
}

impl AutoHandle {
    /// Wraps an automobile in a fresh lock.
    pub fn new(automobile: Automobile) -> Self {
        Self {
            name: Arc::from(automobile.name()),
            inner: Arc::new(Mutex::new(automobile)),
        }
    }

    /// The name the automobile was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether two handles refer to the same automobile.
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    fn lock(&self) -> AutoResult<MutexGuard<'_, Automobile>> {
        self.inner.lock().map_err(|_| AutoError::Poisoned {
            name: self.name.to_string(),
        })
    }

    /// Runs `f` with shared access under the automobile's lock.
    pub fn read<T>(&self, f: impl FnOnce(&Automobile) -> T) -> AutoResult<T> {
        let guard = self.lock()?;
        Ok(f(&guard))
    }

    /// Runs `f` with exclusive access under the automobile's lock.
    pub fn write<T>(&self, f: impl FnOnce(&mut Automobile) -> T) -> AutoResult<T> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    /// A point-in-time copy of the automobile.
    pub fn snapshot(&self) -> AutoResult<Automobile> {
        self.read(Automobile::clone)
    }

    /// See [`Automobile::total_price`].
    pub fn total_price(&self) -> AutoResult<f32> {
        self.read(Automobile::total_price)
    }

    /// See [`Automobile::render`].
    pub fn render(&self) -> AutoResult<String> {
        self.read(Automobile::render)
    }

    /// See [`Automobile::render_configuration`].
    pub fn render_configuration(&self) -> AutoResult<String> {
        self.read(Automobile::render_configuration)
    }

    /// Runs `op` under the lock, recovering from misses with the lock released.
    fn with_recovery<T>(
        &self,
        mut target: Target,
        recovery: &Recovery,
        mut op: impl FnMut(&mut Automobile, &Target) -> Result<T, NotFound>,
    ) -> AutoResult<T> {
        loop {
            let outcome = {
                let mut guard = self.lock()?;
                op(&mut guard, &target)
            };
            match outcome {
                Ok(value) => return Ok(value),
                Err(miss) => {
                    let replacement = recovery.recover(&miss)?;
                    target.replace(&miss, replacement);
                }
            }
        }
    }

    /// Renames the option group `group` to `new_name`.
    pub fn update_group_name(
        &self,
        group: &str,
        new_name: &str,
        recovery: &Recovery,
    ) -> AutoResult<()> {
        self.with_recovery(Target::new(group, ""), recovery, |auto, target| {
            auto.rename_group(&target.group, new_name)
        })
    }

    /// Sets the price of `option` in `group`.
    pub fn update_option_price(
        &self,
        group: &str,
        option: &str,
        price: f32,
        recovery: &Recovery,
    ) -> AutoResult<()> {
        self.with_recovery(Target::new(group, option), recovery, |auto, target| {
            auto.update_option_price(&target.group, &target.option, price)
        })
    }

    /// Selects `option` in `group`.
    pub fn set_selection(&self, group: &str, option: &str, recovery: &Recovery) -> AutoResult<()> {
        self.with_recovery(Target::new(group, option), recovery, |auto, target| {
            auto.set_selection(&target.group, &target.option)
        })
    }

    /// Appends a new option named `option` to `group`.
    pub fn add_option(
        &self,
        group: &str,
        option: &str,
        price: f32,
        recovery: &Recovery,
    ) -> AutoResult<()> {
        self.with_recovery(Target::new(group, ""), recovery, |auto, target| {
            auto.add_option(&target.group, option, price)
        })
    }

    /// Removes `option` from `group`, clearing the group's selection if it was selected.
    pub fn remove_option(
        &self,
        group: &str,
        option: &str,
        recovery: &Recovery,
    ) -> AutoResult<AutoOption> {
        self.with_recovery(Target::new(group, option), recovery, |auto, target| {
            auto.remove_option(&target.group, &target.option)
        })
    }

    /// The name of the option selected in `group`, if any.
    pub fn selection(&self, group: &str, recovery: &Recovery) -> AutoResult<Option<String>> {
        self.with_recovery(Target::new(group, ""), recovery, |auto, target| {
            Ok(auto
                .selection(&target.group)?
                .map(|option| option.name().to_string()))
        })
    }
}

/// The registry of automobiles, keyed by name, in registration order.
///
/// A catalog is an ordinary value: whoever composes the system creates it and
/// shares it (typically in an `Arc`) with its workers.
#[derive(Debug)]
pub struct Catalog {
    entries: RwLock<IndexMap<String, AutoHandle>>,
    recovery: Arc<Recovery>,
}

impl Catalog {
    /// Creates an empty catalog that resolves lookup misses with `recovery`.
    pub fn new(recovery: Arc<Recovery>) -> Self {
        Self {
            entries: RwLock::new(IndexMap::new()),
            recovery,
        }
    }

    /// The recovery protocol shared by every operation of this catalog.
    pub fn recovery(&self) -> &Recovery {
        &self.recovery
    }

    // The map only holds handles; a panic while holding this lock cannot leave an automobile half-written.
    fn entries(&self) -> RwLockReadGuard<'_, IndexMap<String, AutoHandle>> {
        match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn entries_mut(&self) -> RwLockWriteGuard<'_, IndexMap<String, AutoHandle>> {
        match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Registers `automobile` under its name, replacing any previous entry of that name.
    pub fn register(&self, automobile: Automobile) -> AutoHandle {
        let handle = AutoHandle::new(automobile);
        let previous = self
            .entries_mut()
            .insert(handle.name().to_string(), handle.clone());
        if previous.is_some() {
            log::debug!("Replaced catalog entry '{}'.", handle.name());
        } else {
            log::debug!("Registered '{}'.", handle.name());
        }
        handle
    }

    /// Looks an automobile up by exact name. Absence is a normal result here.
    pub fn find(&self, name: &str) -> Option<AutoHandle> {
        self.entries().get(name).cloned()
    }

    /// Removes an automobile, keeping the order of the remaining entries.
    pub fn remove(&self, name: &str) -> Option<AutoHandle> {
        self.entries_mut().shift_remove(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries().keys().cloned().collect()
    }

    /// Number of registered automobiles.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Parses the source file at `path` and registers the result.
    pub fn build_and_register(&self, path: &Path) -> AutoResult<AutoHandle> {
        let automobile = TextParser::new(&self.recovery).parse_file(path)?;
        Ok(self.register(automobile))
    }

    /// Parses in-memory source text and registers the result.
    pub fn build_from_str(&self, text: &str) -> AutoResult<AutoHandle> {
        let automobile = TextParser::new(&self.recovery).parse_str(text)?;
        Ok(self.register(automobile))
    }

    /// Parses several source files in parallel and registers them in input order.
    ///
    /// Every source is attempted; the result for each path is returned in the same order.
    pub fn build_many(&self, paths: &[PathBuf]) -> Vec<AutoResult<AutoHandle>> {
        let parsed: Vec<AutoResult<Automobile>> = paths
            .par_iter()
            .map(|path| TextParser::new(&self.recovery).parse_file(path))
            .collect();
        parsed
            .into_iter()
            .map(|result| result.map(|automobile| self.register(automobile)))
            .collect()
    }

    /// Applies `op` to the named automobile; an absent automobile is a no-op (`Ok(None)`).
    fn delegate<T>(
        &self,
        name: &str,
        op: impl FnOnce(&AutoHandle, &Recovery) -> AutoResult<T>,
    ) -> AutoResult<Option<T>> {
        match self.find(name) {
            Some(handle) => op(&handle, &self.recovery).map(Some),
            None => {
                log::debug!("No automobile named '{}'; nothing to do.", name);
                Ok(None)
            }
        }
    }

    /// The full listing of the named automobile.
    pub fn render(&self, name: &str) -> AutoResult<Option<String>> {
        self.delegate(name, |handle, _| handle.render())
    }

    /// The configuration listing of the named automobile.
    pub fn render_configuration(&self, name: &str) -> AutoResult<Option<String>> {
        self.delegate(name, |handle, _| handle.render_configuration())
    }

    /// Renames an option group of the named automobile.
    pub fn update_group_name(
        &self,
        name: &str,
        group: &str,
        new_name: &str,
    ) -> AutoResult<Option<()>> {
        self.delegate(name, |handle, recovery| {
            handle.update_group_name(group, new_name, recovery)
        })
    }

    /// Changes an option price of the named automobile.
    pub fn update_option_price(
        &self,
        name: &str,
        group: &str,
        option: &str,
        price: f32,
    ) -> AutoResult<Option<()>> {
        self.delegate(name, |handle, recovery| {
            handle.update_option_price(group, option, price, recovery)
        })
    }

    /// Selects an option of the named automobile.
    pub fn set_selection(&self, name: &str, group: &str, option: &str) -> AutoResult<Option<()>> {
        self.delegate(name, |handle, recovery| {
            handle.set_selection(group, option, recovery)
        })
    }

    /// The configured total price of the named automobile.
    pub fn total_price(&self, name: &str) -> AutoResult<Option<f32>> {
        self.delegate(name, |handle, _| handle.total_price())
    }

    /// Writes a snapshot of the named automobile to `path`.
    pub fn save_snapshot(&self, name: &str, path: &Path) -> AutoResult<Option<PathBuf>> {
        self.delegate(name, |handle, _| {
            let automobile = handle.snapshot()?;
            snapshot::save(&automobile, path)
        })
    }

    /// Loads a snapshot from `path` and registers it.
    pub fn restore_snapshot(&self, path: &Path) -> AutoResult<AutoHandle> {
        let automobile = snapshot::load(path)?;
        Ok(self.register(automobile))
    }
}
