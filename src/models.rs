// src/models.rs

use crate::constants::{OPTION_COLUMN_WIDTH, PRICE_HEADER_GAP};
use crate::core::errors::{AutoResult, NotFound};
use crate::core::recovery::Recovery;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Formats a price the way the catalog has always printed floats:
/// whole amounts keep one decimal (`500.0`), fractional ones print as-is.
pub fn format_price(price: f32) -> String {
    if price.fract() == 0.0 && price.is_finite() {
        format!("{:.1}", price)
    } else {
        format!("{}", price)
    }
}

// --- OPTION ---

/// A single named, priced choice inside an [`OptionGroup`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AutoOption {
    name: String,
    price: f32,
}

impl AutoOption {
    /// Creates an option.
    pub fn new(name: impl Into<String>, price: f32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// The option name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The option price.
    pub fn price(&self) -> f32 {
        self.price
    }

    /// Renames the option.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Changes the option price.
    pub fn set_price(&mut self, price: f32) {
        self.price = price;
    }

    /// Renders the option as a two-column line: the name padded to a fixed
    /// column, then the price.
    pub fn render(&self) -> String {
        format!(
            "{:<width$}{}\n",
            self.name,
            format_price(self.price),
            width = OPTION_COLUMN_WIDTH
        )
    }
}

// --- OPTION GROUP ---

/// A named set of mutually exclusive options with at most one current selection.
///
/// The selection is kept as an index into `options`, so removals can keep it
/// consistent instead of leaving it pointing at a dropped option.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct OptionGroup {
    name: String,
    options: Vec<AutoOption>,
    selected: Option<usize>,
}

impl OptionGroup {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Vec::new(),
            selected: None,
        }
    }

    /// The group name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the group.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// All options in display order.
    pub fn options(&self) -> &[AutoOption] {
        &self.options
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the group has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Appends an option. Duplicate names are accepted; lookups only ever see the first.
    pub fn add_option(&mut self, name: impl Into<String>, price: f32) {
        self.options.push(AutoOption::new(name, price));
    }

    /// Index of the first option named exactly `name`.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.options.iter().position(|o| o.name == name)
    }

    /// Index of the first option whose price is exactly `price`.
    pub fn find_by_price(&self, price: f32) -> Option<usize> {
        self.options.iter().position(|o| o.price == price)
    }

    /// The option at `index`.
    pub fn option(&self, index: usize) -> Option<&AutoOption> {
        self.options.get(index)
    }

    /// The first option named `name`.
    pub fn option_by_name(&self, name: &str) -> Result<&AutoOption, NotFound> {
        self.find_by_name(name)
            .and_then(|i| self.options.get(i))
            .ok_or_else(|| NotFound::option(name))
    }

    /// Mutable access to the first option named `name`.
    pub fn option_by_name_mut(&mut self, name: &str) -> Result<&mut AutoOption, NotFound> {
        match self.find_by_name(name) {
            Some(i) => self.options.get_mut(i).ok_or_else(|| NotFound::option(name)),
            None => Err(NotFound::option(name)),
        }
    }

    /// Looks `name` up, running the recovery protocol on every miss.
    pub fn resolve_option(&self, name: &str, recovery: &Recovery) -> AutoResult<&AutoOption> {
        recovery.resolve(name, |candidate| self.option_by_name(candidate))
    }

    /// Overwrites the name and price of the option at `index`.
    /// Returns `false` when the index is out of range.
    pub fn set_option(&mut self, index: usize, name: impl Into<String>, price: f32) -> bool {
        match self.options.get_mut(index) {
            Some(option) => {
                option.set_name(name);
                option.set_price(price);
                true
            }
            None => false,
        }
    }

    /// Removes the option at `index`, keeping the selection consistent.
    pub fn remove_by_index(&mut self, index: usize) -> Option<AutoOption> {
        if index >= self.options.len() {
            return None;
        }
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        Some(self.options.remove(index))
    }

    /// Removes the first option named `name`.
    pub fn remove_by_name(&mut self, name: &str) -> Result<AutoOption, NotFound> {
        self.find_by_name(name)
            .and_then(|i| self.remove_by_index(i))
            .ok_or_else(|| NotFound::option(name))
    }

    /// Makes the first option named `name` the current selection.
    pub fn select(&mut self, name: &str) -> Result<(), NotFound> {
        let index = self.find_by_name(name).ok_or_else(|| NotFound::option(name))?;
        self.selected = Some(index);
        Ok(())
    }

    /// Clears the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Drops a selection that does not point at an option. Returns whether one was dropped.
    pub(crate) fn discard_dangling_selection(&mut self) -> bool {
        match self.selected {
            Some(i) if i >= self.options.len() => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }

    /// The currently selected option, if any.
    pub fn selection(&self) -> Option<&AutoOption> {
        self.selected.and_then(|i| self.options.get(i))
    }

    /// Renders a header, a column header row, every option, and a blank line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "You can choose the following options and prices for {}:",
            self.name
        );
        let _ = writeln!(out, "Option{}Price($)", " ".repeat(PRICE_HEADER_GAP));
        for option in &self.options {
            out.push_str(&option.render());
        }
        out.push('\n');
        out
    }
}

// --- AUTOMOBILE ---

/// A car model: make, model, base price and its option groups.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Automobile {
    make: String,
    model: String,
    // Derived from make and model; rebuilt by `revalidate` after deserializing.
    #[serde(skip)]
    name: String,
    base_price: f32,
    groups: Vec<OptionGroup>,
}

impl Automobile {
    /// Creates an automobile with no option groups.
    pub fn new(make: impl Into<String>, model: impl Into<String>, base_price: f32) -> Self {
        let make = make.into();
        let model = model.into();
        let name = format!("{} {}", make, model);
        Self {
            make,
            model,
            name,
            base_price,
            groups: Vec::new(),
        }
    }

    /// `make + " " + model`; this is the catalog key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The brand.
    pub fn make(&self) -> &str {
        &self.make
    }

    /// The model.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// The base price, before options.
    pub fn base_price(&self) -> f32 {
        self.base_price
    }

    /// Changes the brand and recomputes the name.
    pub fn set_make(&mut self, make: impl Into<String>) {
        self.make = make.into();
        self.refresh_name();
    }

    /// Changes the model and recomputes the name.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
        self.refresh_name();
    }

    /// Changes the base price.
    pub fn set_base_price(&mut self, base_price: f32) {
        self.base_price = base_price;
    }

    fn refresh_name(&mut self) {
        self.name = format!("{} {}", self.make, self.model);
    }

    /// Restores the derived name and drops dangling selections.
    /// Returns the number of selections dropped.
    pub(crate) fn revalidate(&mut self) -> usize {
        self.refresh_name();
        self.groups
            .iter_mut()
            .map(OptionGroup::discard_dangling_selection)
            .filter(|dropped| *dropped)
            .count()
    }

    /// All groups in display order.
    pub fn groups(&self) -> &[OptionGroup] {
        &self.groups
    }

    /// The group at `index`.
    pub fn group(&self, index: usize) -> Option<&OptionGroup> {
        self.groups.get(index)
    }

    /// Mutable access to the group at `index`.
    pub fn group_mut(&mut self, index: usize) -> Option<&mut OptionGroup> {
        self.groups.get_mut(index)
    }

    /// Appends a fully built group.
    pub fn add_group(&mut self, group: OptionGroup) {
        self.groups.push(group);
    }

    /// Appends an empty group named `name`.
    pub fn add_empty_group(&mut self, name: impl Into<String>) {
        self.groups.push(OptionGroup::new(name));
    }

    /// Appends an option to the first group named `group`.
    pub fn add_option(
        &mut self,
        group: &str,
        option: impl Into<String>,
        price: f32,
    ) -> Result<(), NotFound> {
        self.group_by_name_mut(group)?.add_option(option, price);
        Ok(())
    }

    /// Index of the first group named exactly `name`.
    pub fn find_group_by_name(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name() == name)
    }

    /// The first group named `name`.
    pub fn group_by_name(&self, name: &str) -> Result<&OptionGroup, NotFound> {
        self.find_group_by_name(name)
            .and_then(|i| self.groups.get(i))
            .ok_or_else(|| NotFound::option_set(name))
    }

    /// Mutable access to the first group named `name`.
    pub fn group_by_name_mut(&mut self, name: &str) -> Result<&mut OptionGroup, NotFound> {
        match self.find_group_by_name(name) {
            Some(i) => self
                .groups
                .get_mut(i)
                .ok_or_else(|| NotFound::option_set(name)),
            None => Err(NotFound::option_set(name)),
        }
    }

    /// Looks a group up, running the recovery protocol on every miss.
    pub fn resolve_group(&self, name: &str, recovery: &Recovery) -> AutoResult<&OptionGroup> {
        recovery.resolve(name, |candidate| self.group_by_name(candidate))
    }

    /// The first `(group index, option index)` holding an option named `option`.
    pub fn find_option(&self, option: &str) -> Option<(usize, usize)> {
        self.groups
            .iter()
            .enumerate()
            .find_map(|(g, group)| group.find_by_name(option).map(|o| (g, o)))
    }

    /// Renames the first group named `old` to `new`.
    pub fn rename_group(&mut self, old: &str, new: impl Into<String>) -> Result<(), NotFound> {
        self.group_by_name_mut(old)?.set_name(new);
        Ok(())
    }

    /// Sets the price of `option` inside `group`.
    pub fn update_option_price(
        &mut self,
        group: &str,
        option: &str,
        price: f32,
    ) -> Result<(), NotFound> {
        self.group_by_name_mut(group)?
            .option_by_name_mut(option)?
            .set_price(price);
        Ok(())
    }

    /// Replaces the name and price of `option` inside `group`.
    pub fn replace_option(
        &mut self,
        group: &str,
        option: &str,
        new_name: impl Into<String>,
        price: f32,
    ) -> Result<(), NotFound> {
        let target = self.group_by_name_mut(group)?;
        let index = target
            .find_by_name(option)
            .ok_or_else(|| NotFound::option(option))?;
        target.set_option(index, new_name, price);
        Ok(())
    }

    /// Selects `option` inside `group`.
    pub fn set_selection(&mut self, group: &str, option: &str) -> Result<(), NotFound> {
        self.group_by_name_mut(group)?.select(option)
    }

    /// The option currently selected in `group`.
    pub fn selection(&self, group: &str) -> Result<Option<&AutoOption>, NotFound> {
        Ok(self.group_by_name(group)?.selection())
    }

    /// Removes the group at `index`.
    pub fn remove_group_by_index(&mut self, index: usize) -> Option<OptionGroup> {
        if index < self.groups.len() {
            Some(self.groups.remove(index))
        } else {
            None
        }
    }

    /// Removes the first group named `name`.
    pub fn remove_group_by_name(&mut self, name: &str) -> Result<OptionGroup, NotFound> {
        self.find_group_by_name(name)
            .and_then(|i| self.remove_group_by_index(i))
            .ok_or_else(|| NotFound::option_set(name))
    }

    /// Removes `option` from `group`.
    pub fn remove_option(&mut self, group: &str, option: &str) -> Result<AutoOption, NotFound> {
        self.group_by_name_mut(group)?.remove_by_name(option)
    }

    /// Base price plus the price of every group's selection.
    /// Groups without a selection contribute nothing.
    pub fn total_price(&self) -> f32 {
        self.groups
            .iter()
            .filter_map(OptionGroup::selection)
            .fold(self.base_price, |total, option| total + option.price())
    }

    /// Whether every group has a selection.
    pub fn is_fully_configured(&self) -> bool {
        self.groups.iter().all(|g| g.selection().is_some())
    }

    /// Renders every group and its options.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "The car {} {} has {} property settings.\n",
            self.make,
            self.model,
            self.groups.len()
        );
        let _ = writeln!(
            out,
            "Its base price is {} dollars.",
            format_price(self.base_price)
        );
        for group in &self.groups {
            out.push_str(&group.render());
        }
        out
    }

    /// Renders the base data and the current selection of every group.
    pub fn render_configuration(&self) -> String {
        let mut out = String::from("Your car configuration is as follows:\n");
        let _ = writeln!(out, "Car make: {}", self.make);
        let _ = writeln!(out, "Car model: {}", self.model);
        let _ = writeln!(out, "Base price: {}", format_price(self.base_price));
        for group in &self.groups {
            let _ = writeln!(out, "{}", group.name());
            match group.selection() {
                Some(option) => out.push_str(&option.render()),
                None => out.push_str("(no selection)\n"),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnostics::DiagnosticLog;
    use crate::core::errors::{AutoError, ErrorKind};
    use crate::core::recovery::{FailFast, NameResolver, ScriptedResolver};
    use std::sync::Arc;
    use tempfile::{TempDir, tempdir};

    fn recovery_with(resolver: impl NameResolver + 'static, dir: &TempDir) -> Recovery {
        let log = DiagnosticLog::create(&dir.path().join("log.txt")).unwrap();
        Recovery::new(Box::new(resolver), Arc::new(log)).quiet()
    }

    fn focus() -> Automobile {
        let mut auto = Automobile::new("Focus", "Wagon ZTW", 18445.0);
        auto.add_empty_group("Color");
        auto.add_option("Color", "Fort Knox Gold Clearcoat Metallic", 0.0).unwrap();
        auto.add_option("Color", "Liquid Grey Clearcoat Metallic", 0.0).unwrap();
        auto.add_empty_group("Transmission");
        auto.add_option("Transmission", "automatic", 0.0).unwrap();
        auto.add_option("Transmission", "standard", -815.0).unwrap();
        auto.add_empty_group("Power Moonroof");
        auto.add_option("Power Moonroof", "present", 595.0).unwrap();
        auto.add_option("Power Moonroof", "not present", 0.0).unwrap();
        auto
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(500.0), "500.0");
        assert_eq!(format_price(-815.0), "-815.0");
        assert_eq!(format_price(10.5), "10.5");
    }

    #[test]
    fn test_option_render_is_fixed_width() {
        let line = AutoOption::new("Red", 0.0).render();
        assert_eq!(line.len(), OPTION_COLUMN_WIDTH + "0.0\n".len());
        assert!(line.starts_with("Red "));
        assert!(line.ends_with("0.0\n"));

        // Long names are never truncated.
        let long = "x".repeat(60);
        assert!(AutoOption::new(long.clone(), 1.0).render().starts_with(&long));
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut group = OptionGroup::new("Color");
        group.add_option("Red", 0.0);
        group.add_option("Blue", 500.0);
        group.add_option("Red", 250.0);

        assert_eq!(group.find_by_name("Red"), Some(0));
        assert_eq!(group.find_by_name("Blue"), Some(1));
        assert_eq!(group.find_by_name("red"), None);
        assert_eq!(group.find_by_name(""), None);
        assert_eq!(group.find_by_price(250.0), Some(2));
        assert_eq!(group.find_by_price(250.0001), None);
        assert_eq!(group.option_by_name("Red").unwrap().price(), 0.0);
    }

    #[test]
    fn test_find_group_returns_first_match() {
        let mut auto = focus();
        auto.add_empty_group("Color");
        assert_eq!(auto.find_group_by_name("Color"), Some(0));
        assert_eq!(auto.find_group_by_name("Transmission"), Some(1));
        assert_eq!(auto.find_group_by_name("Brakes"), None);

        let miss = auto.group_by_name("Brakes").unwrap_err();
        assert_eq!(miss.kind, ErrorKind::OptionSetNotFound);
        assert_eq!(miss.name, "Brakes");
    }

    #[test]
    fn test_removing_selected_option_clears_selection() {
        let mut group = OptionGroup::new("Color");
        group.add_option("Red", 0.0);
        group.add_option("Blue", 500.0);
        group.select("Blue").unwrap();

        group.remove_by_name("Blue").unwrap();
        assert!(group.selection().is_none());
    }

    #[test]
    fn test_removing_earlier_option_keeps_selection() {
        let mut group = OptionGroup::new("Color");
        group.add_option("Red", 0.0);
        group.add_option("Green", 100.0);
        group.add_option("Blue", 500.0);
        group.select("Blue").unwrap();

        group.remove_by_index(0).unwrap();
        assert_eq!(group.selection().unwrap().name(), "Blue");
        group.remove_by_index(1).unwrap();
        assert!(group.selection().is_none());
        assert!(group.remove_by_index(7).is_none());
    }

    #[test]
    fn test_set_option_out_of_range_is_rejected() {
        let mut group = OptionGroup::new("Color");
        group.add_option("Red", 0.0);
        assert!(group.set_option(0, "Crimson", 15.0));
        assert!(!group.set_option(1, "Ghost", 1.0));
        assert_eq!(group.options(), &[AutoOption::new("Crimson", 15.0)]);
    }

    #[test]
    fn test_total_price_sums_selections() {
        let mut auto = focus();
        auto.set_selection("Transmission", "standard").unwrap();
        auto.set_selection("Power Moonroof", "present").unwrap();
        auto.set_selection("Color", "Liquid Grey Clearcoat Metallic").unwrap();

        assert!(auto.is_fully_configured());
        assert_eq!(auto.total_price(), 18445.0 - 815.0 + 595.0);
    }

    #[test]
    fn test_unselected_groups_contribute_zero() {
        let mut auto = focus();
        assert_eq!(auto.total_price(), 18445.0);

        auto.set_selection("Power Moonroof", "present").unwrap();
        assert!(!auto.is_fully_configured());
        assert_eq!(auto.total_price(), 18445.0 + 595.0);
    }

    #[test]
    fn test_name_follows_make_and_model() {
        let mut auto = focus();
        assert_eq!(auto.name(), "Focus Wagon ZTW");
        auto.set_model("Sedan");
        assert_eq!(auto.name(), "Focus Sedan");
        auto.set_make("Ford Focus");
        assert_eq!(auto.name(), "Ford Focus Sedan");
    }

    #[test]
    fn test_mutations_report_which_name_missed() {
        let mut auto = focus();
        let miss = auto.update_option_price("Colour", "Red", 1.0).unwrap_err();
        assert_eq!(miss.kind, ErrorKind::OptionSetNotFound);

        let miss = auto.update_option_price("Color", "Red", 1.0).unwrap_err();
        assert_eq!(miss.kind, ErrorKind::OptionNotFound);
        assert_eq!(miss.name, "Red");

        auto.replace_option("Transmission", "standard", "manual", -700.0).unwrap();
        let transmission = auto.group_by_name("Transmission").unwrap();
        assert_eq!(transmission.option(1), Some(&AutoOption::new("manual", -700.0)));
        assert_eq!(auto.find_option("manual"), Some((1, 1)));
    }

    #[test]
    fn test_remove_groups() {
        let mut auto = focus();
        let removed = auto.remove_group_by_name("Transmission").unwrap();
        assert_eq!(removed.name(), "Transmission");
        assert_eq!(auto.groups().len(), 2);
        assert!(auto.remove_group_by_index(5).is_none());
        assert!(auto.remove_group_by_name("Transmission").is_err());
    }

    #[test]
    fn test_render_configuration() {
        let mut auto = focus();
        auto.set_selection("Color", "Fort Knox Gold Clearcoat Metallic").unwrap();
        let text = auto.render_configuration();

        assert!(text.starts_with("Your car configuration is as follows:\nCar make: Focus\n"));
        assert!(text.contains("Base price: 18445.0\n"));
        assert!(text.contains("Color\nFort Knox Gold Clearcoat Metallic"));
        assert!(text.contains("Transmission\n(no selection)\n"));
    }

    #[test]
    fn test_render_lists_every_group() {
        let text = focus().render();
        assert!(text.starts_with("The car Focus Wagon ZTW has 3 property settings.\n\n"));
        assert!(text.contains("Its base price is 18445.0 dollars.\n"));
        assert!(text.contains("You can choose the following options and prices for Power Moonroof:\n"));
        assert!(text.contains(&format!("Option{}Price($)\n", " ".repeat(PRICE_HEADER_GAP))));
    }

    #[test]
    fn test_resolve_option_heals_after_invalid_names() {
        let dir = tempdir().unwrap();
        let recovery = recovery_with(
            ScriptedResolver::new(["Grey", "Liquid Grey Clearcoat Metallic"]),
            &dir,
        );
        let auto = focus();
        let color = auto.group_by_name("Color").unwrap();

        let option = color.resolve_option("Silver", &recovery).unwrap();
        assert_eq!(option.name(), "Liquid Grey Clearcoat Metallic");
        assert_eq!(option, color.option(1).unwrap());

        // "Silver" and "Grey" each missed once.
        let lines = recovery.log().lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.ends_with("\tThe option name was not found!")));
    }

    #[test]
    fn test_resolve_group_heals_after_invalid_names() {
        let dir = tempdir().unwrap();
        let recovery = recovery_with(ScriptedResolver::new(["Gearbox", "Transmission"]), &dir);
        let auto = focus();

        let group = auto.resolve_group("Trans", &recovery).unwrap();
        assert_eq!(group.name(), "Transmission");
        assert_eq!(group, auto.group(1).unwrap());

        let lines = recovery.log().lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.ends_with("\tThe option set name was not found!")));
    }

    #[test]
    fn test_resolve_hits_without_logging() {
        let dir = tempdir().unwrap();
        let recovery = recovery_with(FailFast, &dir);
        let auto = focus();

        let group = auto.resolve_group("Power Moonroof", &recovery).unwrap();
        assert_eq!(group.resolve_option("present", &recovery).unwrap().price(), 595.0);
        assert!(recovery.log().lines().unwrap().is_empty());
    }

    #[test]
    fn test_resolve_gives_up_with_unresolved() {
        let dir = tempdir().unwrap();
        let auto = focus();

        let recovery = recovery_with(ScriptedResolver::new(["Sunroof"]), &dir);
        let err = auto.resolve_group("Roof", &recovery).unwrap_err();
        assert!(matches!(
            err,
            AutoError::Unresolved {
                kind: ErrorKind::OptionSetNotFound
            }
        ));
        assert_eq!(recovery.log().lines().unwrap().len(), 2);

        let recovery = recovery_with(FailFast, &dir);
        let color = auto.group_by_name("Color").unwrap();
        let err = color.resolve_option("Plaid", &recovery).unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::OptionNotFound));
        assert_eq!(recovery.log().lines().unwrap().len(), 1);
    }

    #[test]
    fn test_clear_selection() {
        let mut auto = focus();
        auto.set_selection("Power Moonroof", "present").unwrap();
        assert_eq!(auto.total_price(), 18445.0 + 595.0);

        auto.group_by_name_mut("Power Moonroof").unwrap().clear_selection();
        assert!(auto.selection("Power Moonroof").unwrap().is_none());
        assert_eq!(auto.total_price(), 18445.0);
    }

    #[test]
    fn test_revalidate_restores_name_and_drops_dangling_selection() {
        let mut auto = focus();
        auto.set_selection("Transmission", "standard").unwrap();
        auto.set_selection("Color", "Liquid Grey Clearcoat Metallic").unwrap();
        auto.name.clear();
        if let Some(color) = auto.group_mut(0) {
            color.selected = Some(7);
        }

        assert_eq!(auto.revalidate(), 1);
        assert_eq!(auto.name(), "Focus Wagon ZTW");
        assert!(auto.selection("Color").unwrap().is_none());
        assert_eq!(auto.selection("Transmission").unwrap().unwrap().name(), "standard");
    }
}
