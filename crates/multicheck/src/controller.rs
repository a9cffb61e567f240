//! The checkbox group controller.
//!
//! [`MultiCheckboxes`] is a non-visual coordinator: it owns the checked state
//! of every option, arranges the options in columns, keeps the synthetic
//! "Select All" entry in sync, and reports selection changes through its
//! [`selection_changed`](MultiCheckboxes::selection_changed) signal.
//!
//! # Usage Pattern
//!
//! A rendering layer draws one block per column and one checkbox per entry.
//! Whenever a checkbox changes, the renderer calls
//! [`toggle_option`](MultiCheckboxes::toggle_option) (or
//! [`click`](MultiCheckboxes::click)) with the entry's value, then redraws
//! from [`columns`](MultiCheckboxes::columns).
//!
//! # Selection Ordering
//!
//! Notifications are computed as a diff against the currently displayed
//! selection (the host's values in controlled mode, the remembered values in
//! uncontrolled mode) rather than recomputed from the layout. A newly checked
//! option is appended, an unchecked one is removed, and checking "Select All"
//! keeps already selected options first in their existing order.

use std::collections::HashSet;

use multicheck_core::logging::span_names;
use multicheck_core::{
    PerfSpan, Result, Signal, multicheck_debug, multicheck_trace, multicheck_warn, partition_vec,
    section_sizes,
};

use crate::config::{MAX_RECOMMENDED_COLUMNS, MultiCheckboxesConfig};
use crate::option::{CheckOption, SELECT_ALL_VALUE, SelectableOption};

/// Who owns the selected values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// The host supplies the selected values and is their source of truth.
    Controlled,
    /// The widget remembers its own selected values.
    Uncontrolled,
}

/// A group of checkboxes laid out in columns with a "Select All" control.
///
/// # Layout
///
/// The layout is a list of columns, each a list of [`SelectableOption`]s from
/// top to bottom. The "Select All" entry is always the first entry of the
/// first column, and every real option appears exactly once.
///
/// # Signals
///
/// - `selection_changed(Vec<CheckOption>)`: Emitted after every toggle with
///   the new ordered selection, only while at least one slot is connected.
///
/// # Example
///
/// ```
/// use multicheck::{CheckOption, MultiCheckboxes, MultiCheckboxesConfig, SELECT_ALL_VALUE};
///
/// let options = vec![
///     CheckOption::new("Apple", "apple"),
///     CheckOption::new("Pear", "pear"),
///     CheckOption::new("Plum", "plum"),
/// ];
/// let mut group = MultiCheckboxes::new(MultiCheckboxesConfig::new(options).columns(2)).unwrap();
///
/// group.selection_changed.connect(|selected| {
///     println!("{} selected", selected.len());
/// });
///
/// group.toggle_option("pear", true);
/// group.toggle_option(SELECT_ALL_VALUE, true);
/// assert!(group.is_all_checked());
/// assert_eq!(group.column_count(), 2);
/// ```
#[derive(Debug)]
pub struct MultiCheckboxes {
    /// Heading text.
    label: String,

    /// All real options in their original order.
    options: Vec<CheckOption>,

    /// Entries arranged in columns; "Select All" is `columns[0][0]`.
    columns: Vec<Vec<SelectableOption>>,

    /// Fixed at construction.
    mode: SelectionMode,

    /// The displayed selection: the host's values when controlled, the
    /// remembered values when uncontrolled.
    selected_values: Vec<String>,

    /// Signal emitted when the selection changes.
    pub selection_changed: Signal<Vec<CheckOption>>,
}

impl MultiCheckboxes {
    /// Create a checkbox group from its configuration.
    ///
    /// Fails with [`MultiCheckError::InvalidArgument`](multicheck_core::MultiCheckError)
    /// when the column count is zero.
    pub fn new(config: MultiCheckboxesConfig) -> Result<Self> {
        let _perf = PerfSpan::new(span_names::LAYOUT);

        let mode = if config.is_controlled() {
            SelectionMode::Controlled
        } else {
            SelectionMode::Uncontrolled
        };

        let MultiCheckboxesConfig {
            options,
            columns,
            values,
            label,
        } = config;
        let values = values.unwrap_or_default();

        if columns > MAX_RECOMMENDED_COLUMNS {
            multicheck_debug!(
                columns,
                max = MAX_RECOMMENDED_COLUMNS,
                "column count above the recommended range"
            );
        }

        let entries = initial_entries(&options, &values);
        let columns = partition_vec(columns, entries)?;

        multicheck_debug!(
            options = options.len(),
            columns = columns.len(),
            ?mode,
            "checkbox group created"
        );

        let selected_values = match mode {
            SelectionMode::Controlled => values,
            SelectionMode::Uncontrolled => Vec::new(),
        };

        Ok(Self {
            label,
            options,
            columns,
            mode,
            selected_values,
            selection_changed: Signal::new(),
        })
    }

    /// Connect `slot` to [`selection_changed`](Self::selection_changed) using
    /// builder pattern.
    pub fn with_on_change<F>(self, slot: F) -> Self
    where
        F: Fn(&Vec<CheckOption>) + Send + Sync + 'static,
    {
        self.selection_changed.connect(slot);
        self
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// The heading text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// All real options in their original order.
    pub fn options(&self) -> &[CheckOption] {
        &self.options
    }

    /// The column layout, left to right, each column top to bottom.
    pub fn columns(&self) -> &[Vec<SelectableOption>] {
        &self.columns
    }

    /// Number of columns in the layout.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The selection mode chosen at construction.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Whether the host controls the selected values.
    pub fn is_controlled(&self) -> bool {
        self.mode == SelectionMode::Controlled
    }

    /// The "Select All" entry.
    pub fn select_all_entry(&self) -> Option<&SelectableOption> {
        self.columns.first().and_then(|column| column.first())
    }

    /// Whether the "Select All" entry is checked.
    pub fn is_all_checked(&self) -> bool {
        self.select_all_entry().is_some_and(|entry| entry.checked)
    }

    /// Look up the entry for `value`, including the "Select All" entry.
    pub fn entry(&self, value: &str) -> Option<&SelectableOption> {
        self.columns
            .iter()
            .flatten()
            .find(|entry| entry.value == value)
    }

    /// Whether the entry for `value` is checked. Unknown values are unchecked.
    pub fn is_checked(&self, value: &str) -> bool {
        self.entry(value).is_some_and(|entry| entry.checked)
    }

    /// The checked real options in layout order.
    pub fn checked_options(&self) -> Vec<CheckOption> {
        self.columns
            .iter()
            .flatten()
            .filter(|entry| entry.checked && !entry.is_select_all())
            .map(SelectableOption::to_option)
            .collect()
    }

    /// The displayed selected values.
    ///
    /// In controlled mode these are the host's values; in uncontrolled mode
    /// the values remembered from the last toggle.
    pub fn selected_values(&self) -> &[String] {
        &self.selected_values
    }

    /// The displayed selection mapped to options, skipping unknown values.
    pub fn selected_options(&self) -> Vec<CheckOption> {
        self.selected_values
            .iter()
            .filter_map(|value| self.find_option(value))
            .cloned()
            .collect()
    }

    // =========================================================================
    // Host Updates
    // =========================================================================

    /// Replace the host-controlled selected values.
    ///
    /// This mirrors the host re-rendering with new values: later
    /// notifications are computed from them, but the checked flags of the
    /// layout are left as they are. Returns `false` (and changes nothing) in
    /// uncontrolled mode.
    pub fn set_values<I, S>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.mode != SelectionMode::Controlled {
            multicheck_warn!("set_values ignored: checkbox group is uncontrolled");
            return false;
        }

        self.selected_values = values.into_iter().map(Into::into).collect();
        multicheck_trace!(count = self.selected_values.len(), "host values replaced");
        true
    }

    /// Re-flow the current entries into `columns` columns.
    ///
    /// Checked state is preserved and "Select All" stays first. On error the
    /// layout is left untouched.
    pub fn set_columns(&mut self, columns: usize) -> Result<()> {
        let entry_count = self.columns.iter().map(Vec::len).sum();
        section_sizes(columns, entry_count)?;

        let entries: Vec<SelectableOption> =
            std::mem::take(&mut self.columns).into_iter().flatten().collect();
        self.columns = partition_vec(columns, entries)?;

        multicheck_debug!(
            requested = columns,
            columns = self.columns.len(),
            "checkbox group re-laid out"
        );
        Ok(())
    }

    // =========================================================================
    // Toggling
    // =========================================================================

    /// Set the checked state of the entry identified by `value`.
    ///
    /// `value` is either a real option value or [`SELECT_ALL_VALUE`]. Returns
    /// `false` without changing anything when `value` is unknown.
    #[tracing::instrument(skip(self), target = "multicheck::controller", level = "trace")]
    pub fn toggle_option(&mut self, value: &str, checked: bool) -> bool {
        if value == SELECT_ALL_VALUE {
            self.apply_select_all(checked);
            return true;
        }

        let Some(option) = self.find_option(value).cloned() else {
            multicheck_warn!(value, "toggle ignored: unknown option value");
            return false;
        };

        self.apply_option_toggle(option, checked);
        true
    }

    /// Check or uncheck every option through the "Select All" entry.
    pub fn select_all(&mut self, checked: bool) {
        self.apply_select_all(checked);
    }

    /// Flip the entry identified by `value`, as a checkbox click does.
    ///
    /// Returns `false` when `value` is unknown.
    pub fn click(&mut self, value: &str) -> bool {
        match self.entry(value).map(|entry| entry.checked) {
            Some(checked) => self.toggle_option(value, !checked),
            None => {
                multicheck_warn!(value, "click ignored: unknown option value");
                false
            }
        }
    }

    fn apply_select_all(&mut self, checked: bool) {
        let _perf = PerfSpan::new(span_names::TOGGLE);

        for entry in self.columns.iter_mut().flatten() {
            entry.checked = checked;
        }

        let selection: Vec<CheckOption> = if checked {
            // Already selected options keep their order, the rest follow in
            // option order.
            let mut seen = HashSet::with_capacity(self.options.len());
            self.selected_options()
                .into_iter()
                .chain(self.options.iter().cloned())
                .filter(|option| seen.insert(option.value.clone()))
                .collect()
        } else {
            Vec::new()
        };

        multicheck_debug!(checked, "select all toggled");
        self.publish(selection);
    }

    fn apply_option_toggle(&mut self, option: CheckOption, checked: bool) {
        let _perf = PerfSpan::new(span_names::TOGGLE);

        let mut checked_count = 0;
        for entry in self.columns.iter_mut().flatten() {
            if entry.value == option.value {
                entry.checked = checked;
            }
            if entry.checked && !entry.is_select_all() {
                checked_count += 1;
            }
        }

        let option_count = self.options.len();
        if let Some(select_all) = self
            .columns
            .first_mut()
            .and_then(|column| column.first_mut())
        {
            if !checked {
                select_all.checked = false;
            } else if checked_count == option_count {
                select_all.checked = true;
            }
        }

        let mut selection = self.selected_options();
        match selection.iter().position(|selected| selected.value == option.value) {
            Some(index) => {
                selection.remove(index);
            }
            None => selection.push(option.clone()),
        }

        multicheck_debug!(
            value = %option.value,
            checked,
            checked_count,
            all_checked = self.is_all_checked(),
            "option toggled"
        );
        self.publish(selection);
    }

    /// Remember (uncontrolled) and announce the new selection.
    fn publish(&mut self, selection: Vec<CheckOption>) {
        if self.mode == SelectionMode::Uncontrolled {
            self.selected_values = selection.iter().map(|option| option.value.clone()).collect();
        }

        if self.selection_changed.has_connections() {
            multicheck_trace!(selected = selection.len(), "emitting selection_changed");
            self.selection_changed.emit(selection);
        }
    }

    fn find_option(&self, value: &str) -> Option<&CheckOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Build "Select All" followed by every option, checked from `values`.
fn initial_entries(options: &[CheckOption], values: &[String]) -> Vec<SelectableOption> {
    let selected: HashSet<&str> = values.iter().map(String::as_str).collect();

    let mut entries = Vec::with_capacity(options.len() + 1);
    entries.push(SelectableOption::select_all(values.len() == options.len()));
    entries.extend(
        options
            .iter()
            .map(|option| SelectableOption::from_option(option, selected.contains(option.value.as_str()))),
    );
    entries
}

// Ensure MultiCheckboxes is Send + Sync
static_assertions::assert_impl_all!(MultiCheckboxes: Send, Sync);
