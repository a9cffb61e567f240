//! Construction parameters for [`MultiCheckboxes`](crate::MultiCheckboxes).

use crate::option::CheckOption;

/// Label used when none is configured.
pub const DEFAULT_LABEL: &str = "My Multi Checkboxes";

/// Column count used when none is configured.
pub const DEFAULT_COLUMNS: usize = 1;

/// Largest column count the widget is designed for.
///
/// Larger counts are accepted; the layout simply degrades to singleton
/// columns once the count reaches the number of entries.
pub const MAX_RECOMMENDED_COLUMNS: usize = 9;

/// Configuration for a checkbox group.
///
/// Whether `values` is present decides the selection mode for the lifetime
/// of the widget: `Some` makes it controlled (the host owns the selected
/// values), `None` makes it uncontrolled (the widget remembers its own).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiCheckboxesConfig {
    /// All options, in display order. Values are expected to be unique.
    pub options: Vec<CheckOption>,

    /// Number of columns to spread the options over.
    pub columns: usize,

    /// Externally controlled selected values, if any.
    pub values: Option<Vec<String>>,

    /// Heading text shown above the checkboxes.
    pub label: String,
}

impl Default for MultiCheckboxesConfig {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            columns: DEFAULT_COLUMNS,
            values: None,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl MultiCheckboxesConfig {
    /// Create a new config with the given options.
    pub fn new(options: impl IntoIterator<Item = CheckOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Set the number of columns.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Supply externally controlled selected values (controlled mode).
    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the heading text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Whether this config produces a controlled widget.
    pub fn is_controlled(&self) -> bool {
        self.values.is_some()
    }
}
