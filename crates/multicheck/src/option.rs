//! Option types shown by the checkbox group.

/// Reserved value of the synthetic "Select All" entry.
///
/// Real option values must never use this string.
pub const SELECT_ALL_VALUE: &str = "__UNIQUE__SELECT__ALL__VALUE__";

/// Label of the synthetic "Select All" entry.
pub const SELECT_ALL_LABEL: &str = "Select All";

/// A selectable item: a display label and the value that identifies it.
///
/// Values are expected to be unique within one option set, and so are labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckOption {
    /// Text shown next to the checkbox.
    pub label: String,
    /// Identity of the option.
    pub value: String,
}

impl CheckOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// An option together with its current checked state.
///
/// These entries make up the column layout owned by
/// [`MultiCheckboxes`](crate::MultiCheckboxes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectableOption {
    /// Text shown next to the checkbox.
    pub label: String,
    /// Identity of the option.
    pub value: String,
    /// Whether the checkbox is checked.
    pub checked: bool,
}

impl SelectableOption {
    /// Create an entry for `option` with the given checked state.
    pub fn from_option(option: &CheckOption, checked: bool) -> Self {
        Self {
            label: option.label.clone(),
            value: option.value.clone(),
            checked,
        }
    }

    /// Create the synthetic "Select All" entry.
    pub fn select_all(checked: bool) -> Self {
        Self {
            label: SELECT_ALL_LABEL.to_string(),
            value: SELECT_ALL_VALUE.to_string(),
            checked,
        }
    }

    /// Whether this is the synthetic "Select All" entry.
    pub fn is_select_all(&self) -> bool {
        self.value == SELECT_ALL_VALUE
    }

    /// The plain option this entry represents.
    pub fn to_option(&self) -> CheckOption {
        CheckOption::new(self.label.clone(), self.value.clone())
    }
}
