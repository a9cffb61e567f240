//! Plain-text visualization of a checkbox group's column layout.
//!
//! Use [`LayoutDebug`] to inspect the layout in logs or a terminal:
//!
//! ```
//! use multicheck::{CheckOption, LayoutDebug, MultiCheckboxes, MultiCheckboxesConfig};
//!
//! let options = vec![CheckOption::new("Apple", "apple"), CheckOption::new("Pear", "pear")];
//! let group = MultiCheckboxes::new(MultiCheckboxesConfig::new(options).values(["pear"])).unwrap();
//!
//! let text = LayoutDebug::new(&group).format();
//! assert!(text.contains("[x] Pear"));
//! ```

use std::fmt::{self, Write as FmtWrite};

use crate::controller::MultiCheckboxes;
use crate::option::SelectableOption;

/// Marker style for checked/unchecked entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkerStyle {
    /// `[x]` and `[ ]`.
    #[default]
    Ascii,
    /// Ballot box characters.
    Unicode,
}

impl MarkerStyle {
    fn marker(self, checked: bool) -> &'static str {
        match (self, checked) {
            (Self::Ascii, true) => "[x]",
            (Self::Ascii, false) => "[ ]",
            (Self::Unicode, true) => "\u{2611}",
            (Self::Unicode, false) => "\u{2610}",
        }
    }
}

/// Configuration for layout debug output.
#[derive(Debug, Clone)]
pub struct LayoutFormatOptions {
    /// The marker style.
    pub style: MarkerStyle,
    /// Whether to print each entry's value after its label.
    pub show_values: bool,
    /// Spaces between columns.
    pub column_gap: usize,
}

impl Default for LayoutFormatOptions {
    fn default() -> Self {
        Self {
            style: MarkerStyle::default(),
            show_values: false,
            column_gap: 3,
        }
    }
}

impl LayoutFormatOptions {
    /// Create options for detailed debugging output.
    pub fn detailed() -> Self {
        Self {
            show_values: true,
            ..Default::default()
        }
    }
}

/// Debug utility rendering the label and column layout as text.
#[derive(Debug, Clone)]
pub struct LayoutDebug<'a> {
    group: &'a MultiCheckboxes,
    options: LayoutFormatOptions,
}

impl<'a> LayoutDebug<'a> {
    /// Create a visualizer with default options.
    pub fn new(group: &'a MultiCheckboxes) -> Self {
        Self::with_options(group, LayoutFormatOptions::default())
    }

    /// Create a visualizer with custom options.
    pub fn with_options(group: &'a MultiCheckboxes, options: LayoutFormatOptions) -> Self {
        Self { group, options }
    }

    /// Format the label followed by one line per row.
    pub fn format(&self) -> String {
        let columns: Vec<Vec<String>> = self
            .group
            .columns()
            .iter()
            .map(|column| column.iter().map(|entry| self.cell(entry)).collect())
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .map(|cells| cells.iter().map(|cell| cell.chars().count()).max().unwrap_or(0))
            .collect();
        let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

        let mut output = String::new();
        writeln!(output, "{}", self.group.label()).expect("write to String");

        for row in 0..rows {
            let mut line = String::new();
            for (index, cells) in columns.iter().enumerate() {
                if index > 0 {
                    line.push_str(&" ".repeat(self.options.column_gap));
                }
                let cell = cells.get(row).map(String::as_str).unwrap_or("");
                write!(line, "{cell:<width$}", width = widths[index]).expect("write to String");
            }
            output.push_str(line.trim_end());
            output.push('\n');
        }

        output
    }

    fn cell(&self, entry: &SelectableOption) -> String {
        let marker = self.options.style.marker(entry.checked);
        if self.options.show_values && !entry.is_select_all() {
            format!("{marker} {} ({})", entry.label, entry.value)
        } else {
            format!("{marker} {}", entry.label)
        }
    }
}

impl fmt::Display for LayoutDebug<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MultiCheckboxesConfig;
    use crate::option::CheckOption;

    fn group(columns: usize) -> MultiCheckboxes {
        let options = vec![
            CheckOption::new("aaaa", "0000"),
            CheckOption::new("bbbb", "0001"),
            CheckOption::new("cccc", "0010"),
        ];
        MultiCheckboxes::new(
            MultiCheckboxesConfig::new(options)
                .columns(columns)
                .values(["0001"])
                .label("Letters"),
        )
        .unwrap()
    }

    #[test]
    fn test_single_column_format() {
        let group = group(1);
        let output = LayoutDebug::new(&group).format();

        assert_eq!(
            output,
            "Letters\n[ ] Select All\n[ ] aaaa\n[x] bbbb\n[ ] cccc\n"
        );
    }

    #[test]
    fn test_two_column_format() {
        let group = group(2);
        let output = LayoutDebug::new(&group).format();

        assert_eq!(
            output,
            "Letters\n[ ] Select All   [x] bbbb\n[ ] aaaa         [ ] cccc\n"
        );
    }

    #[test]
    fn test_detailed_format() {
        let group = group(1);
        let output = LayoutDebug::with_options(&group, LayoutFormatOptions::detailed()).to_string();

        assert!(output.contains("[x] bbbb (0001)"));
        assert!(output.contains("[ ] Select All\n"));
    }

    #[test]
    fn test_unicode_markers() {
        let group = group(1);
        let options = LayoutFormatOptions {
            style: MarkerStyle::Unicode,
            ..Default::default()
        };
        let output = LayoutDebug::with_options(&group, options).format();

        assert!(output.contains("\u{2611} bbbb"));
        assert!(output.contains("\u{2610} aaaa"));
    }
}
