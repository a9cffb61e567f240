//! A multi-column checkbox group with a "Select All" control.
//!
//! `multicheck` models the state of a checkbox group independently of any
//! rendering technology:
//!
//! - **Options**: label/value pairs, see [`CheckOption`]
//! - **Columns**: options spread evenly over columns, top to bottom
//! - **Select All**: a synthetic first entry mirroring whether every option is checked
//! - **Controlled/Uncontrolled**: the host or the widget owns the selected values
//! - **Notifications**: the [`selection_changed`](MultiCheckboxes::selection_changed) signal
//!
//! # Example
//!
//! ```
//! use multicheck::{CheckOption, MultiCheckboxes, MultiCheckboxesConfig};
//! use std::sync::{Arc, Mutex};
//!
//! let options = vec![
//!     CheckOption::new("Red", "red"),
//!     CheckOption::new("Green", "green"),
//!     CheckOption::new("Blue", "blue"),
//! ];
//!
//! let latest = Arc::new(Mutex::new(Vec::new()));
//! let latest_clone = latest.clone();
//!
//! let mut group = MultiCheckboxes::new(MultiCheckboxesConfig::new(options).columns(2))?
//!     .with_on_change(move |selected| {
//!         *latest_clone.lock().unwrap() = selected.clone();
//!     });
//!
//! group.toggle_option("blue", true);
//! group.toggle_option("red", true);
//!
//! let values: Vec<String> = latest.lock().unwrap().iter().map(|o| o.value.clone()).collect();
//! assert_eq!(values, ["blue", "red"]);
//! # Ok::<(), multicheck::MultiCheckError>(())
//! ```

pub mod config;
pub mod controller;
pub mod debug;
pub mod option;

pub use config::{DEFAULT_COLUMNS, DEFAULT_LABEL, MAX_RECOMMENDED_COLUMNS, MultiCheckboxesConfig};
pub use controller::{MultiCheckboxes, SelectionMode};
pub use debug::{LayoutDebug, LayoutFormatOptions, MarkerStyle};
pub use option::{CheckOption, SELECT_ALL_LABEL, SELECT_ALL_VALUE, SelectableOption};

pub use multicheck_core::{ConnectionId, MultiCheckError, Result, Signal, partition};
