//! Core systems for multicheck.
//!
//! This crate provides the foundational pieces the checkbox-group widget is
//! built on:
//!
//! - **Partitioner**: Even, order-preserving splitting of a sequence into columns
//! - **Signal/Slot System**: Observer-style change notification
//! - **Errors**: The crate-wide error type and `Result` alias
//! - **Logging**: `tracing` targets, span names and helper macros
//!
//! # Partition Example
//!
//! ```
//! use multicheck_core::{partition, MultiCheckError};
//!
//! let columns = partition(10, &["a", "b", "c"]).unwrap();
//! assert_eq!(columns, vec![vec!["a"], vec!["b"], vec!["c"]]);
//!
//! let err = partition(0, &["a"]).unwrap_err();
//! assert_eq!(err, MultiCheckError::InvalidArgument { sections: 0 });
//! ```
//!
//! # Signal Example
//!
//! ```
//! use multicheck_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod partition;
pub mod signal;

pub use error::{MultiCheckError, Result};
pub use logging::PerfSpan;
pub use partition::{partition, partition_vec, section_sizes};
pub use signal::{ConnectionId, Signal};
