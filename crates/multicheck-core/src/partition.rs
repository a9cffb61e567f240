//! Even partitioning of ordered sequences into column sections.
//!
//! The partitioner splits a sequence into contiguous groups whose sizes
//! differ by at most one. Larger groups always come first, and items never
//! change their relative order, so concatenating the sections reproduces the
//! input exactly.
//!
//! # Sizing Rules
//!
//! - `sections == 0` is rejected with [`MultiCheckError::InvalidArgument`].
//! - `sections == 1` or an empty input yields one section holding everything
//!   (a single empty section for empty input).
//! - `sections >= len` yields `len` singleton sections. Requested sections
//!   beyond the item count are dropped.
//! - Otherwise the first `len % sections` sections hold `len / sections + 1`
//!   items and the rest hold `len / sections`.
//!
//! # Example
//!
//! ```
//! use multicheck_core::partition;
//!
//! let columns = partition(3, &[1, 2, 3, 4, 5, 6, 7]).unwrap();
//! assert_eq!(columns, vec![vec![1, 2, 3], vec![4, 5], vec![6, 7]]);
//! ```

use crate::error::{MultiCheckError, Result};
use crate::logging::targets;

/// Compute the size of every section for a sequence of `len` items.
///
/// The returned sizes always sum to `len`. An empty sequence produces a
/// single zero-sized section.
pub fn section_sizes(sections: usize, len: usize) -> Result<Vec<usize>> {
    if sections < 1 {
        return Err(MultiCheckError::invalid_sections(sections));
    }

    if sections == 1 || len == 0 {
        return Ok(vec![len]);
    }

    if sections >= len {
        return Ok(vec![1; len]);
    }

    let base = len / sections;
    let extra = len % sections;

    Ok((0..sections)
        .map(|i| if i < extra { base + 1 } else { base })
        .collect())
}

/// Split `items` into `sections` near-equal contiguous groups.
///
/// Items are cloned into the output; use [`partition_vec`] to move them
/// instead.
pub fn partition<T: Clone>(sections: usize, items: &[T]) -> Result<Vec<Vec<T>>> {
    let sizes = section_sizes(sections, items.len())?;
    tracing::trace!(
        target: targets::PARTITION,
        requested = sections,
        produced = sizes.len(),
        len = items.len(),
        "partitioning slice"
    );

    let mut start = 0;
    Ok(sizes
        .into_iter()
        .map(|size| {
            let end = start + size;
            let section = items[start..end].to_vec();
            start = end;
            section
        })
        .collect())
}

/// Split an owned vector into `sections` near-equal contiguous groups.
///
/// Same contract as [`partition`], without requiring `T: Clone`.
pub fn partition_vec<T>(sections: usize, items: Vec<T>) -> Result<Vec<Vec<T>>> {
    let sizes = section_sizes(sections, items.len())?;
    tracing::trace!(
        target: targets::PARTITION,
        requested = sections,
        produced = sizes.len(),
        len = items.len(),
        "partitioning vec"
    );

    let mut remaining = items.into_iter();
    Ok(sizes
        .into_iter()
        .map(|size| remaining.by_ref().take(size).collect())
        .collect())
}
