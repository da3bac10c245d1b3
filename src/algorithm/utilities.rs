//! # Utilities
//!
//! Helper functions for algorithms.

/// Find the first candidate with a value strictly below all values before it, and below `bound`.
///
/// Ties are resolved in favor of the candidate that comes first, because a later candidate only
/// replaces the current one when it is strictly smaller. Values that are not comparable (`NaN`)
/// are never selected.
///
/// # Arguments
///
/// * `candidates`: `(index, value)` tuples in scan order.
/// * `bound`: Only values strictly smaller than this are considered.
///
/// # Return value
///
/// The index and value of the first minimum, if any value was below `bound`.
pub(crate) fn first_minimum_below(
    candidates: impl IntoIterator<Item = (usize, f64)>,
    bound: f64,
) -> Option<(usize, f64)> {
    let mut minimum = None;
    let mut current_bound = bound;
    for (index, value) in candidates {
        if value < current_bound {
            current_bound = value;
            minimum = Some((index, value));
        }
    }

    minimum
}
