//! Element-wise mapping over value vectors.
//!
//! With the `parallel` feature, vectors of at least [`PARALLEL_THRESHOLD`](crate::constants::PARALLEL_THRESHOLD)
//! elements are mapped on the rayon pool. Results keep their input order and
//! are identical to the sequential path.

use crate::TimeResult;

#[cfg(feature = "parallel")]
use crate::constants::PARALLEL_THRESHOLD;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Applies `f` to every element, stopping at the first error.
#[cfg(feature = "parallel")]
pub(crate) fn try_map<T, U, F>(items: &[T], f: F) -> TimeResult<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> TimeResult<U> + Sync + Send,
{
    if items.len() >= PARALLEL_THRESHOLD {
        items.par_iter().map(f).collect()
    } else {
        items.iter().map(f).collect()
    }
}

/// Applies `f` to every element, stopping at the first error.
#[cfg(not(feature = "parallel"))]
pub(crate) fn try_map<T, U, F>(items: &[T], f: F) -> TimeResult<Vec<U>>
where
    F: Fn(&T) -> TimeResult<U>,
{
    items.iter().map(f).collect()
}
