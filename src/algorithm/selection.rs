//! Deterministic extreme-value selection over cells and candidates
//!
//! Every "find the best cell" query in the crate goes through
//! [`select_extreme`]. The preference functions form a total order
//! (score first, then the smaller key), so the result does not depend on
//! evaluation order and the parallel reduction agrees with the sequential
//! scan.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::cmp::Ordering;

/// A scored selection candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<S> {
    /// Tie-break key, smaller wins on equal scores
    pub key: usize,
    /// Score being maximized or minimized
    pub score: S,
}

impl<S> Candidate<S> {
    /// Create a candidate
    pub const fn new(key: usize, score: S) -> Self {
        Self { key, score }
    }
}

/// Keep the higher score, the smaller key on ties
pub fn prefer_highest<S: Ord>(a: Candidate<S>, b: Candidate<S>) -> Candidate<S> {
    match a.score.cmp(&b.score) {
        Ordering::Greater => a,
        Ordering::Less => b,
        Ordering::Equal => prefer_smaller_key(a, b),
    }
}

/// Keep the lower score, the smaller key on ties
pub fn prefer_lowest<S: Ord>(a: Candidate<S>, b: Candidate<S>) -> Candidate<S> {
    match a.score.cmp(&b.score) {
        Ordering::Less => a,
        Ordering::Greater => b,
        Ordering::Equal => prefer_smaller_key(a, b),
    }
}

fn prefer_smaller_key<S>(a: Candidate<S>, b: Candidate<S>) -> Candidate<S> {
    if a.key <= b.key { a } else { b }
}

/// Reduce `0..count` to the preferred candidate
///
/// `candidate` maps a position to `None` when it is not eligible.
/// Returns `None` when no position is eligible.
pub fn select_extreme<S, F>(
    count: usize,
    candidate: F,
    prefer: fn(Candidate<S>, Candidate<S>) -> Candidate<S>,
) -> Option<Candidate<S>>
where
    S: Ord + Send,
    F: Fn(usize) -> Option<Candidate<S>> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        (0..count)
            .into_par_iter()
            .filter_map(candidate)
            .reduce_with(prefer)
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..count).filter_map(candidate).reduce(prefer)
    }
}

/// Evaluate `value` for every position in `0..count`, in order
pub fn map_cells<T, F>(count: usize, value: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        (0..count).into_par_iter().map(value).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..count).map(value).collect()
    }
}
