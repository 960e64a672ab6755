//! Parallel evaluation of the top-level search branches
//!
//! The subtrees below the root candidates share no state, so each one runs
//! as an ordinary sequential search on the rayon pool. Results are collected
//! eagerly; rayon's ordered collect keeps the sequential solution order.

use crate::algorithm::exact_cover::{ExactCovers, Solution, exact_covers};
use crate::io::error::Result;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Collect every exact cover, searching root branches in parallel
///
/// # Errors
///
/// Returns [`crate::CoverError::InvalidInput`] when validation is requested
/// and a choice is not a subset of `universe`
pub fn par_exact_covers<'a, T>(
    universe: &'a BTreeSet<T>,
    family: &'a [BTreeSet<T>],
    validate: bool,
) -> Result<Vec<Solution<'a, T>>>
where
    T: Ord + Sync,
{
    let parts = exact_covers(universe, family, validate)?.split();
    log::debug!("searching {} root branches in parallel", parts.len());

    Ok(parts
        .into_par_iter()
        .flat_map_iter(|part: ExactCovers<'a, T>| part)
        .collect())
}

/// Count every exact cover, searching root branches in parallel
///
/// # Errors
///
/// Returns [`crate::CoverError::InvalidInput`] when validation is requested
/// and a choice is not a subset of `universe`
pub fn par_count_covers<T>(
    universe: &BTreeSet<T>,
    family: &[BTreeSet<T>],
    validate: bool,
) -> Result<usize>
where
    T: Ord + Sync,
{
    let parts = exact_covers(universe, family, validate)?.split();
    Ok(parts.into_par_iter().map(Iterator::count).sum())
}
