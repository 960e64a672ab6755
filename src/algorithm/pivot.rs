//! Minimum-remaining-values pivot selection
//!
//! The search always branches on the constraint covered by the fewest
//! remaining choices, so dead branches show up as early as possible.

use crate::io::error::{CoverError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Find the universe element covered by the fewest choices
///
/// Returns the element together with the number of choices covering it.
/// Ties go to the smallest element under `Ord`. Elements of a choice that are
/// not part of the universe are ignored.
///
/// Counting is done in one pass over the choices rather than one pass per
/// element, which keeps the cost proportional to the total choice size.
///
/// # Errors
///
/// Returns [`CoverError::EmptyUniverse`] if `universe` yields no elements
pub fn least_common_element<'u, 'c, T, U, C>(universe: U, choices: C) -> Result<(&'u T, usize)>
where
    T: Ord + 'u + 'c,
    U: IntoIterator<Item = &'u T>,
    C: IntoIterator<Item = &'c BTreeSet<T>>,
{
    let mut counts: BTreeMap<&'u T, usize> = universe.into_iter().map(|x| (x, 0)).collect();
    if counts.is_empty() {
        return Err(CoverError::EmptyUniverse);
    }

    for choice in choices {
        for element in choice {
            if let Some(count) = counts.get_mut(element) {
                *count += 1;
            }
        }
    }

    counts
        .into_iter()
        .min_by_key(|&(_, count)| count)
        .ok_or(CoverError::EmptyUniverse)
}
