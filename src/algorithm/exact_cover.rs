//! Lazy set-based exact cover search (Knuth's Algorithm X)
//!
//! Given a universe `X` and a family `S` of subsets of `X`, [`exact_covers`]
//! enumerates every sub-collection of `S` that partitions `X`. The search is
//! an explicit stack of frames. Each frame owns the universe still to be
//! covered and the choices still usable, both derived from the parent frame
//! without touching it, so backtracking never has to undo anything.
//!
//! Iteration order is fixed: universe elements follow `T: Ord` and choices
//! follow their position in the family. Two runs over the same input produce
//! the same solutions in the same order.

use crate::algorithm::bitset::ChoiceBitset;
use crate::algorithm::pivot::least_common_element;
use crate::io::error::{CoverError, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::iter::FusedIterator;

/// One exact cover: the chosen sets in the order they were committed
pub struct Solution<'a, T> {
    family: &'a [BTreeSet<T>],
    indices: Vec<usize>,
}

impl<'a, T> Solution<'a, T> {
    pub(crate) const fn new(family: &'a [BTreeSet<T>], indices: Vec<usize>) -> Self {
        Self { family, indices }
    }

    /// Positions of the chosen sets within the family
    pub const fn indices(&self) -> &[usize] {
        self.indices.as_slice()
    }

    /// Consume the solution, keeping only the family positions
    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// Number of chosen sets
    pub const fn len(&self) -> usize {
        self.indices.len()
    }

    /// True for the cover of the empty universe
    pub const fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate the chosen sets, borrowed from the family
    pub fn iter(&self) -> impl Iterator<Item = &'a BTreeSet<T>> + '_ {
        let family = self.family;
        self.indices.iter().filter_map(move |&index| family.get(index))
    }

    /// Chosen sets in commit order
    pub fn sets(&self) -> Vec<&'a BTreeSet<T>> {
        self.iter().collect()
    }
}

impl<T> Clone for Solution<'_, T> {
    fn clone(&self) -> Self {
        Self {
            family: self.family,
            indices: self.indices.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Solution<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Counters describing how much of the search tree has been visited
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Frames pushed, the root included
    pub frames_opened: usize,
    /// Frames whose pivot had no covering choice
    pub dead_ends: usize,
    /// Solutions handed to the consumer
    pub solutions: usize,
}

enum Frame<'a, T> {
    /// Nothing left to cover; the current path is a solution
    Accept,
    /// Candidates covering this frame's pivot, tried in order from `cursor`
    Branch {
        universe: BTreeSet<&'a T>,
        remaining: ChoiceBitset,
        candidates: Vec<usize>,
        cursor: usize,
    },
}

/// Iterator over every exact cover of a universe
///
/// Created by [`exact_covers`]. Each call to `next` resumes the search where
/// the previous solution was found and stops as soon as the next one is
/// complete. Dropping the iterator abandons the suspended frames.
pub struct ExactCovers<'a, T> {
    family: &'a [BTreeSet<T>],
    stack: Vec<Frame<'a, T>>,
    /// Choices committed by the frames below the top of the stack
    path: Vec<usize>,
    stats: SearchStats,
}

impl<'a, T: Ord> ExactCovers<'a, T> {
    /// Start a search with `prefix` already committed
    ///
    /// `universe` and `remaining` must describe the state left after the
    /// prefix choices were taken.
    fn resume(
        family: &'a [BTreeSet<T>],
        universe: BTreeSet<&'a T>,
        remaining: ChoiceBitset,
        prefix: Vec<usize>,
    ) -> Self {
        let mut search = Self {
            family,
            stack: Vec::new(),
            path: prefix,
            stats: SearchStats::default(),
        };
        search.open(universe, remaining);
        search
    }

    /// Start a search without checking that choices are subsets of `universe`
    pub(crate) fn unvalidated(universe: &'a BTreeSet<T>, family: &'a [BTreeSet<T>]) -> Self {
        Self::resume(
            family,
            universe.iter().collect(),
            ChoiceBitset::all(family.len()),
            Vec::new(),
        )
    }

    /// Counters for the work done so far
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    fn open(&mut self, universe: BTreeSet<&'a T>, remaining: ChoiceBitset) {
        self.stats.frames_opened += 1;
        let frame = open_frame(self.family, universe, remaining);
        if let Frame::Branch {
            candidates,
            remaining: alive,
            ..
        } = &frame
            && candidates.is_empty()
        {
            self.stats.dead_ends += 1;
            log::trace!("dead end at depth {} with {alive}", self.path.len());
        }
        self.stack.push(frame);
    }

    /// Split a fresh search into one search per candidate of its root frame
    ///
    /// Concatenating the solutions of the parts, in order, gives the
    /// solutions of the whole search. A root without branching (empty
    /// universe) comes back as the single part.
    #[cfg(feature = "parallel")]
    pub(crate) fn split(self) -> Vec<Self> {
        let family = self.family;
        match self.stack.first() {
            Some(Frame::Branch {
                universe,
                remaining,
                candidates,
                ..
            }) if self.stack.len() == 1 => candidates
                .iter()
                .filter_map(|&index| {
                    let choice = family.get(index)?;
                    let (next_universe, next_remaining) =
                        commit(family, universe, remaining, choice);
                    let mut prefix = self.path.clone();
                    prefix.push(index);
                    Some(Self::resume(family, next_universe, next_remaining, prefix))
                })
                .collect(),
            _ => vec![self],
        }
    }

    fn close(&mut self) {
        self.stack.pop();
        if !self.stack.is_empty() {
            self.path.pop();
        }
    }
}

/// Build the frame for a universe/choices state
///
/// An empty universe accepts. Otherwise the candidates are the usable
/// choices containing the least covered element; an empty candidate list
/// marks a dead end.
fn open_frame<'a, T: Ord>(
    family: &'a [BTreeSet<T>],
    universe: BTreeSet<&'a T>,
    remaining: ChoiceBitset,
) -> Frame<'a, T> {
    if universe.is_empty() {
        return Frame::Accept;
    }

    let usable = remaining.iter().filter_map(|index| family.get(index));
    let candidates = match least_common_element(universe.iter().copied(), usable) {
        Ok((pivot, count)) => {
            let candidates: Vec<usize> = remaining
                .iter()
                .filter(|&index| family.get(index).is_some_and(|choice| choice.contains(pivot)))
                .collect();
            debug_assert_eq!(candidates.len(), count);
            candidates
        }
        // Unreachable with a non-empty universe; never accept on a failed pivot
        Err(error) => {
            log::debug!("pivot selection failed: {error}");
            Vec::new()
        }
    };

    Frame::Branch {
        universe,
        remaining,
        candidates,
        cursor: 0,
    }
}

/// State of the search after committing `choice` from a branch frame
fn commit<'a, T: Ord>(
    family: &'a [BTreeSet<T>],
    universe: &BTreeSet<&'a T>,
    remaining: &ChoiceBitset,
    choice: &BTreeSet<T>,
) -> (BTreeSet<&'a T>, ChoiceBitset) {
    let next_universe = universe
        .iter()
        .copied()
        .filter(|element| !choice.contains(*element))
        .collect();
    let next_remaining = remaining.filtered(|index| {
        family
            .get(index)
            .is_some_and(|other| other.is_disjoint(choice))
    });
    (next_universe, next_remaining)
}

impl<'a, T: Ord> Iterator for ExactCovers<'a, T> {
    type Item = Solution<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let family = self.family;
            let descend = match self.stack.last_mut()? {
                Frame::Accept => {
                    let solution = Solution::new(family, self.path.clone());
                    self.close();
                    self.stats.solutions += 1;
                    return Some(solution);
                }
                Frame::Branch {
                    universe,
                    remaining,
                    candidates,
                    cursor,
                } => {
                    let next = candidates
                        .get(*cursor)
                        .and_then(|&index| family.get(index).map(|choice| (index, choice)));
                    *cursor += 1;
                    next.map(|(index, choice)| {
                        let (next_universe, next_remaining) =
                            commit(family, universe, remaining, choice);
                        (index, next_universe, next_remaining)
                    })
                }
            };

            match descend {
                Some((index, next_universe, next_remaining)) => {
                    self.path.push(index);
                    self.open(next_universe, next_remaining);
                }
                // Candidates exhausted: backtrack into the parent frame
                None => self.close(),
            }
        }
    }
}

impl<T: Ord> FusedIterator for ExactCovers<'_, T> {}

/// Check that every choice is a subset of the universe
///
/// # Errors
///
/// Returns [`CoverError::InvalidInput`] naming the first choice that
/// contains an element outside `universe`
pub fn validate_family<T: Ord>(universe: &BTreeSet<T>, family: &[BTreeSet<T>]) -> Result<()> {
    match family.iter().position(|choice| !choice.is_subset(universe)) {
        Some(choice) => {
            log::debug!("choice {choice} reaches outside the universe");
            Err(CoverError::InvalidInput { choice })
        }
        None => Ok(()),
    }
}

/// Enumerate every partition of `universe` into sets of `family`
///
/// With `validate` set the family is checked once, up front, and nothing is
/// searched if a choice is not a subset of the universe. Without it, choices
/// reaching outside the universe are the caller's responsibility: they still
/// never appear in a solution together with an overlapping choice, but the
/// outside elements are simply never required.
///
/// The returned iterator is lazy: no solution is computed before it is
/// requested. An empty universe has exactly one cover, the empty one. An
/// input without covers yields nothing; that is not an error.
///
/// # Errors
///
/// Returns [`CoverError::InvalidInput`] when validation is requested and a
/// choice is not a subset of `universe`
///
/// # Examples
///
/// ```
/// use pentacover::algorithm::exact_cover::exact_covers;
/// use std::collections::BTreeSet;
///
/// let universe = BTreeSet::from([1, 2]);
/// let family = vec![BTreeSet::from([1]), BTreeSet::from([2]), BTreeSet::from([1, 2])];
///
/// let covers: Vec<Vec<usize>> = exact_covers(&universe, &family, true)?
///     .map(|cover| cover.into_indices())
///     .collect();
/// assert_eq!(covers, vec![vec![0, 1], vec![2]]);
/// # Ok::<(), pentacover::CoverError>(())
/// ```
pub fn exact_covers<'a, T: Ord>(
    universe: &'a BTreeSet<T>,
    family: &'a [BTreeSet<T>],
    validate: bool,
) -> Result<ExactCovers<'a, T>> {
    if validate {
        validate_family(universe, family)?;
    }
    log::debug!(
        "exact cover search over {} elements and {} choices",
        universe.len(),
        family.len()
    );

    Ok(ExactCovers::unvalidated(universe, family))
}
