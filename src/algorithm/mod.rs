/// Fixed-size bitset of usable choices
pub mod bitset;
/// Lazy exact cover enumeration
pub mod exact_cover;
/// Parallel evaluation of the top-level branches
#[cfg(feature = "parallel")]
pub mod parallel;
/// Minimum-remaining-values pivot selection
pub mod pivot;
