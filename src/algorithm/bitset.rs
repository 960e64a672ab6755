use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset tracking which choices of a family are still usable
///
/// Bits are indexed by the choice's position in the family, so iterating the
/// set visits choices in family order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceBitset {
    bits: BitVec,
}

impl ChoiceBitset {
    /// Create a bitset with no choices present
    pub fn new(family_len: usize) -> Self {
        Self {
            bits: bitvec![0; family_len],
        }
    }

    /// Create a bitset containing every choice of the family
    pub fn all(family_len: usize) -> Self {
        Self {
            bits: bitvec![1; family_len],
        }
    }

    /// Count choices in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate the present choice indices in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Create a new bitset keeping only the choices accepted by `keep`
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(usize) -> bool) -> Self {
        let mut result = Self::new(self.bits.len());
        for choice in self.bits.iter_ones() {
            if keep(choice) {
                result.bits.set(choice, true);
            }
        }
        result
    }

    /// Extract all choice indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

impl fmt::Display for ChoiceBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChoiceBitset({} choices: {:?})", self.count(), self.to_vec())
    }
}
