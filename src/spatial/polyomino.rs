//! Polyomino shapes and their rotations and reflections
//!
//! Cells are `(row, col)` pairs. Every shape is kept normalized: shifted so
//! that its smallest row and smallest column are both zero, which makes two
//! placements of the same orientation compare equal.

use std::collections::BTreeSet;
use std::fmt;

/// A cell offset within a shape, `(row, col)`
pub type Cell = (i32, i32);

/// Named set of unit squares
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polyomino {
    name: char,
    cells: BTreeSet<Cell>,
}

impl Polyomino {
    /// Create a normalized polyomino from arbitrary cell offsets
    pub fn new(name: char, cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            name,
            cells: normalize(cells.into_iter().collect()),
        }
    }

    /// Piece name, used as the piece's constraint in tiling problems
    pub const fn name(&self) -> char {
        self.name
    }

    /// Normalized cells of the shape
    pub const fn cells(&self) -> &BTreeSet<Cell> {
        &self.cells
    }

    /// Number of unit squares
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Height and width of the bounding box
    pub fn extent(&self) -> (usize, usize) {
        let rows = self.cells.iter().map(|&(r, _)| r).max().map_or(0, |r| r + 1);
        let cols = self.cells.iter().map(|&(_, c)| c).max().map_or(0, |c| c + 1);
        (rows as usize, cols as usize)
    }

    /// Rotate by 90° anticlockwise
    #[must_use]
    pub fn rotate(&self) -> Self {
        Self::new(self.name, self.cells.iter().map(|&(r, c)| (-c, r)))
    }

    /// Reflect across the horizontal axis
    #[must_use]
    pub fn reflect(&self) -> Self {
        Self::new(self.name, self.cells.iter().map(|&(r, c)| (-r, c)))
    }

    /// All distinct orientations, the shape itself first
    ///
    /// Rotations of the shape come first, then rotations of its mirror image
    /// that were not seen yet.
    pub fn variations(&self) -> Vec<Self> {
        let mut variations: Vec<Self> = Vec::new();
        for start in [self.clone(), self.reflect()] {
            let mut variation = start;
            while !variations.contains(&variation) {
                let next = variation.rotate();
                variations.push(variation);
                variation = next;
            }
        }
        variations
    }
}

impl fmt::Display for Polyomino {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.extent();
        for r in 0..rows as i32 {
            let line: String = (0..cols as i32)
                .map(|c| if self.cells.contains(&(r, c)) { 'X' } else { ' ' })
                .collect();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

fn normalize(cells: BTreeSet<Cell>) -> BTreeSet<Cell> {
    let min_row = cells.iter().map(|&(r, _)| r).min().unwrap_or(0);
    let min_col = cells.iter().map(|&(_, c)| c).min().unwrap_or(0);
    cells
        .into_iter()
        .map(|(r, c)| (r - min_row, c - min_col))
        .collect()
}

const PENTOMINO_SHAPES: [(char, [Cell; 5]); 12] = [
    ('F', [(0, 1), (0, 2), (1, 1), (1, 0), (2, 1)]),
    ('I', [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
    ('L', [(0, 0), (1, 0), (2, 0), (3, 0), (3, 1)]),
    ('N', [(0, 0), (0, 1), (1, 1), (1, 2), (1, 3)]),
    ('P', [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]),
    ('T', [(0, 0), (0, 1), (0, 2), (1, 1), (2, 1)]),
    ('U', [(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]),
    ('V', [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]),
    ('W', [(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]),
    ('X', [(0, 1), (1, 1), (2, 1), (1, 0), (1, 2)]),
    ('Y', [(1, 0), (0, 1), (1, 1), (2, 1), (3, 1)]),
    ('Z', [(0, 0), (0, 1), (1, 1), (2, 1), (2, 2)]),
];

/// The twelve pentominoes, named F I L N P T U V W X Y Z
pub fn pentominoes() -> Vec<Polyomino> {
    PENTOMINO_SHAPES
        .iter()
        .map(|&(name, cells)| Polyomino::new(name, cells))
        .collect()
}
