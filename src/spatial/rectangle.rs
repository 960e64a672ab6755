//! Rectangle tiling expressed as an exact cover problem
//!
//! The universe holds one constraint per board cell and one per piece. A
//! choice is one orientation of one piece at one position: the piece's name
//! plus the cells it occupies. An exact cover therefore fills every cell once
//! and uses every piece once.

use crate::algorithm::exact_cover::ExactCovers;
use crate::io::configuration::{MIN_BOARD_SIDE, PENTOMINO_AREA};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::polyomino::{Polyomino, pentominoes};
use crate::spatial::tiling::Tiling;
use std::collections::BTreeSet;

/// Constraint of a rectangle tiling problem
///
/// Pieces sort before cells, so a choice's first element is its piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Item {
    /// The named piece has been placed
    Piece(char),
    /// The board cell is covered
    Cell {
        /// Board row, from the top
        row: usize,
        /// Board column, from the left
        col: usize,
    },
}

/// Every placement of every orientation of `pieces` inside the board
///
/// Placements are listed piece by piece, then orientation by orientation,
/// then by top-left position in row-major order.
pub fn placements(rows: usize, cols: usize, pieces: &[Polyomino]) -> Vec<BTreeSet<Item>> {
    let mut choices = Vec::new();
    for piece in pieces {
        for variation in piece.variations() {
            let (height, width) = variation.extent();
            if height > rows || width > cols {
                continue;
            }
            for top in 0..=rows - height {
                for left in 0..=cols - width {
                    let cells = variation.cells().iter().map(|&(r, c)| Item::Cell {
                        row: top + r as usize,
                        col: left + c as usize,
                    });
                    choices.push(
                        std::iter::once(Item::Piece(piece.name()))
                            .chain(cells)
                            .collect(),
                    );
                }
            }
        }
    }
    choices
}

/// Number of cells of a `rows` x `cols` board
fn board_cells(rows: usize, cols: usize) -> Result<usize> {
    rows.checked_mul(cols)
        .ok_or_else(|| invalid_parameter("size", &format!("{rows}x{cols}"), &"board area overflows"))
}

/// A board to be tiled with a fixed set of pieces, each used exactly once
#[derive(Clone, Debug)]
pub struct RectangleProblem {
    rows: usize,
    cols: usize,
    universe: BTreeSet<Item>,
    choices: Vec<BTreeSet<Item>>,
}

impl RectangleProblem {
    /// Set up the tiling of a `rows` x `cols` board with `pieces`
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty, if piece names repeat, or if
    /// the pieces' total area differs from the board area
    pub fn new(rows: usize, cols: usize, pieces: &[Polyomino]) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "size",
                &format!("{rows}x{cols}"),
                &"board needs at least one row and one column",
            ));
        }

        let names: BTreeSet<char> = pieces.iter().map(Polyomino::name).collect();
        if names.len() != pieces.len() {
            return Err(invalid_parameter(
                "pieces",
                &pieces.iter().map(Polyomino::name).collect::<String>(),
                &"piece names must be distinct",
            ));
        }

        let cells = board_cells(rows, cols)?;
        let area: usize = pieces.iter().map(Polyomino::area).sum();
        if area != cells {
            return Err(invalid_parameter(
                "size",
                &format!("{rows}x{cols}"),
                &format!("pieces cover {area} cells"),
            ));
        }

        let universe: BTreeSet<Item> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Item::Cell { row, col }))
            .chain(names.into_iter().map(Item::Piece))
            .collect();
        let choices = placements(rows, cols, pieces);
        log::debug!(
            "{rows}x{cols} board: {} constraints, {} placements",
            universe.len(),
            choices.len()
        );

        Ok(Self {
            rows,
            cols,
            universe,
            choices,
        })
    }

    /// Set up the tiling of a 60-cell board with the twelve pentominoes
    ///
    /// # Errors
    ///
    /// Returns an error unless both sides are at least 3 and the area is 60
    pub fn pentomino(rows: usize, cols: usize) -> Result<Self> {
        if rows < MIN_BOARD_SIDE
            || cols < MIN_BOARD_SIDE
            || board_cells(rows, cols)? != PENTOMINO_AREA
        {
            return Err(invalid_parameter(
                "size",
                &format!("{rows}x{cols}"),
                &format!(
                    "pentomino boards need sides of at least {MIN_BOARD_SIDE} and {PENTOMINO_AREA} cells"
                ),
            ));
        }
        Self::new(rows, cols, &pentominoes())
    }

    /// Number of board rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of board columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// All cell and piece constraints
    pub const fn universe(&self) -> &BTreeSet<Item> {
        &self.universe
    }

    /// All piece placements
    pub fn choices(&self) -> &[BTreeSet<Item>] {
        &self.choices
    }

    /// Lazily enumerate every tiling of the board
    ///
    /// Placements are subsets of the universe by construction, so the family
    /// is not validated again.
    pub fn tilings(&self) -> impl Iterator<Item = Tiling> + '_ {
        ExactCovers::unvalidated(&self.universe, &self.choices)
            .map(|cover| Tiling::from_cover(&cover))
    }
}
