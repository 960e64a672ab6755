//! Tilings recovered from exact covers of a rectangle problem

use crate::algorithm::exact_cover::Solution;
use crate::spatial::rectangle::Item;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Marker for board cells no piece covers
pub const EMPTY_CELL: char = '.';

/// Cells occupied by each piece, keyed by piece name
///
/// Serializes as `{ "F": [[row, col], ...], ... }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tiling {
    pieces: BTreeMap<String, Vec<(usize, usize)>>,
}

impl Tiling {
    /// Split every chosen placement into its piece name and its cells
    ///
    /// A placement without a piece constraint carries no name and is skipped.
    pub fn from_cover(cover: &Solution<'_, Item>) -> Self {
        let mut pieces = BTreeMap::new();
        for placement in cover.iter() {
            let Some(name) = placement.iter().find_map(|item| match item {
                Item::Piece(name) => Some(*name),
                Item::Cell { .. } => None,
            }) else {
                continue;
            };
            let cells: Vec<(usize, usize)> = placement
                .iter()
                .filter_map(|item| match *item {
                    Item::Cell { row, col } => Some((row, col)),
                    Item::Piece(_) => None,
                })
                .collect();
            pieces.insert(name.to_string(), cells);
        }
        Self { pieces }
    }

    /// Iterate pieces and their cells in name order
    pub fn iter(&self) -> impl Iterator<Item = (char, &[(usize, usize)])> + '_ {
        self.pieces.iter().filter_map(|(name, cells)| {
            name.chars().next().map(|first| (first, cells.as_slice()))
        })
    }

    /// Number of placed pieces
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// True if no piece is placed
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Piece name per board cell; cells outside the board are ignored
    pub fn board(&self, rows: usize, cols: usize) -> Array2<char> {
        let mut board = Array2::from_elem((rows, cols), EMPTY_CELL);
        for (name, cells) in self.iter() {
            for &(row, col) in cells {
                if let Some(cell) = board.get_mut((row, col)) {
                    *cell = name;
                }
            }
        }
        board
    }

    /// Console view: one line per row, piece names separated by spaces
    pub fn render(&self, rows: usize, cols: usize) -> String {
        self.board(rows, cols)
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
