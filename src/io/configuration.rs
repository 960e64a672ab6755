//! Board constants, output naming and the piece colour palette

use std::time::Duration;

// Default board for the `tile` command
/// Default number of board rows
pub const DEFAULT_ROWS: usize = 6;
/// Default number of board columns
pub const DEFAULT_COLS: usize = 10;

// Twelve pentominoes of five cells each
/// Area every pentomino rectangle has to match
pub const PENTOMINO_AREA: usize = 60;
/// Smallest side a pentomino rectangle can have
pub const MIN_BOARD_SIDE: usize = 3;

// Output settings
/// Directory used when an export flag is given without a value
pub const DEFAULT_OUTPUT_DIR: &str = "data";
/// Edge length of one board cell in exported images
pub const CELL_PIXELS: u32 = 20;
/// Colour used for board cells not covered by any piece
pub const EMPTY_CELL_COLOR: [u8; 4] = [0, 0, 0, 0];

// Progress display settings
/// Interval between spinner redraws
pub const SPINNER_TICK: Duration = Duration::from_millis(120);

/// Piece name to RGBA colour, one entry per pentomino
pub const PIECE_COLORS: [(char, [u8; 4]); 12] = [
    ('F', [255, 0, 0, 255]),
    ('I', [255, 128, 0, 255]),
    ('L', [255, 255, 0, 255]),
    ('N', [128, 255, 0, 255]),
    ('P', [0, 255, 0, 255]),
    ('T', [0, 255, 128, 255]),
    ('U', [0, 255, 255, 255]),
    ('V', [0, 128, 255, 255]),
    ('W', [0, 0, 255, 255]),
    ('X', [128, 0, 255, 255]),
    ('Y', [255, 0, 255, 255]),
    ('Z', [255, 0, 128, 255]),
];

/// Look up the palette colour of a piece
pub fn piece_color(name: char) -> Option<[u8; 4]> {
    PIECE_COLORS
        .iter()
        .find(|(piece, _)| *piece == name)
        .map(|&(_, color)| color)
}

/// File name used for the tilings of a `rows` x `cols` board
pub fn tilings_file_name(rows: usize, cols: usize) -> String {
    format!("tilings-{rows}-{cols}.json")
}
