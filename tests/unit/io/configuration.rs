//! Tests for board constants, file naming and the piece palette

#[cfg(test)]
mod tests {
    use pentacover::io::configuration::{
        DEFAULT_COLS, DEFAULT_ROWS, MIN_BOARD_SIDE, PENTOMINO_AREA, PIECE_COLORS, piece_color,
        tilings_file_name,
    };
    use pentacover::spatial::polyomino::pentominoes;
    use std::collections::BTreeSet;

    // Default board is a valid pentomino rectangle
    #[test]
    fn test_default_board() {
        assert_eq!(DEFAULT_ROWS * DEFAULT_COLS, PENTOMINO_AREA);
        assert!(DEFAULT_ROWS >= MIN_BOARD_SIDE && DEFAULT_COLS >= MIN_BOARD_SIDE);
    }

    // Twelve pieces of five cells make up the required area
    #[test]
    fn test_area_matches_pieces() {
        let area: usize = pentominoes().iter().map(|piece| piece.area()).sum();
        assert_eq!(area, PENTOMINO_AREA);
    }

    // Every pentomino has a distinct, opaque colour
    #[test]
    fn test_palette_covers_pentominoes() {
        for piece in pentominoes() {
            let color = piece_color(piece.name());
            assert!(color.is_some(), "no colour for {}", piece.name());
            assert_eq!(color.map(|c| c[3]), Some(255));
        }
        let distinct: BTreeSet<[u8; 4]> = PIECE_COLORS.iter().map(|&(_, c)| c).collect();
        assert_eq!(distinct.len(), PIECE_COLORS.len());
        assert_eq!(piece_color('Q'), None);
    }

    // Tilings file names encode the board size
    #[test]
    fn test_tilings_file_name() {
        assert_eq!(tilings_file_name(3, 20), "tilings-3-20.json");
    }
}
