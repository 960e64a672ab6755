//! Tests for tilings recovered from covers

#[cfg(test)]
mod tests {
    use pentacover::algorithm::exact_cover::exact_covers;
    use pentacover::spatial::polyomino::Polyomino;
    use pentacover::spatial::rectangle::{Item, RectangleProblem};
    use pentacover::spatial::tiling::{EMPTY_CELL, Tiling};
    use std::collections::BTreeSet;

    fn strip_tiling() -> Tiling {
        let pieces = vec![
            Polyomino::new('A', [(0, 0), (0, 1)]),
            Polyomino::new('B', [(0, 0), (0, 1)]),
        ];
        let problem = RectangleProblem::new(1, 4, &pieces).unwrap();
        problem.tilings().next().unwrap()
    }

    // Cells of each piece are recovered in row-major order
    #[test]
    fn test_from_cover() {
        let tiling = strip_tiling();
        assert_eq!(tiling.len(), 2);
        let pieces: Vec<(char, &[(usize, usize)])> = tiling.iter().collect();
        assert_eq!(
            pieces,
            vec![('A', &[(0, 0), (0, 1)][..]), ('B', &[(0, 2), (0, 3)][..])]
        );
    }

    // Placements without a piece constraint are skipped
    #[test]
    fn test_unnamed_placement_skipped() {
        let universe = BTreeSet::from([Item::Cell { row: 0, col: 0 }]);
        let choices = vec![BTreeSet::from([Item::Cell { row: 0, col: 0 }])];
        let cover = exact_covers(&universe, &choices, true)
            .unwrap()
            .next()
            .unwrap();

        let tiling = Tiling::from_cover(&cover);
        assert!(tiling.is_empty());
    }

    // Board marks uncovered cells and ignores cells past its edge
    #[test]
    fn test_board() {
        let tiling = strip_tiling();

        let board = tiling.board(2, 3);
        assert_eq!(board[[0, 0]], 'A');
        assert_eq!(board[[0, 2]], 'B');
        assert_eq!(board[[1, 0]], EMPTY_CELL);
    }

    // Console rendering joins names with spaces, one line per row
    #[test]
    fn test_render() {
        let tiling = strip_tiling();
        assert_eq!(tiling.render(1, 4), "A A B B");
        assert_eq!(tiling.render(2, 2), "A A\n. .");
    }

    // JSON form maps names to lists of [row, col] pairs
    #[test]
    fn test_json_shape() {
        let tiling = strip_tiling();
        let json = serde_json::to_string(&tiling).unwrap();
        assert_eq!(json, r#"{"A":[[0,0],[0,1]],"B":[[0,2],[0,3]]}"#);

        let back: Tiling = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tiling);
    }

    // Iteration yields pieces in name order
    #[test]
    fn test_iter() {
        let tiling = strip_tiling();
        let names: Vec<char> = tiling.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!['A', 'B']);
    }
}
