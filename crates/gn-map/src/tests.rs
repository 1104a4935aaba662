//! Unit tests for gn-map.

// ── Codes ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod codes {
    use gn_core::CellKind;

    use crate::{code_of, kind_from_code};

    #[test]
    fn all_codes_known() {
        let kinds: Vec<CellKind> = (0..=7).map(|c| kind_from_code(c).unwrap()).collect();
        assert_eq!(
            kinds,
            vec![
                CellKind::Open,
                CellKind::Blocked,
                CellKind::Blocked,
                CellKind::Start,
                CellKind::Goal,
                CellKind::Intersection,
                CellKind::SignalPost,
                CellKind::Crosswalk,
            ]
        );
        assert_eq!(kind_from_code(8), None);
    }

    #[test]
    fn water_encodes_back_as_wall() {
        assert_eq!(code_of(kind_from_code(2).unwrap()), 1);
        assert_eq!(code_of(CellKind::SignalPost), 6);
    }
}

// ── Text loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod text {
    use gn_core::{Cell, CellKind, GridError};

    use crate::{grid_to_text, parse_grid_text, MapError};

    #[test]
    fn parses_mixed_separators_and_comments() {
        let grid = parse_grid_text(
            "# a tiny street\n\
             3, 0 6   4   # trailing comment\n\
             \n\
             1 2,5 7\n",
        )
        .unwrap();
        assert_eq!((grid.rows(), grid.cols()), (2, 4));
        assert_eq!(grid.start(), Cell::new(0, 0));
        assert_eq!(grid.goal(), Cell::new(0, 3));
        assert_eq!(grid.kind(Cell::new(0, 2)), Some(CellKind::SignalPost));
        assert_eq!(grid.kind(Cell::new(1, 1)), Some(CellKind::Blocked));
        assert_eq!(grid.kind(Cell::new(1, 3)), Some(CellKind::Crosswalk));
    }

    #[test]
    fn unknown_code_reports_position() {
        let err = parse_grid_text("3 0\n0 9 4\n").unwrap_err();
        match err {
            MapError::UnknownCode { row, col, code } => {
                assert_eq!((row, col), (1, 1));
                assert_eq!(code, "9");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(matches!(parse_grid_text("3 x 4"), Err(MapError::UnknownCode { .. })));
    }

    #[test]
    fn malformed_grids_rejected() {
        assert!(matches!(parse_grid_text("# nothing\n"), Err(MapError::Grid(GridError::Empty))));
        assert!(matches!(
            parse_grid_text("3 0 0\n0 4\n"),
            Err(MapError::Grid(GridError::Ragged { row: 1, expected: 3, got: 2 }))
        ));
        assert!(matches!(parse_grid_text("0 0 4\n"), Err(MapError::Grid(GridError::MissingStart))));
        assert!(matches!(parse_grid_text("3 0 0\n"), Err(MapError::Grid(GridError::MissingGoal))));
        assert!(matches!(
            parse_grid_text("3 3 4\n"),
            Err(MapError::Grid(GridError::DuplicateStart { .. }))
        ));
        assert!(matches!(
            parse_grid_text("3 4 4\n"),
            Err(MapError::Grid(GridError::DuplicateGoal { .. }))
        ));
    }

    #[test]
    fn text_rendering_reparses_to_same_grid() {
        let src = "3 0 5\n1 6 7\n0 0 4\n";
        let grid = parse_grid_text(src).unwrap();
        assert_eq!(grid_to_text(&grid), src);
        assert_eq!(parse_grid_text(&grid_to_text(&grid)).unwrap(), grid);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_loader {
    use std::io::{Cursor, Write};

    use gn_core::{Cell, CellKind, GridError};

    use crate::{load_grid_csv, load_grid_reader, MapError};

    #[test]
    fn reads_headerless_csv() {
        let data = "# header comment\n1,1,1,1\n3, 0,6,4\n1,2,2,1\n";
        let grid = load_grid_reader(Cursor::new(data)).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 4));
        assert_eq!(grid.start(), Cell::new(1, 0));
        assert_eq!(grid.goal(), Cell::new(1, 3));
        assert_eq!(grid.kind(Cell::new(2, 1)), Some(CellKind::Blocked));
    }

    #[test]
    fn ragged_csv_is_grid_error() {
        let r = load_grid_reader(Cursor::new("3,0,0\n0,4\n"));
        assert!(matches!(r, Err(MapError::Grid(GridError::Ragged { row: 1, .. }))));
    }

    #[test]
    fn unknown_code_in_csv() {
        let r = load_grid_reader(Cursor::new("3,0\n0,-1\n4,0\n"));
        assert!(matches!(r, Err(MapError::UnknownCode { row: 1, col: 1, .. })));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "3,0,0\n1,1,0\n4,0,0\n").unwrap();
        let grid = load_grid_csv(file.path()).unwrap();
        assert_eq!(grid.goal(), Cell::new(2, 0));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_grid_csv(&dir.path().join("none.csv")), Err(MapError::Io(_))));
    }
}

// ── Demo map ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod demo {
    use gn_core::{BlockedSet, Cell, CellKind};
    use gn_search::{search, SearchStrategy};

    use crate::demo_city;

    #[test]
    fn demo_city_is_well_formed() {
        let grid = demo_city().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (10, 16));
        assert_eq!(grid.start(), Cell::new(1, 1));
        assert_eq!(grid.goal(), Cell::new(8, 14));
        assert_eq!(grid.cells_of(CellKind::SignalPost).count(), 3);
    }

    #[test]
    fn demo_city_is_solvable_by_every_strategy() {
        let grid = demo_city().unwrap();
        let none = BlockedSet::new();
        for s in SearchStrategy::ALL {
            let p = search(&grid, s, grid.start(), grid.goal(), &none).unwrap();
            assert!(p.is_walkable(&grid, &none), "{s}");
            if s.is_optimal() {
                assert_eq!(p.len(), 21, "{s}");
            }
        }
    }
}
