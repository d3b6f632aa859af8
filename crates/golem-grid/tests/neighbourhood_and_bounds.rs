use golem_core::{CellReader, Coord};
use golem_grid::{Grid, GridError};

#[test]
fn max_neighbour_degree_by_grid_size() {
    let max_degree = |size: usize| {
        let g = Grid::new(size).unwrap();
        let n = size as i32;
        (0..n)
            .flat_map(|r| (0..n).map(move |c| Coord::new(r, c)))
            .map(|coord| g.neighbours(coord).unwrap().len())
            .max()
            .unwrap()
    };
    assert_eq!(max_degree(1), 0);
    assert_eq!(max_degree(2), 3);
    assert_eq!(max_degree(3), 8);
}

#[test]
fn every_row_keeps_full_width_after_mutation() {
    let mut g = Grid::new(6).unwrap();
    for i in 0..6 {
        g.toggle(Coord::new(i, 5 - i)).unwrap();
    }
    assert_eq!(g.rows().len(), 6);
    for row in g.rows() {
        assert_eq!(row.len(), 6);
        assert_eq!(row.iter().filter(|&&a| a).count(), 1);
    }
}

#[test]
fn neighbours_of_outside_coord_is_error() {
    let g = Grid::new(4).unwrap();
    assert_eq!(
        g.neighbours(Coord::new(0, 4)).unwrap_err(),
        GridError::OutOfBounds {
            coord: Coord::new(0, 4),
            size: 4
        }
    );
    assert!(g.live_neighbours(Coord::new(-1, -1)).is_err());
}

#[test]
fn grid_errors_convert_to_engine_errors() {
    let err: golem_core::EngineError = GridError::InvalidSize { size: 0 }.into();
    assert_eq!(err, golem_core::EngineError::InvalidSize { size: 0 });

    let err: golem_core::EngineError = GridError::OutOfBounds {
        coord: Coord::new(9, 9),
        size: 3,
    }
    .into();
    assert_eq!(
        err,
        golem_core::EngineError::OutOfBounds {
            coord: Coord::new(9, 9),
            size: 3
        }
    );
}

#[test]
fn cell_reader_default_count_agrees_with_grid() {
    struct Wrapper<'a>(&'a Grid);
    impl CellReader for Wrapper<'_> {
        fn side(&self) -> usize {
            self.0.size()
        }
        fn is_alive(&self, coord: Coord) -> Option<bool> {
            self.0.get(coord).ok()
        }
    }

    let mut g = Grid::new(5).unwrap();
    g.fill_from([Coord::new(0, 0), Coord::new(4, 4), Coord::new(2, 3)]);
    assert_eq!(Wrapper(&g).alive_count(), g.count_alive());
}
