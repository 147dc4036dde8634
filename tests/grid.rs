use life::{Grid, GridError};

const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn grid_with(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::blank(rows, cols).unwrap();
    for &(row, col) in alive {
        grid.set(row, col, true).unwrap();
    }
    grid
}

#[test]
fn neighbor_counts_are_clipped_at_the_boundary() {
    // On an all-alive grid every cell sees its full in-bounds 3x3 window
    // minus itself: 3 at corners, 5 on edges, 8 in the interior, never
    // more than 8.
    let grid = Grid::random(4, 5, 1.0, None).unwrap();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let r0 = row.saturating_sub(1);
            let r1 = (row + 1).min(grid.rows() - 1);
            let c0 = col.saturating_sub(1);
            let c1 = (col + 1).min(grid.cols() - 1);
            let expected = (r1 - r0 + 1) * (c1 - c0 + 1) - 1;
            assert_eq!(
                grid.count_live_neighbors(row, col),
                expected,
                "cell ({row}, {col})"
            );
            assert!(grid.count_live_neighbors(row, col) <= 8);
        }
    }
}

#[test]
fn a_lone_cell_has_zero_neighbors_but_is_every_neighbors_neighbor() {
    let grid = grid_with(3, 3, &[(1, 1)]);
    for row in 0..3 {
        for col in 0..3 {
            let expected = usize::from((row, col) != (1, 1));
            assert_eq!(grid.count_live_neighbors(row, col), expected);
        }
    }
}

#[test]
fn an_all_dead_grid_stays_dead() {
    let mut grid = Grid::blank(8, 8).unwrap();
    for _ in 0..3 {
        grid.step();
        assert_eq!(grid.population(), 0);
    }
}

#[test]
fn the_block_is_a_fixed_point() {
    let block = &[(2, 2), (2, 3), (3, 2), (3, 3)];
    let mut grid = grid_with(6, 6, block);
    let before = grid.cells().to_vec();
    for _ in 0..2 {
        grid.step();
        assert_eq!(grid.cells(), &before[..]);
    }
}

#[test]
fn the_blinker_oscillates_with_period_two() {
    let horizontal = &[(3, 2), (3, 3), (3, 4)];
    let vertical = &[(2, 3), (3, 3), (4, 3)];
    let mut grid = grid_with(7, 7, horizontal);

    grid.step();
    assert_eq!(grid.cells(), grid_with(7, 7, vertical).cells());

    grid.step();
    assert_eq!(grid.cells(), grid_with(7, 7, horizontal).cells());
}

#[test]
fn fill_probability_extremes() {
    let dead = Grid::random(5, 9, 0.0, None).unwrap();
    assert_eq!(dead.population(), 0);

    let alive = Grid::random(5, 9, 1.0, None).unwrap();
    assert_eq!(alive.population(), 5 * 9);
}

#[test]
fn zero_dimensions_are_rejected() {
    for (rows, cols) in [(0, 10), (10, 0), (0, 0)] {
        assert_eq!(
            Grid::blank(rows, cols).unwrap_err(),
            GridError::InvalidDimension { rows, cols }
        );
        assert_eq!(
            Grid::random(rows, cols, FILL_RATE, Some(SEED)).unwrap_err(),
            GridError::InvalidDimension { rows, cols }
        );
    }
}

#[test]
fn single_cell_queries_are_bounds_checked() {
    let mut grid = Grid::blank(3, 4).unwrap();
    assert!(matches!(
        grid.is_alive(3, 0),
        Err(GridError::IndexOutOfRange { row: 3, col: 0, .. })
    ));
    assert!(matches!(
        grid.set(0, 4, true),
        Err(GridError::IndexOutOfRange { row: 0, col: 4, .. })
    ));
    assert_eq!(grid.is_alive(2, 3), Ok(false));
}

#[test]
fn seeded_fills_are_deterministic() {
    let a = Grid::random(32, 32, FILL_RATE, Some(SEED)).unwrap();
    let b = Grid::random(32, 32, FILL_RATE, Some(SEED)).unwrap();
    assert_eq!(a.cells(), b.cells());
    assert!(a.population() > 0);
}

#[test]
fn population_agrees_with_the_live_cell_iterator() {
    let grid = Grid::random(16, 24, FILL_RATE, Some(SEED)).unwrap();
    assert_eq!(grid.population(), grid.alive_cells().count());
    for (row, col) in grid.alive_cells() {
        assert_eq!(grid.is_alive(row, col), Ok(true));
    }
}
