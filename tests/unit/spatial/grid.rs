//! Tests for grid construction, bounds-checked lookup, and paired wall edits

#[cfg(test)]
mod tests {
    use mazecarve::io::configuration::MAX_GRID_DIMENSION;
    use mazecarve::{Direction, Grid, MazeError};

    // Tests zero dimensions are rejected
    // Verified by removing the zero check
    #[test]
    fn test_rejects_zero_dimensions() {
        for (rows, cols) in [(0, 5), (5, 0), (0, 0)] {
            let result = Grid::new(rows, cols);
            assert!(matches!(
                result,
                Err(MazeError::InvalidDimensions { .. })
            ));
        }
    }

    // Tests oversized dimensions are rejected before allocation
    // Verified by raising the dimension limit check
    #[test]
    fn test_rejects_oversized_dimensions() {
        let result = Grid::new(MAX_GRID_DIMENSION + 1, 1);
        assert!(matches!(
            result,
            Err(MazeError::InvalidDimensions { rows, .. }) if rows == MAX_GRID_DIMENSION + 1
        ));
    }

    // Tests a new grid is fully walled with correct dimensions
    // Verified by initializing cells with open walls
    #[test]
    fn test_new_grid_is_closed() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.cell_count(), 12);
        assert_eq!(grid.entrance(), [0, 0]);
        assert_eq!(grid.exit(), [2, 3]);

        for (_, cell) in grid.iter() {
            assert_eq!(cell.open_sides(), 0);
            assert!(!cell.visited);
        }
    }

    // Tests neighbor lookup stops at every edge
    // Verified by removing the upper bound check
    #[test]
    fn test_neighbor_bounds() {
        let grid = Grid::new(2, 3).unwrap();

        assert_eq!(grid.neighbor([0, 0], Direction::Up), None);
        assert_eq!(grid.neighbor([0, 0], Direction::Left), None);
        assert_eq!(grid.neighbor([0, 0], Direction::Down), Some([1, 0]));
        assert_eq!(grid.neighbor([0, 0], Direction::Right), Some([0, 1]));
        assert_eq!(grid.neighbor([1, 2], Direction::Down), None);
        assert_eq!(grid.neighbor([1, 2], Direction::Right), None);
        assert_eq!(grid.neighbor([5, 5], Direction::Up), None);
    }

    // Tests neighbors come back in enumeration order
    // Verified by reversing the direction list
    #[test]
    fn test_neighbors_order() {
        let grid = Grid::new(3, 3).unwrap();
        let centre: Vec<_> = grid.neighbors([1, 1]).collect();
        assert_eq!(
            centre,
            vec![
                (Direction::Up, [0, 1]),
                (Direction::Down, [2, 1]),
                (Direction::Left, [1, 0]),
                (Direction::Right, [1, 2]),
            ]
        );
        assert_eq!(grid.neighbors([0, 0]).count(), 2);
    }

    // Tests wall removal clears both facing sides
    // Verified by only clearing the current cell's wall
    #[test]
    fn test_remove_wall_is_symmetric() {
        let mut grid = Grid::new(2, 2).unwrap();

        assert!(grid.remove_wall([0, 0], Direction::Right));
        assert!(!grid.has_wall([0, 0], Direction::Right));
        assert!(!grid.has_wall([0, 1], Direction::Left));

        assert!(grid.set_wall([0, 1], Direction::Left, true));
        assert!(grid.has_wall([0, 0], Direction::Right));
    }

    // Tests boundary walls cannot be removed as pairs
    // Verified by clearing the wall without a neighbor check
    #[test]
    fn test_remove_boundary_wall_is_refused() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(!grid.remove_wall([0, 0], Direction::Up));
        assert!(grid.has_wall([0, 0], Direction::Up));
    }

    // Tests entrance and exit openings touch only their boundary walls
    // Verified by opening the exit's right wall instead
    #[test]
    fn test_open_entrance_and_exit() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.open_entrance_and_exit();

        assert!(!grid.cell([0, 0]).unwrap().top_wall);
        assert!(!grid.cell([2, 1]).unwrap().bottom_wall);
        assert_eq!(grid.cell([0, 0]).unwrap().open_sides(), 1);
        assert_eq!(grid.cell([2, 1]).unwrap().open_sides(), 1);
    }

    // Tests a 1x1 grid opens entrance and exit on the same cell
    // Verified by returning early for single-cell grids
    #[test]
    fn test_single_cell_entrance_and_exit() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.open_entrance_and_exit();
        let cell = grid.cell([0, 0]).unwrap();
        assert!(!cell.top_wall);
        assert!(!cell.bottom_wall);
        assert!(cell.left_wall);
        assert!(cell.right_wall);
    }

    // Tests visited flags can be set and cleared
    // Verified by making reset_visited a no-op
    #[test]
    fn test_visited_flags() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.mark_visited([1, 0]);
        assert!(grid.is_visited([1, 0]));
        assert!(!grid.is_visited([0, 0]));
        assert!(!grid.is_visited([9, 9]));

        grid.reset_visited();
        assert!(!grid.is_visited([1, 0]));
    }

    // Tests row-major indexing and position iteration
    // Verified by swapping row and column in index_of
    #[test]
    fn test_row_major_indexing() {
        let grid = Grid::new(2, 3).unwrap();
        assert_eq!(grid.index_of([0, 2]), Some(2));
        assert_eq!(grid.index_of([1, 0]), Some(3));
        assert_eq!(grid.index_of([2, 0]), None);

        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions.len(), 6);
        assert_eq!(positions.first(), Some(&[0, 0]));
        assert_eq!(positions.get(3), Some(&[1, 0]));
        for (index, position) in positions.iter().enumerate() {
            assert_eq!(grid.index_of(*position), Some(index));
        }
    }

    // Tests out-of-bounds wall queries read as solid
    // Verified by returning false for missing cells
    #[test]
    fn test_has_wall_outside_grid() {
        let grid = Grid::new(1, 1).unwrap();
        assert!(grid.has_wall([3, 3], Direction::Down));
        assert!(grid.cell([1, 0]).is_none());
    }
}
