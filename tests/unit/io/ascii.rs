//! Tests for plain-text maze rendering

#[cfg(test)]
mod tests {
    use mazecarve::io::ascii::render_ascii;
    use mazecarve::{Direction, Grid, Maze};

    // Tests the entrance and exit show as gaps in a 1x1 grid
    // Verified by drawing the outer border unconditionally
    #[test]
    fn test_single_cell() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.open_entrance_and_exit();

        assert_eq!(render_ascii(&grid, None), "+   +\n|   |\n+   +\n");
        assert_eq!(
            render_ascii(&grid, Some(&[[0, 0]])),
            "+   +\n| * |\n+   +\n"
        );
    }

    // Tests internal openings remove the separating wall character
    // Verified by reading the right wall instead of the left
    #[test]
    fn test_corridor() {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.open_entrance_and_exit();
        grid.remove_wall([0, 0], Direction::Right);
        grid.remove_wall([0, 1], Direction::Right);

        let expected = "+   +---+---+\n|           |\n+---+---+   +\n";
        assert_eq!(render_ascii(&grid, None), expected);
    }

    // Tests vertical passages open the horizontal wall segment
    // Verified by rendering top walls for every row
    #[test]
    fn test_vertical_passage() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.remove_wall([0, 0], Direction::Down);

        assert_eq!(
            render_ascii(&grid, None),
            "+---+\n|   |\n+   +\n|   |\n+---+\n"
        );
    }

    // Tests output has two lines per row plus the top border
    // Verified by omitting the top border
    #[test]
    fn test_line_count_and_width() {
        let maze = Maze::new(3, 4, Some(9)).unwrap();
        let text = render_ascii(maze.grid(), None);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|line| line.chars().count() == 17));
    }

    // Tests every path cell is marked
    // Verified by marking only the endpoints
    #[test]
    fn test_path_marks() {
        let mut maze = Maze::new(5, 5, Some(4)).unwrap();
        let path = maze
            .solve_path(&mut mazecarve::io::surface::NoopSurface)
            .unwrap();
        let text = render_ascii(maze.grid(), Some(&path));

        assert_eq!(text.matches('*').count(), path.len());
    }
}
