//! Tests for the headless and recording drawing surfaces

#[cfg(test)]
mod tests {
    use mazecarve::Cell;
    use mazecarve::io::surface::{DrawingSurface, NoopSurface, RecordingSurface, SurfaceEvent};

    // Tests the no-op surface accepts every call
    // Verified by panicking in refresh
    #[test]
    fn test_noop_surface() {
        let mut surface = NoopSurface;
        surface.draw_cell_walls([0, 0], &Cell::new());
        surface.draw_path_segment([0, 0], [0, 1], true);
        surface.refresh();
    }

    // Tests events are kept in call order with cell snapshots
    // Verified by storing a reference instead of a copy
    #[test]
    fn test_recording_order() {
        let mut surface = RecordingSurface::new();
        let mut cell = Cell::new();
        surface.draw_cell_walls([1, 2], &cell);
        cell.top_wall = false;
        surface.draw_cell_walls([1, 2], &cell);
        surface.draw_path_segment([1, 2], [1, 3], false);
        surface.refresh();

        let opened = Cell {
            top_wall: false,
            ..Cell::new()
        };
        assert_eq!(
            surface.events(),
            &[
                SurfaceEvent::CellWalls {
                    position: [1, 2],
                    cell: Cell::new(),
                },
                SurfaceEvent::CellWalls {
                    position: [1, 2],
                    cell: opened,
                },
                SurfaceEvent::PathSegment {
                    from: [1, 2],
                    to: [1, 3],
                    forward: false,
                },
                SurfaceEvent::Refresh,
            ]
        );
    }

    // Tests the helper views over recorded events
    // Verified by counting every event as a refresh
    #[test]
    fn test_recording_views() {
        let mut surface = RecordingSurface::default();
        surface.refresh();
        surface.draw_path_segment([0, 0], [1, 0], true);
        surface.refresh();

        assert_eq!(surface.refresh_count(), 2);
        assert_eq!(surface.path_segments(), vec![([0, 0], [1, 0], true)]);
    }

    // Tests surfaces work behind a trait object
    // Verified by requiring Sized in the drawing helpers
    #[test]
    fn test_dyn_surface() {
        let mut recording = RecordingSurface::new();
        {
            let surface: &mut dyn DrawingSurface = &mut recording;
            let maze = mazecarve::Maze::new(2, 2, Some(3)).unwrap();
            maze.draw(surface);
        }
        assert_eq!(recording.refresh_count(), 4);
    }
}
