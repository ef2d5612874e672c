//! Tests for the toroidal occupancy grid and wrap-around distances

#[cfg(test)]
mod tests {
    use bluenoise::spatial::OccupancyGrid;
    use bluenoise::spatial::grid::toroidal_delta;

    // Tests on-count bookkeeping across repeated and redundant sets
    // Verified by setting the same cell twice and clearing a cell that is already off
    #[test]
    fn test_set_tracks_on_count() {
        let mut grid = OccupancyGrid::new(4);
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.on_count(), 0);

        assert!(grid.set(5, true));
        assert!(!grid.set(5, true), "Setting an on cell again changes nothing");
        assert!(!grid.set(6, false), "Clearing an off cell changes nothing");
        assert_eq!(grid.on_count(), 1);
        assert_eq!(grid.off_count(), 15);

        assert!(grid.set(5, false));
        assert_eq!(grid.on_count(), 0);
    }

    // Tests construction from index lists
    // Verified by passing a duplicate and an out-of-range index
    #[test]
    fn test_from_indices_ignores_duplicates_and_out_of_range() {
        let grid = OccupancyGrid::from_indices(3, [0, 4, 4, 8, 42]);
        assert_eq!(grid.on_count(), 3);
        assert_eq!(grid.iter_on().collect::<Vec<_>>(), vec![0, 4, 8]);
        assert_eq!(grid.off_count(), 6);
    }

    // Tests wrapped coordinate access
    // Verified by reading cell (0, 0) through coordinates one period away
    #[test]
    fn test_is_on_wrapped() {
        let grid = OccupancyGrid::from_indices(4, [0]);
        assert!(grid.is_on_wrapped(4, 4));
        assert!(grid.is_on_wrapped(8, 0));
        assert!(!grid.is_on_wrapped(5, 4));
    }

    // Tests row-major index and coordinate conversions
    // Verified by converting back and forth for every cell
    #[test]
    fn test_index_coordinate_roundtrip() {
        let grid = OccupancyGrid::new(5);
        for index in 0..grid.len() {
            let [row, col] = grid.coordinate(index);
            assert_eq!(grid.index(row, col), index);
        }
        assert_eq!(grid.coordinate(7), [1, 2]);
    }

    // Tests toroidal distances
    // Verified by distances that are shorter across the wrap than directly
    #[test]
    fn test_toroidal_distances() {
        assert_eq!(toroidal_delta(0, 7, 8), 1);
        assert_eq!(toroidal_delta(2, 5, 8), 3);
        assert_eq!(toroidal_delta(0, 4, 8), 4);
        assert_eq!(toroidal_delta(6, 0, 8), 2);
    }

    // Tests image and text rendering
    // Verified by a single on cell in a 2x2 grid
    #[test]
    fn test_rendering() {
        let grid = OccupancyGrid::from_indices(2, [1]);
        let image = grid.to_image();
        assert_eq!(image.get([0, 1]).copied(), Some(255));
        assert_eq!(image.get([1, 1]).copied(), Some(0));
        assert_eq!(grid.to_string(), ".#\n..\n");
    }
}
