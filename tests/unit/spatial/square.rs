//! Tests for the square grid topology

#[cfg(test)]
mod tests {
    use edgematch::spatial::square::SquareGrid;
    use edgematch::spatial::topology::{Location, Topology};

    // Tests locations are produced in row-major order
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_row_major_order() {
        let grid = SquareGrid::new(2);
        assert_eq!(
            grid.locations(),
            vec![
                Location::new(0, 0),
                Location::new(0, 1),
                Location::new(1, 0),
                Location::new(1, 1),
            ]
        );
        assert_eq!(grid.size(), 2);
    }

    // Tests steps follow N, E, S, W
    // Verified by swapping the east and west offsets
    #[test]
    fn test_step_directions() {
        let grid = SquareGrid::new(3);
        let centre = Location::new(1, 1);

        assert_eq!(grid.step(centre, 0), Location::new(0, 1));
        assert_eq!(grid.step(centre, 1), Location::new(1, 2));
        assert_eq!(grid.step(centre, 2), Location::new(2, 1));
        assert_eq!(grid.step(centre, 3), Location::new(1, 0));
    }

    // Tests bounds checking
    // Verified by using an inclusive upper bound
    #[test]
    fn test_contains() {
        let grid = SquareGrid::new(3);
        assert!(grid.contains(Location::new(2, 2)));
        assert!(!grid.contains(Location::new(3, 0)));
        assert!(!grid.contains(Location::new(0, -1)));
    }

    // Tests corner, edge and centre cells have 2, 3 and 4 neighbours
    // Verified by counting off-grid steps as neighbours
    #[test]
    fn test_neighbour_counts() {
        let grid = SquareGrid::new(3);
        assert_eq!(grid.adjacent(Location::new(0, 0)).len(), 2);
        assert_eq!(grid.adjacent(Location::new(0, 1)).len(), 3);
        assert_eq!(grid.adjacent(Location::new(1, 1)).len(), 4);
    }

    // Tests index_of agrees with the visiting order
    // Verified by computing the index column-major
    #[test]
    fn test_index_of() {
        let grid = SquareGrid::new(3);
        for (index, &location) in grid.locations().iter().enumerate() {
            assert_eq!(grid.index_of(location), Some(index));
        }
        assert_eq!(grid.index_of(Location::new(3, 0)), None);
        assert_eq!(grid.index_of(Location::new(0, -1)), None);
    }
}
