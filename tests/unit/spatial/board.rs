//! Tests for board placement, compatibility and validation

#[cfg(test)]
mod tests {
    use edgematch::spatial::board::{Board, Conflict, Placement};
    use edgematch::spatial::layout::Layout;
    use edgematch::spatial::symbols::{Identical, Symbol};
    use edgematch::spatial::tiles::TileSet;
    use edgematch::spatial::topology::{Location, TopologyConfig};

    fn tiles(raw: &[[u32; 4]]) -> TileSet {
        let edges = raw
            .iter()
            .map(|tile| tile.iter().copied().map(Symbol::new).collect())
            .collect();
        TileSet::from_edges(edges, 4).unwrap()
    }

    // Tests place, get and remove keep the fill count
    // Verified by not decrementing on remove
    #[test]
    fn test_place_and_remove() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let pool = tiles(&[[1, 1, 1, 1]; 4]);
        let mut board = Board::new(&layout, &pool, &Identical);

        board.place(0, 2, 1);
        assert_eq!(board.filled(), 1);
        assert_eq!(board.get(0), Some(Placement { tile: 2, rotation: 1 }));

        board.place(0, 3, 0);
        assert_eq!(board.filled(), 1);

        assert_eq!(board.remove(0), Some(Placement { tile: 3, rotation: 0 }));
        assert_eq!(board.remove(0), None);
        assert_eq!(board.filled(), 0);
        assert!(!board.is_complete());
    }

    // Tests a candidate must match the east edge of its west neighbour
    // Verified by comparing against the neighbour's west edge
    #[test]
    fn test_is_compatible() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let pool = tiles(&[[1, 2, 3, 4], [9, 9, 9, 2], [5, 5, 5, 5], [6, 6, 6, 6]]);
        let mut board = Board::new(&layout, &pool, &Identical);

        board.place(0, 0, 0);
        assert!(board.is_compatible(1, 1, 0));
        assert!(!board.is_compatible(1, 1, 1));
        assert!(!board.is_compatible(1, 2, 0));
    }

    // Tests empty neighbours do not constrain a candidate
    // Verified by treating empty cells as mismatches
    #[test]
    fn test_empty_neighbours_ignored() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let pool = tiles(&[[1, 2, 3, 4], [5, 6, 7, 8], [1, 1, 1, 1], [2, 2, 2, 2]]);
        let board = Board::new(&layout, &pool, &Identical);

        for slot in 0..4 {
            assert!(board.is_compatible(slot, 1, 2));
        }
    }

    // Tests a full recheck reports a mismatched pair
    // Verified by skipping adjacent pairs in conflicts
    #[test]
    fn test_conflicts() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let pool = tiles(&[[1, 1, 1, 1], [1, 1, 1, 1], [1, 1, 1, 1], [2, 2, 2, 2]]);
        let mut board = Board::new(&layout, &pool, &Identical);

        board.place(0, 0, 0);
        board.place(1, 1, 0);
        board.place(2, 2, 0);
        assert!(board.is_valid());

        board.place(3, 3, 0);
        assert!(board.is_complete());
        assert!(!board.is_valid());
        assert_eq!(
            board.conflicts(),
            vec![
                Conflict {
                    first: Location::new(0, 1),
                    second: Location::new(1, 1),
                },
                Conflict {
                    first: Location::new(1, 0),
                    second: Location::new(1, 1),
                },
            ]
        );
    }

    // Tests the text form lists one line per occupied cell
    // Verified by printing the tile id instead of its label
    #[test]
    fn test_display() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let pool = tiles(&[[1, 1, 1, 1]; 4]);
        let mut board = Board::new(&layout, &pool, &Identical);

        board.place(0, 3, 2);
        board.place(3, 1, 0);

        assert_eq!(
            board.to_string(),
            "Loc (0, 0): Tile 3, rot=2\nLoc (1, 1): Tile 1, rot=0"
        );
        assert_eq!(board.placements().len(), 2);
    }

    // Tests exposed symbols follow the rotation
    // Verified by ignoring rotation in exposed
    #[test]
    fn test_exposed() {
        let layout = Layout::new(TopologyConfig::square(2)).unwrap();
        let pool = tiles(&[[1, 2, 3, 4]; 4]);
        let board = Board::new(&layout, &pool, &Identical);

        let placement = Placement { tile: 0, rotation: 1 };
        assert_eq!(board.exposed(placement, 0), Some(Symbol::new(4)));
        assert_eq!(board.exposed(Placement { tile: 9, rotation: 0 }, 0), None);
    }
}
