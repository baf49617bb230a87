//! Tests for reading tile definitions from CSV text

#[cfg(test)]
mod tests {
    use edgematch::PuzzleError;
    use edgematch::io::tile_file::TileFile;
    use std::io::Write;
    use std::path::Path;

    const CLASSIC: &str = "\
ID,north,east,south,west
# corner pieces first
1,green clover/left,orange star/right,yellow moon/left,green clover/right

2, orange star/left ,yellow moon/right,green clover/left,orange star/right
";

    // Tests a well-formed file yields records, directions and symbols
    // Verified by not skipping comment lines
    #[test]
    fn test_parse_valid() {
        let file = TileFile::parse(CLASSIC, Path::new("classic.csv")).unwrap();

        assert_eq!(file.directions, vec!["north", "east", "south", "west"]);
        assert_eq!(file.edge_count(), 4);
        assert_eq!(file.records.len(), 2);
        assert_eq!(file.records[0].label, "1");
        assert_eq!(file.records[0].line, 3);
        assert_eq!(file.records[1].line, 5);
        assert_eq!(file.symbols.len(), 6);

        let star_left = file.symbols.get("orange star/left").unwrap();
        assert_eq!(file.records[1].edges[0], star_left);
    }

    // Tests tiles keep their labels and file order
    // Verified by sorting tiles by label
    #[test]
    fn test_tiles() {
        let file = TileFile::parse(CLASSIC, Path::new("classic.csv")).unwrap();
        let tiles = file.tiles(4).unwrap();

        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[1].label(), "2");
        assert_eq!(tiles[1].id(), 1);
    }

    // Tests a four-column file cannot feed a hexagonal grid
    // Verified by skipping the edge count check in Tile::new
    #[test]
    fn test_tiles_wrong_shape() {
        let file = TileFile::parse(CLASSIC, Path::new("classic.csv")).unwrap();
        assert!(matches!(
            file.tiles(6),
            Err(PuzzleError::MalformedTile { expected: 6, found: 4, .. })
        ));
    }

    // Tests a row with a missing edge is a malformed tile
    // Verified by padding short rows with empty symbols
    #[test]
    fn test_short_row() {
        let text = "ID,n,e,s,w\nA,x,y,z\n";
        match TileFile::parse(text, Path::new("short.csv")) {
            Err(PuzzleError::MalformedTile {
                tile,
                expected,
                found,
            }) => {
                assert_eq!(tile, "A");
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("expected MalformedTile, got {other:?}"),
        }
    }

    // Tests structural problems are reported with their line
    // Verified by reporting line zero for every error
    #[test]
    fn test_file_errors() {
        let cases = [
            ("", 1),
            ("# only a comment\n", 1),
            ("ID\n1\n", 1),
            ("ID,n,e,s,w\n", 1),
            ("ID,n,e,s,w\n,a,b,c,d\n", 2),
            ("ID,n,e,s,w\nA,a,,c,d\n", 2),
        ];

        for (text, expected_line) in cases {
            match TileFile::parse(text, Path::new("bad.csv")) {
                Err(PuzzleError::TileFile { line, .. }) => assert_eq!(line, expected_line),
                other => panic!("expected TileFile error for {text:?}, got {other:?}"),
            }
        }
    }

    // Tests duplicate labels are accepted
    // Verified by rejecting repeated labels
    #[test]
    fn test_duplicate_labels() {
        let text = "ID,n,e,s,w\nA,a,b,c,d\nA,d,c,b,a\n";
        let file = TileFile::parse(text, Path::new("dupes.csv")).unwrap();
        assert_eq!(file.records.len(), 2);
    }

    // Tests reading from disk
    // Verified by parsing the path string instead of the file contents
    #[test]
    fn test_from_path() {
        let mut temp = tempfile::NamedTempFile::new().unwrap();
        temp.write_all(CLASSIC.as_bytes()).unwrap();

        let file = TileFile::from_path(temp.path()).unwrap();
        assert_eq!(file.records.len(), 2);
        assert_eq!(file.path, temp.path());
    }

    // Tests a missing file is a file system error
    // Verified by returning an empty tile file on read failure
    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = TileFile::from_path(&dir.path().join("absent.csv"));
        assert!(matches!(result, Err(PuzzleError::FileSystem { .. })));
    }
}
