//! Rare-symbol detection for the optional border rule
//!
//! A symbol that occurs only a handful of times is assumed to be paired
//! inside the grid, never left facing the frame. This is a heuristic: a
//! puzzle whose solution does put a rare symbol on the border becomes
//! unsolvable with the rule enabled.

use std::collections::HashMap;

use crate::algorithm::bitset::IdBitset;
use crate::spatial::layout::Layout;
use crate::spatial::symbols::Symbol;
use crate::spatial::tiles::TileSet;

/// Set of symbols that should not face the border
#[derive(Debug, Clone)]
pub struct RareSymbols {
    rare: IdBitset,
}

impl RareSymbols {
    /// Flag symbols whose frequency is at most `inner_edges / distinct_symbols`
    pub fn analyze(tiles: &TileSet, layout: &Layout) -> Self {
        let mut frequency: HashMap<Symbol, usize> = HashMap::new();
        for symbol in tiles.all_edges() {
            *frequency.entry(symbol).or_default() += 1;
        }

        let capacity = frequency
            .keys()
            .map(|symbol| symbol.index() + 1)
            .max()
            .unwrap_or(0);
        let mut rare = IdBitset::new(capacity);

        if !frequency.is_empty() {
            let threshold = layout.inner_edges() as f64 / frequency.len() as f64;
            for (symbol, &count) in &frequency {
                if count as f64 <= threshold {
                    rare.insert(symbol.index());
                }
            }
        }

        Self { rare }
    }

    /// Test whether a symbol is rare
    pub fn is_rare(&self, symbol: Symbol) -> bool {
        self.rare.contains(symbol.index())
    }

    /// Number of rare symbols
    pub fn count(&self) -> usize {
        self.rare.count()
    }

    /// Test if no symbol is rare, making the rule a no-op
    pub fn is_empty(&self) -> bool {
        self.rare.is_empty()
    }

    /// Test whether a rotated tile keeps every rare symbol off the border of `slot`
    pub fn allows(
        &self,
        tiles: &TileSet,
        layout: &Layout,
        slot: usize,
        tile_id: usize,
        rotation: usize,
    ) -> bool {
        let Some(tile) = tiles.get(tile_id) else {
            return false;
        };
        layout
            .border_edges(slot)
            .iter()
            .all(|&direction| !self.is_rare(tile.edge_at(rotation, direction)))
    }
}
