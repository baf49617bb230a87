//! Edge symbols and the rules deciding when two touching edges match
//!
//! Symbols are interned once at load time so the search only ever compares
//! small integer handles. Whether two handles match is decided by an
//! [`EdgeMatcher`], which lets one puzzle use plain equality while another
//! pairs the two halves of a picture.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::io::configuration::SYMBOL_SIDE_SEPARATOR;
use crate::io::error::{PuzzleError, Result};

/// Interned edge symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u32);

impl Symbol {
    /// Create a symbol from a raw handle
    ///
    /// Handles normally come from a [`SymbolTable`]; raw construction is useful
    /// when symbol text is irrelevant.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw handle value
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Handle as a dense index
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Text of an interned symbol split into its picture name and half
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    /// Full text as it appeared in the input
    pub text: String,
    /// Picture name (text before the side separator)
    pub name: String,
    /// Which half of the picture this is, if the text names one
    pub side: Option<String>,
}

impl SymbolInfo {
    fn parse(text: &str) -> Self {
        match text.split_once(SYMBOL_SIDE_SEPARATOR) {
            Some((name, side)) => Self {
                text: text.to_string(),
                name: name.trim().to_string(),
                side: Some(side.trim().to_string()),
            },
            None => Self {
                text: text.to_string(),
                name: text.trim().to_string(),
                side: None,
            },
        }
    }

    /// Lookup key with whitespace around the name and side removed
    fn key(&self) -> String {
        match &self.side {
            Some(side) => format!("{}{SYMBOL_SIDE_SEPARATOR}{side}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Interner mapping symbol text to dense [`Symbol`] handles
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    lookup: HashMap<String, Symbol>,
    entries: Vec<SymbolInfo>,
}

impl SymbolTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a symbol, returning the existing handle for repeated text
    ///
    /// Texts that differ only in spacing around the name or side share a
    /// handle; the first spelling seen is kept.
    pub fn intern(&mut self, text: &str) -> Symbol {
        let info = SymbolInfo::parse(text.trim());
        let key = info.key();
        if let Some(&symbol) = self.lookup.get(&key) {
            return symbol;
        }

        let symbol = Symbol(self.entries.len() as u32);
        self.entries.push(info);
        self.lookup.insert(key, symbol);
        symbol
    }

    /// Find a previously interned symbol
    pub fn get(&self, text: &str) -> Option<Symbol> {
        self.lookup
            .get(&SymbolInfo::parse(text.trim()).key())
            .copied()
    }

    /// Name and side of an interned symbol
    pub fn info(&self, symbol: Symbol) -> Option<&SymbolInfo> {
        self.entries.get(symbol.index())
    }

    /// Full text of an interned symbol
    pub fn text(&self, symbol: Symbol) -> Option<&str> {
        self.info(symbol).map(|info| info.text.as_str())
    }

    /// Number of distinct symbols
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if no symbols have been interned
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all symbols in interning order
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.entries.len()).map(|index| Symbol(index as u32))
    }
}

/// Predicate deciding whether two touching edges fit together
///
/// Called as `matches(placed, neighbour)` where `placed` is the edge of the tile
/// being placed. Implementations are expected to be symmetric.
pub trait EdgeMatcher: Send + Sync {
    /// Test whether two edge symbols match
    fn matches(&self, placed: Symbol, neighbour: Symbol) -> bool;
}

impl<F> EdgeMatcher for F
where
    F: Fn(Symbol, Symbol) -> bool + Send + Sync,
{
    fn matches(&self, placed: Symbol, neighbour: Symbol) -> bool {
        self(placed, neighbour)
    }
}

/// Edges match when they carry the same symbol
#[derive(Debug, Clone, Copy, Default)]
pub struct Identical;

impl EdgeMatcher for Identical {
    fn matches(&self, placed: Symbol, neighbour: Symbol) -> bool {
        placed == neighbour
    }
}

/// Edges match when they carry the two complementary halves of one picture
///
/// A symbol with no declared partner matches nothing, including itself.
#[derive(Debug, Clone, Default)]
pub struct PairedHalves {
    partners: HashMap<Symbol, Symbol>,
}

impl PairedHalves {
    /// Create a rule with no pairs
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare two symbols as complementary halves
    #[must_use]
    pub fn pair(mut self, first: Symbol, second: Symbol) -> Self {
        self.partners.insert(first, second);
        self.partners.insert(second, first);
        self
    }

    /// Pair every symbol with the symbol of the same name on the other side
    ///
    /// # Errors
    ///
    /// Returns `InvalidSymbols` unless the table uses exactly two distinct
    /// sides.
    pub fn from_table(table: &SymbolTable) -> Result<Self> {
        let sides: BTreeSet<&str> = table
            .entries
            .iter()
            .filter_map(|info| info.side.as_deref())
            .collect();

        if sides.len() != 2 {
            return Err(PuzzleError::InvalidSymbols {
                reason: format!(
                    "expected exactly two symbol sides, found {} [{}]",
                    sides.len(),
                    sides.into_iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut by_name: HashMap<&str, Vec<(Symbol, &str)>> = HashMap::new();
        for (symbol, info) in table.symbols().zip(&table.entries) {
            if let Some(side) = info.side.as_deref() {
                by_name
                    .entry(info.name.as_str())
                    .or_default()
                    .push((symbol, side));
            }
        }

        let pairs = by_name
            .values()
            .filter_map(|halves| match halves.as_slice() {
                [(first, first_side), (second, second_side)] if first_side != second_side => {
                    Some((*first, *second))
                }
                _ => None,
            });
        Ok(pairs.fold(Self::new(), |rule, (first, second)| {
            rule.pair(first, second)
        }))
    }

    /// Partner of a symbol, if it has one
    pub fn partner(&self, symbol: Symbol) -> Option<Symbol> {
        self.partners.get(&symbol).copied()
    }
}

impl EdgeMatcher for PairedHalves {
    fn matches(&self, placed: Symbol, neighbour: Symbol) -> bool {
        self.partner(placed) == Some(neighbour)
    }
}
