/// Bitset over tile ids for used-tile tracking
pub mod bitset;
/// Cooperative cancellation and progress reporting
pub mod control;
/// Puzzle orchestration and solve entry points
pub mod game;
/// Rare-symbol border heuristic
pub mod rarity;
/// Explicit-stack backtracking search engine
pub mod search;
