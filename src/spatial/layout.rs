//! Immutable adjacency lookup built once per topology
//!
//! Search code addresses cells by their position in the visiting order
//! ("slot") rather than by coordinate. This module resolves every slot's
//! neighbours up front so the hot path never touches coordinates or hashing.

use std::collections::HashMap;

use crate::io::error::Result;
use crate::spatial::topology::{Location, Neighbor, Topology, TopologyConfig};

/// Per-slot neighbour tables for one topology
#[derive(Debug)]
pub struct Layout {
    topology: Box<dyn Topology>,
    config: Option<TopologyConfig>,
    locations: Vec<Location>,
    slots: HashMap<Location, usize>,
    adjacent: Vec<Vec<Neighbor>>,
    preceding: Vec<Vec<Neighbor>>,
    border: Vec<Vec<usize>>,
    inner_edges: usize,
}

impl Layout {
    /// Build the topology described by `config` and index it
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration is out of range.
    pub fn new(config: TopologyConfig) -> Result<Self> {
        let mut layout = Self::from_topology(config.build()?);
        layout.config = Some(config);
        Ok(layout)
    }

    /// Index an arbitrary topology
    pub fn from_topology(topology: Box<dyn Topology>) -> Self {
        let locations = topology.locations();
        let slots: HashMap<Location, usize> = locations
            .iter()
            .enumerate()
            .map(|(slot, &location)| (location, slot))
            .collect();

        let mut adjacent = Vec::with_capacity(locations.len());
        let mut preceding = Vec::with_capacity(locations.len());
        let mut border = Vec::with_capacity(locations.len());
        let mut inner_edges = 0;

        for &location in &locations {
            let neighbors = topology.adjacent(location);
            let open_edges: Vec<usize> = (0..topology.edges_per_cell())
                .filter(|&direction| {
                    neighbors
                        .iter()
                        .all(|neighbor| neighbor.self_edge != direction)
                })
                .collect();

            inner_edges += neighbors.len();
            preceding.push(topology.neighbors_of(location));
            adjacent.push(neighbors);
            border.push(open_edges);
        }

        Self {
            topology,
            config: None,
            locations,
            slots,
            adjacent,
            preceding,
            border,
            inner_edges,
        }
    }

    /// Underlying topology
    pub fn topology(&self) -> &dyn Topology {
        self.topology.as_ref()
    }

    /// Configuration the layout was built from, if it came from one
    pub const fn config(&self) -> Option<TopologyConfig> {
        self.config
    }

    /// Edges per cell
    pub fn edges_per_cell(&self) -> usize {
        self.topology.edges_per_cell()
    }

    /// Number of cells
    pub const fn len(&self) -> usize {
        self.locations.len()
    }

    /// Test if the grid has no cells
    pub const fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Locations in visiting order
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location of a slot
    pub fn location(&self, slot: usize) -> Option<Location> {
        self.locations.get(slot).copied()
    }

    /// Slot of a location
    pub fn slot(&self, location: Location) -> Option<usize> {
        self.slots.get(&location).copied()
    }

    /// Every neighbour of a slot
    pub fn adjacent(&self, slot: usize) -> &[Neighbor] {
        self.adjacent.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Neighbours visited before a slot
    pub fn preceding(&self, slot: usize) -> &[Neighbor] {
        self.preceding.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Edges of a slot that face off the grid
    pub fn border_edges(&self, slot: usize) -> &[usize] {
        self.border.get(slot).map_or(&[], Vec::as_slice)
    }

    /// Count of edge slots that face another cell
    ///
    /// Each shared boundary is counted once from each side.
    pub const fn inner_edges(&self) -> usize {
        self.inner_edges
    }
}
