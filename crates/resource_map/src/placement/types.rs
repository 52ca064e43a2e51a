use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::classifier::ClassifiedResource;
use crate::geometry::{cell_key, CellKey};

/// How a resource got its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Banded grid placement with collision retry. Stable across reflows.
    Grid,
    /// Band center plus jitter, for records that never went through a
    /// placement pass.
    Jittered,
}

/// A classified resource with canvas coordinates. Built once per placement
/// pass and replaced wholesale on the next data load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedResource {
    #[serde(flatten)]
    pub resource: ClassifiedResource,
    pub x: f32,
    pub y: f32,
    pub placement: Placement,
}

impl PositionedResource {
    pub fn cell(&self) -> CellKey {
        cell_key(self.x, self.y)
    }

    pub fn is_grid_placed(&self) -> bool {
        self.placement == Placement::Grid
    }
}

/// Cells claimed during one placement pass. Owned by the pass, never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupiedCells {
    cells: HashSet<CellKey>,
}

impl OccupiedCells {
    pub fn is_occupied(&self, key: CellKey) -> bool {
        self.cells.contains(&key)
    }

    /// Returns `false` if the cell was already taken.
    pub fn mark(&mut self, key: CellKey) -> bool {
        self.cells.insert(key)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Result of one full placement pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacementPass {
    pub positioned: Vec<PositionedResource>,
    pub occupied: OccupiedCells,
    /// Resources that still share a cell after the retry budget ran out.
    pub unresolved: usize,
}
