mod placer;
mod spiral;
mod systems;
mod types;

pub use placer::{place, GridPlacer};
pub use spiral::{resolve_collision, spiral_offsets, SpiralOutcome};
pub use systems::{place_catalog, PlacementPlugin, PlacementStats};
pub use types::{OccupiedCells, Placement, PlacementPass, PositionedResource};
