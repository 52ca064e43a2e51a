use crate::config::{GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::geometry::{cell_key, Bounds, CellKey};

use super::types::OccupiedCells;

/// Right, down, left, up (canvas y grows downward).
const SPIRAL_DIRECTIONS: [(f32, f32); 4] = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];

/// Candidate offsets (in canvas units) tried after the preferred cell is
/// taken: every direction at distance 1, then every direction at distance 2,
/// and so on, for `MAX_PLACEMENT_ATTEMPTS` candidates.
pub fn spiral_offsets() -> impl Iterator<Item = (f32, f32)> {
    (0..MAX_PLACEMENT_ATTEMPTS).map(|attempt| {
        let distance = (attempt / SPIRAL_DIRECTIONS.len() + 1) as f32;
        let (dx, dy) = SPIRAL_DIRECTIONS[attempt % SPIRAL_DIRECTIONS.len()];
        (dx * distance * GRID_SIZE, dy * distance * GRID_SIZE)
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralOutcome {
    pub x: f32,
    pub y: f32,
    pub cell: CellKey,
    /// Number of spiral candidates examined (0 when the preferred cell was free).
    pub attempts: usize,
    pub collided: bool,
}

/// Find a free cell near `(x, y)` inside `bounds`.
///
/// The preferred point is clamped first. If every candidate is taken the
/// preferred point is returned with `collided` set.
pub fn resolve_collision(x: f32, y: f32, bounds: &Bounds, occupied: &OccupiedCells) -> SpiralOutcome {
    let (x, y) = bounds.clamp(x, y);
    let cell = cell_key(x, y);
    if !occupied.is_occupied(cell) {
        return SpiralOutcome {
            x,
            y,
            cell,
            attempts: 0,
            collided: false,
        };
    }

    for (attempt, (dx, dy)) in spiral_offsets().enumerate() {
        let (cx, cy) = bounds.clamp(x + dx, y + dy);
        let candidate = cell_key(cx, cy);
        if !occupied.is_occupied(candidate) {
            return SpiralOutcome {
                x: cx,
                y: cy,
                cell: candidate,
                attempts: attempt + 1,
                collided: false,
            };
        }
    }

    SpiralOutcome {
        x,
        y,
        cell,
        attempts: MAX_PLACEMENT_ATTEMPTS,
        collided: true,
    }
}
