use std::time::Duration;

pub const CANVAS_WIDTH: f32 = 1600.0;
pub const CANVAS_HEIGHT: f32 = 1200.0;

/// Edge length of one occupied-cell quantization unit.
pub const GRID_SIZE: f32 = 50.0;

/// Buildings per row inside a district/band block (`col = -1, 0, +1`).
pub const ROW_LENGTH: usize = 3;
pub const COLUMN_SPACING: f32 = 80.0;
/// Kept below `COLUMN_SPACING` so blocks grow sideways before they grow down.
pub const ROW_HEIGHT: f32 = 30.0;

/// Keep-out margin inside every district and band edge.
pub const BAND_INSET: f32 = 20.0;

/// Resources one district/band block seats in distinct cells, with no
/// unresolved overlap, on the default five-column canvas. Beyond this the
/// placer degrades to shared cells.
pub const BLOCK_CAPACITY: usize = 28;

/// Retry budget for the collision spiral. The last candidate is accepted even
/// if it still collides.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10;

/// Half-ranges of the fallback jitter applied to records that were never
/// grid-placed.
pub const JITTER_X: f32 = 50.0;
pub const JITTER_Y: f32 = 25.0;

pub const LOGICAL_TICK_RATE_HZ: u32 = 15;
pub const VEHICLE_COUNT: usize = 7;

/// Speed range (canvas units per logical tick) drawn once per vehicle.
pub const VEHICLE_MIN_SPEED: f32 = 2.0;
pub const VEHICLE_MAX_SPEED: f32 = 5.0;

/// Interval between two applied logical ticks.
pub fn logical_tick_interval() -> Duration {
    Duration::from_secs(1) / LOGICAL_TICK_RATE_HZ
}
