use crate::categories::NeighborhoodBand;
use crate::config::{BAND_INSET, CANVAS_HEIGHT, CANVAS_WIDTH, GRID_SIZE};

/// Axis-aligned rectangle in canvas space, inclusive on all edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Bounds {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Nearest point inside the rectangle. An inverted axis resolves to its
    /// minimum instead of panicking.
    pub fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.min(self.max_x).max(self.min_x),
            y.min(self.max_y).max(self.min_y),
        )
    }

    /// Move every edge inward by `inset`. An axis narrower than twice the
    /// inset collapses to its center line.
    pub fn shrink(&self, inset: f32) -> Bounds {
        let (min_x, max_x) = shrink_axis(self.min_x, self.max_x, inset);
        let (min_y, max_y) = shrink_axis(self.min_y, self.max_y, inset);
        Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

fn shrink_axis(min: f32, max: f32, inset: f32) -> (f32, f32) {
    if max - min >= 2.0 * inset {
        (min + inset, max - inset)
    } else {
        let center = (min + max) / 2.0;
        (center, center)
    }
}

/// Quantized grid cell used for occupancy bookkeeping.
pub type CellKey = (i32, i32);

pub fn cell_key(x: f32, y: f32) -> CellKey {
    let gx = (x / GRID_SIZE).floor() as i32;
    let gy = (y / GRID_SIZE).floor() as i32;
    (gx, gy)
}

/// Partition of the canvas into district columns and neighborhood rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub width: f32,
    pub height: f32,
    pub district_count: usize,
}

impl CanvasLayout {
    pub fn new(district_count: usize) -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            district_count: district_count.max(1),
        }
    }

    pub fn district_width(&self) -> f32 {
        self.width / self.district_count as f32
    }

    pub fn band_height(&self) -> f32 {
        self.height / NeighborhoodBand::ALL.len() as f32
    }

    /// Horizontal center of a district column.
    pub fn district_x(&self, district_index: usize) -> f32 {
        let index = district_index.min(self.district_count - 1);
        (index as f32 + 0.5) * self.district_width()
    }

    /// Vertical center of a neighborhood band (its street).
    pub fn street_y(&self, band: NeighborhoodBand) -> f32 {
        (band.row() as f32 + 0.5) * self.band_height()
    }

    /// Street anchor: the center of a district/band intersection.
    pub fn anchor(&self, district_index: usize, band: NeighborhoodBand) -> (f32, f32) {
        (self.district_x(district_index), self.street_y(band))
    }

    /// Full rectangle owned by a district/band intersection.
    pub fn block(&self, district_index: usize, band: NeighborhoodBand) -> Bounds {
        let index = district_index.min(self.district_count - 1);
        let dw = self.district_width();
        let bh = self.band_height();
        Bounds {
            min_x: index as f32 * dw,
            min_y: band.row() as f32 * bh,
            max_x: (index + 1) as f32 * dw,
            max_y: (band.row() + 1) as f32 * bh,
        }
    }

    /// Block rectangle minus the keep-out margin.
    pub fn buildable(&self, district_index: usize, band: NeighborhoodBand) -> Bounds {
        self.block(district_index, band).shrink(BAND_INSET)
    }
}
