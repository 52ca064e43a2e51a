use std::collections::HashMap;

use bevy::prelude::*;

use crate::categories::{CategoryTables, NeighborhoodBand};
use crate::classifier::ClassifiedResource;
use crate::config::{COLUMN_SPACING, ROW_HEIGHT, ROW_LENGTH};
use crate::geometry::CanvasLayout;

use super::spiral::resolve_collision;
use super::types::{OccupiedCells, Placement, PlacementPass, PositionedResource};

/// Banded grid placement over a fixed canvas.
///
/// Each resource is laid out in its `(district, band)` block: rows of three
/// around the street anchor, rows stepping downward while they fit the block
/// and then stacking upward above the street. A taken cell triggers the
/// retry spiral, clamped to the block's buildable area. The pass is pure: no
/// randomness, no clock, no state kept between calls.
pub struct GridPlacer<'a> {
    tables: &'a CategoryTables,
    layout: CanvasLayout,
}

impl<'a> GridPlacer<'a> {
    pub fn new(tables: &'a CategoryTables) -> Self {
        Self {
            tables,
            layout: CanvasLayout::new(tables.district_count()),
        }
    }

    pub fn layout(&self) -> CanvasLayout {
        self.layout
    }

    /// Place every resource. Output order matches input order.
    pub fn place(&self, resources: &[ClassifiedResource]) -> PlacementPass {
        let mut occupied = OccupiedCells::default();
        let mut group_counts: HashMap<(usize, NeighborhoodBand), usize> = HashMap::new();
        let mut positioned = Vec::with_capacity(resources.len());
        let mut unresolved = 0;

        for resource in resources {
            let district_index = self.tables.district_index(&resource.district);
            let band = resource.neighborhood_band;

            let slot = group_counts.entry((district_index, band)).or_insert(0);
            let index = *slot;
            *slot += 1;

            let (anchor_x, anchor_y) = self.layout.anchor(district_index, band);
            let bounds = self.layout.buildable(district_index, band);
            let col = (index % ROW_LENGTH) as f32 - 1.0;
            let x = anchor_x + col * COLUMN_SPACING;
            let y = anchor_y + row_offset(index / ROW_LENGTH, bounds.max_y - anchor_y);

            let outcome = resolve_collision(x, y, &bounds, &occupied);
            if outcome.collided {
                unresolved += 1;
                warn!(
                    "placement: '{}' still overlaps cell {:?} in {} / {} after {} attempts",
                    resource.name(),
                    outcome.cell,
                    resource.district,
                    band,
                    outcome.attempts
                );
            }
            occupied.mark(outcome.cell);

            positioned.push(PositionedResource {
                resource: resource.clone(),
                x: outcome.x,
                y: outcome.y,
                placement: Placement::Grid,
            });
        }

        debug!(
            "placement: {} resources in {} groups, {} cells, {} unresolved",
            positioned.len(),
            group_counts.len(),
            occupied.len(),
            unresolved
        );

        PlacementPass {
            positioned,
            occupied,
            unresolved,
        }
    }
}

/// Vertical offset of `row` from the street. Rows step down while the block
/// has `room_below`, then continue upward above the street.
fn row_offset(row: usize, room_below: f32) -> f32 {
    let rows_below = (room_below.max(0.0) / ROW_HEIGHT).floor() as usize + 1;
    if row < rows_below {
        row as f32 * ROW_HEIGHT
    } else {
        -((row - rows_below + 1) as f32) * ROW_HEIGHT
    }
}

/// Place a classified list with the given tables, discarding the pass
/// bookkeeping.
pub fn place(resources: &[ClassifiedResource], tables: &CategoryTables) -> Vec<PositionedResource> {
    GridPlacer::new(tables).place(resources).positioned
}
