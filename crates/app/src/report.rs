//! JSON summary printed after a headless run.

use bevy::prelude::*;
use serde::Serialize;

use resource_map::catalog::VisibleResources;
use resource_map::categories::CategoryTables;
use resource_map::placement::PositionedResource;
use resource_map::reflow::district_counts;
use resource_map::traffic::{TrafficAnimator, Vehicle, VehiclesMoved};

/// Counts `VehiclesMoved` events seen during the run.
#[derive(Resource, Debug, Default)]
pub struct MoveCounter {
    pub events: u64,
}

pub fn count_moves(mut events: EventReader<VehiclesMoved>, mut counter: ResMut<MoveCounter>) {
    counter.events += events.read().count() as u64;
}

#[derive(Debug, Serialize)]
pub struct DistrictCount {
    pub district: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub frames: u32,
    pub visible: Vec<PositionedResource>,
    pub district_counts: Vec<DistrictCount>,
    pub logical_updates: u64,
    pub vehicles: Vec<Vehicle>,
}

impl RunReport {
    pub fn collect(world: &World, frames: u32) -> Self {
        let visible = world
            .get_resource::<VisibleResources>()
            .map(|v| v.resources.clone())
            .unwrap_or_default();
        let district_counts = world
            .get_resource::<CategoryTables>()
            .map(|tables| district_counts(&visible, tables))
            .unwrap_or_default()
            .into_iter()
            .map(|(district, count)| DistrictCount { district, count })
            .collect();
        let logical_updates = world
            .get_resource::<MoveCounter>()
            .map_or(0, |c| c.events);
        let vehicles = world
            .get_resource::<TrafficAnimator>()
            .map(|a| a.vehicles().to_vec())
            .unwrap_or_default();

        Self {
            frames,
            visible,
            district_counts,
            logical_updates,
            vehicles,
        }
    }
}
