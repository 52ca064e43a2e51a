use bevy::prelude::*;

use crate::categories::CategoryTables;
use crate::config::VEHICLE_COUNT;
use crate::map_rng::VehicleRng;
use crate::ResourceMapSet;

use super::animator::{AnimatorState, TrafficAnimator};
use super::scheduler::FrameQueue;
use super::spawning::spawn_vehicles;
use super::types::Vehicle;

/// Host commands for the animator (mount / unmount of the map view).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficControl {
    Start,
    Stop,
}

/// Snapshot emitted on every applied logical tick.
#[derive(Event, Debug, Clone)]
pub struct VehiclesMoved {
    pub tick: u64,
    pub vehicles: Vec<Vehicle>,
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct TrafficConfig {
    pub vehicle_count: usize,
    /// Send `TrafficControl::Start` during `Startup`.
    pub autostart: bool,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            vehicle_count: VEHICLE_COUNT,
            autostart: true,
        }
    }
}

fn autostart_traffic(config: Res<TrafficConfig>, mut control: EventWriter<TrafficControl>) {
    if config.autostart {
        control.send(TrafficControl::Start);
    }
}

pub fn handle_traffic_control(
    mut events: EventReader<TrafficControl>,
    time: Res<Time>,
    config: Res<TrafficConfig>,
    tables: Res<CategoryTables>,
    mut rng: ResMut<VehicleRng>,
    mut animator: ResMut<TrafficAnimator>,
    mut queue: ResMut<FrameQueue>,
) {
    for event in events.read() {
        match event {
            TrafficControl::Start => {
                if animator.state() == AnimatorState::Stopped {
                    let vehicles = spawn_vehicles(config.vehicle_count, &tables, &mut rng.0);
                    animator.initialize(vehicles);
                }
                animator.start(&mut *queue, time.elapsed());
            }
            TrafficControl::Stop => animator.stop(&mut *queue),
        }
    }
}

/// Fires the outstanding frame requests for this frame.
pub fn drive_traffic(
    time: Res<Time>,
    mut animator: ResMut<TrafficAnimator>,
    mut queue: ResMut<FrameQueue>,
    mut moved: EventWriter<VehiclesMoved>,
) {
    let now = time.elapsed();
    for request in queue.take_due() {
        if animator.on_frame(request, now, &mut *queue) {
            moved.send(VehiclesMoved {
                tick: animator.logical_ticks(),
                vehicles: animator.vehicles().to_vec(),
            });
        }
    }
}

fn stop_traffic_on_exit(
    mut exit: EventReader<AppExit>,
    mut animator: ResMut<TrafficAnimator>,
    mut queue: ResMut<FrameQueue>,
) {
    if exit.read().next().is_some() {
        animator.stop(&mut *queue);
    }
}

pub struct TrafficPlugin;

impl Plugin for TrafficPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CategoryTables>()
            .init_resource::<TrafficConfig>()
            .init_resource::<TrafficAnimator>()
            .init_resource::<FrameQueue>()
            .add_event::<TrafficControl>()
            .add_event::<VehiclesMoved>()
            .add_systems(Startup, autostart_traffic)
            .add_systems(
                Update,
                (handle_traffic_control, drive_traffic)
                    .chain()
                    .in_set(ResourceMapSet::Animate),
            )
            .add_systems(Last, stop_traffic_on_exit);
    }
}
