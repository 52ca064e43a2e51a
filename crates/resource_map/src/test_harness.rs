//! # TestMap — headless harness for the resource map plugins
//!
//! Wraps `bevy::app::App` + `MinimalPlugins` + `ResourceMapPlugin` with a
//! manual clock, so every `tick()` advances exactly one 60 Hz frame.

use std::time::Duration;

use bevy::app::App;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use serde_json::Value;

use crate::catalog::{PlacedResources, ResourceCatalog, VisibleResources};
use crate::map_rng::{JitterRng, VehicleRng};
use crate::placement::{PlacementStats, PositionedResource};
use crate::raw::raw_resources_from_value;
use crate::reflow::{JitterMode, ResourceFilter};
use crate::traffic::{FrameQueue, TrafficAnimator, TrafficConfig, TrafficControl, VehiclesMoved};
use crate::ResourceMapPlugin;

pub const FRAME: Duration = Duration::from_nanos(16_666_667);

/// Every `VehiclesMoved` event observed so far.
#[derive(Resource, Default)]
pub struct MovedLog(pub Vec<VehiclesMoved>);

fn record_moves(mut events: EventReader<VehiclesMoved>, mut log: ResMut<MovedLog>) {
    log.0.extend(events.read().cloned());
}

pub struct TestMap {
    app: App,
}

impl TestMap {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Empty catalog, traffic not started.
    pub fn new() -> Self {
        Self::build(false)
    }

    /// Empty catalog, traffic started during `Startup`.
    pub fn with_traffic() -> Self {
        Self::build(true)
    }

    fn build(autostart: bool) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
        app.insert_resource(TrafficConfig {
            autostart,
            ..Default::default()
        });
        app.add_plugins(ResourceMapPlugin);
        app.init_resource::<MovedLog>();
        app.add_systems(PostUpdate, record_moves);

        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builder pattern)
    // -----------------------------------------------------------------------

    pub fn with_seeds(mut self, vehicle_seed: u64, jitter_seed: u64) -> Self {
        let world = self.app.world_mut();
        world.insert_resource(VehicleRng::from_seed_u64(vehicle_seed));
        world.insert_resource(JitterRng::from_seed_u64(jitter_seed));
        self
    }

    pub fn with_jitter_mode(mut self, mode: JitterMode) -> Self {
        self.app.world_mut().insert_resource(mode);
        self
    }

    // -----------------------------------------------------------------------
    // Host actions (each runs one frame)
    // -----------------------------------------------------------------------

    /// Deliver a live data load.
    pub fn load(&mut self, records: Value) -> &mut Self {
        let catalog = ResourceCatalog::live(raw_resources_from_value(&records));
        self.app.world_mut().insert_resource(catalog);
        self.tick()
    }

    /// Deliver bootstrap data that never goes through grid placement.
    pub fn load_fallback(&mut self, records: Value) -> &mut Self {
        let catalog = ResourceCatalog::fallback(raw_resources_from_value(&records));
        self.app.world_mut().insert_resource(catalog);
        self.tick()
    }

    pub fn set_filter(&mut self, filter: ResourceFilter) -> &mut Self {
        *self.app.world_mut().resource_mut::<ResourceFilter>() = filter;
        self.tick()
    }

    pub fn start_traffic(&mut self) -> &mut Self {
        self.app.world_mut().send_event(TrafficControl::Start);
        self.tick()
    }

    pub fn stop_traffic(&mut self) -> &mut Self {
        self.app.world_mut().send_event(TrafficControl::Stop);
        self.tick()
    }

    pub fn exit(&mut self) -> &mut Self {
        self.app.world_mut().send_event(AppExit::Success);
        self.tick()
    }

    // -----------------------------------------------------------------------
    // Time
    // -----------------------------------------------------------------------

    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    pub fn tick_frames(&mut self, frames: u32) -> &mut Self {
        for _ in 0..frames {
            self.app.update();
        }
        self
    }

    /// Advance `duration` worth of 60 Hz frames.
    pub fn run_for(&mut self, duration: Duration) -> &mut Self {
        let frames = (duration.as_nanos() / FRAME.as_nanos()) as u32;
        self.tick_frames(frames)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn resource<R: Resource>(&self) -> &R {
        self.app.world().resource::<R>()
    }

    pub fn visible(&self) -> &[PositionedResource] {
        &self.resource::<VisibleResources>().resources
    }

    pub fn placed(&self) -> &PlacedResources {
        self.resource::<PlacedResources>()
    }

    pub fn stats(&self) -> &PlacementStats {
        self.resource::<PlacementStats>()
    }

    pub fn animator(&self) -> &TrafficAnimator {
        self.resource::<TrafficAnimator>()
    }

    pub fn frame_queue(&self) -> &FrameQueue {
        self.resource::<FrameQueue>()
    }

    pub fn moves(&self) -> &[VehiclesMoved] {
        &self.resource::<MovedLog>().0
    }

    /// Position of a visible resource by name.
    pub fn position_of(&self, name: &str) -> Option<(f32, f32)> {
        self.visible()
            .iter()
            .find(|p| p.resource.name() == name)
            .map(|p| (p.x, p.y))
    }
}

impl Default for TestMap {
    fn default() -> Self {
        Self::new()
    }
}
