use std::time::Duration;

use bevy::prelude::*;

use crate::config::logical_tick_interval;

use super::scheduler::{FrameRequest, FrameScheduler};
use super::throttle::FrameThrottle;
use super::types::Vehicle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimatorState {
    #[default]
    Stopped,
    /// Vehicles exist but no frame has been requested yet.
    Initialized,
    /// A frame request is outstanding at all times.
    Running,
}

/// Owns the vehicle set and advances it on throttled frame callbacks.
///
/// `Stopped -> Initialized -> Running -> Stopped`. While running exactly one
/// frame request is outstanding; `stop` cancels it, and frames carrying any
/// other request are ignored, so nothing moves after teardown.
#[derive(Resource, Debug)]
pub struct TrafficAnimator {
    state: AnimatorState,
    vehicles: Vec<Vehicle>,
    throttle: FrameThrottle,
    pending: Option<FrameRequest>,
    logical_ticks: u64,
}

impl Default for TrafficAnimator {
    fn default() -> Self {
        Self::new(logical_tick_interval())
    }
}

impl TrafficAnimator {
    pub fn new(interval: Duration) -> Self {
        Self {
            state: AnimatorState::Stopped,
            vehicles: Vec::new(),
            throttle: FrameThrottle::new(interval),
            pending: None,
            logical_ticks: 0,
        }
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Logical updates applied since the last `initialize`.
    pub fn logical_ticks(&self) -> u64 {
        self.logical_ticks
    }

    pub fn pending_request(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Take ownership of a freshly spawned vehicle set. Ignored unless stopped.
    pub fn initialize(&mut self, vehicles: Vec<Vehicle>) -> bool {
        if self.state != AnimatorState::Stopped {
            return false;
        }
        self.vehicles = vehicles;
        self.logical_ticks = 0;
        self.state = AnimatorState::Initialized;
        true
    }

    /// Begin ticking from `now`. Ignored unless initialized.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler, now: Duration) -> bool {
        if self.state != AnimatorState::Initialized {
            return false;
        }
        self.throttle.reset(now);
        self.pending = Some(scheduler.request_frame());
        self.state = AnimatorState::Running;
        info!("traffic: started with {} vehicles", self.vehicles.len());
        true
    }

    /// Frame callback. Returns `true` when a logical update was applied.
    ///
    /// Every accepted frame re-requests the next one, whether or not the
    /// throttle let an update through.
    pub fn on_frame(
        &mut self,
        request: FrameRequest,
        now: Duration,
        scheduler: &mut dyn FrameScheduler,
    ) -> bool {
        if self.state != AnimatorState::Running || self.pending != Some(request) {
            return false;
        }

        let applied = self.throttle.try_advance(now);
        if applied {
            for vehicle in &mut self.vehicles {
                vehicle.advance();
            }
            self.logical_ticks += 1;
        }
        self.pending = Some(scheduler.request_frame());
        applied
    }

    /// Cancel the outstanding frame and drop the vehicle set.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(request) = self.pending.take() {
            scheduler.cancel_frame(request);
        }
        if self.state != AnimatorState::Stopped {
            info!(
                "traffic: stopped after {} logical ticks",
                self.logical_ticks
            );
        }
        self.vehicles.clear();
        self.state = AnimatorState::Stopped;
    }
}
