//! Layout and traffic-animation engine for the neighborhood resources map.
//!
//! Raw records are classified into a district and a business-stage band,
//! grid-placed once per data load, and filtered into a visible subset on every
//! filter change. Independently, a small set of decorative vehicles loops along
//! fixed streets at a throttled logical rate.
//!
//! Every operation is available as a plain function; the plugins below wire
//! them into a Bevy `App` for hosts that drive the map from a frame loop.

use bevy::prelude::*;

pub mod catalog;
pub mod categories;
pub mod classifier;
pub mod config;
pub mod geometry;
pub mod map_rng;
pub mod placement;
pub mod raw;
pub mod reflow;
pub mod traffic;

#[cfg(test)]
pub mod test_harness;

/// Per-frame ordering: a new data load is placed before the visible subset
/// is derived from it; animation runs last and reads neither.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceMapSet {
    Load,
    Reflow,
    Animate,
}

pub struct ResourceMapPlugin;

impl Plugin for ResourceMapPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                ResourceMapSet::Load,
                ResourceMapSet::Reflow,
                ResourceMapSet::Animate,
            )
                .chain(),
        );

        app.add_plugins((
            map_rng::MapRngPlugin,
            placement::PlacementPlugin,
            reflow::ReflowPlugin,
            traffic::TrafficPlugin,
        ));
    }
}
