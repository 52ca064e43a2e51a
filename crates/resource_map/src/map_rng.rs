//! Seeded RNG resources for the map.
//!
//! The two sources of randomness are kept apart: `VehicleRng` is consumed only
//! when vehicles are created (path, street and speed are fixed for the
//! vehicle's lifetime), while `JitterRng` is drawn from on every reflow of
//! records that were never grid-placed. Both wrap `ChaCha8Rng` so tests and
//! hosts can pin them to a seed.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const DEFAULT_VEHICLE_SEED: u64 = 7;
const DEFAULT_JITTER_SEED: u64 = 42;

/// Randomness assigned once, at vehicle creation.
#[derive(Resource)]
pub struct VehicleRng(pub ChaCha8Rng);

impl Default for VehicleRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_VEHICLE_SEED)
    }
}

impl VehicleRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Randomness re-rolled on every reflow.
#[derive(Resource)]
pub struct JitterRng(pub ChaCha8Rng);

impl Default for JitterRng {
    fn default() -> Self {
        Self::from_seed_u64(DEFAULT_JITTER_SEED)
    }
}

impl JitterRng {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

pub struct MapRngPlugin;

impl Plugin for MapRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VehicleRng>().init_resource::<JitterRng>();
    }
}
