use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::classifier::ClassifiedResource;
use crate::config::{JITTER_X, JITTER_Y};

/// Supplies the offset added to a band center for records that were never
/// grid-placed. `slot` is the record's position in the full catalog, which
/// does not change when the filter does.
pub trait JitterSource {
    fn offset(&mut self, slot: usize, resource: &ClassifiedResource) -> (f32, f32);
}

/// Fresh offsets on every call, so unplaced markers move on each reflow.
pub struct RerollJitter<R: Rng>(pub R);

impl<R: Rng> JitterSource for RerollJitter<R> {
    fn offset(&mut self, _slot: usize, _resource: &ClassifiedResource) -> (f32, f32) {
        (
            self.0.gen_range(-JITTER_X..=JITTER_X),
            self.0.gen_range(-JITTER_Y..=JITTER_Y),
        )
    }
}

/// Offsets derived from a seed and the record's identity (catalog slot, name,
/// district and band): identical on every reflow for the same record, and
/// distinct for records that share a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StableJitter {
    pub seed: u64,
}

impl JitterSource for StableJitter {
    fn offset(&mut self, slot: usize, resource: &ClassifiedResource) -> (f32, f32) {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ record_hash(slot, resource));
        RerollJitter(&mut rng).offset(slot, resource)
    }
}

/// Which jitter the reflow system uses for unplaced records.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JitterMode {
    #[default]
    Reroll,
    Stable { seed: u64 },
}

/// FNV-1a over the record's identity; only needs to be stable across runs
/// and platforms.
fn record_hash(slot: usize, resource: &ClassifiedResource) -> u64 {
    [
        resource.name(),
        resource.district.as_str(),
        resource.neighborhood_band.name(),
    ]
    .into_iter()
    .flat_map(|part| part.bytes().chain([0xff]))
    .chain((slot as u64).to_le_bytes())
    .fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ byte as u64).wrapping_mul(0x0100_0000_01b3)
    })
}
