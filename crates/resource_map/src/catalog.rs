use bevy::prelude::*;

use crate::placement::PositionedResource;
use crate::raw::RawResource;
use crate::reflow::MapEntry;

/// Where the current record list came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// A completed data load. Records are grid-placed once per load.
    #[default]
    Live,
    /// Bootstrap data shown before (or instead of) a live load. Records skip
    /// grid placement and are jittered around their band centers on reflow.
    Fallback,
}

/// The record list handed over by the data-loading layer. Replacing or
/// mutating it triggers a new placement pass.
#[derive(Resource, Debug, Clone, Default)]
pub struct ResourceCatalog {
    pub records: Vec<RawResource>,
    pub source: CatalogSource,
}

impl ResourceCatalog {
    pub fn live(records: Vec<RawResource>) -> Self {
        Self {
            records,
            source: CatalogSource::Live,
        }
    }

    pub fn fallback(records: Vec<RawResource>) -> Self {
        Self {
            records,
            source: CatalogSource::Fallback,
        }
    }
}

/// Output of the latest placement pass, in catalog order.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlacedResources {
    pub entries: Vec<MapEntry>,
}

/// Subset currently shown on the map, recomputed on every filter change.
#[derive(Resource, Debug, Clone, Default)]
pub struct VisibleResources {
    pub resources: Vec<PositionedResource>,
}
