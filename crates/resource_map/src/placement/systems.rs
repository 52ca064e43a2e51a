use bevy::prelude::*;

use crate::catalog::{CatalogSource, PlacedResources, ResourceCatalog};
use crate::categories::CategoryTables;
use crate::classifier::classify_all;
use crate::reflow::MapEntry;
use crate::ResourceMapSet;

use super::placer::GridPlacer;

/// Summary of the most recent placement pass.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementStats {
    pub passes: u32,
    pub placed: usize,
    pub pending: usize,
    pub occupied_cells: usize,
    pub unresolved: usize,
}

/// Classifies and places the catalog whenever it (or the tables) change.
pub fn place_catalog(
    catalog: Res<ResourceCatalog>,
    tables: Res<CategoryTables>,
    mut placed: ResMut<PlacedResources>,
    mut stats: ResMut<PlacementStats>,
) {
    if !catalog.is_changed() && !tables.is_changed() {
        return;
    }

    let classified = classify_all(&catalog.records, &tables);
    let passes = stats.passes + 1;

    match catalog.source {
        CatalogSource::Live => {
            let pass = GridPlacer::new(&tables).place(&classified);
            *stats = PlacementStats {
                passes,
                placed: pass.positioned.len(),
                pending: 0,
                occupied_cells: pass.occupied.len(),
                unresolved: pass.unresolved,
            };
            placed.entries = pass.positioned.into_iter().map(MapEntry::Placed).collect();
        }
        CatalogSource::Fallback => {
            *stats = PlacementStats {
                passes,
                placed: 0,
                pending: classified.len(),
                occupied_cells: 0,
                unresolved: 0,
            };
            placed.entries = classified.into_iter().map(MapEntry::Pending).collect();
        }
    }

    info!(
        "resource map: pass {} over {} records ({} placed, {} pending, {} overlapping)",
        stats.passes,
        catalog.records.len(),
        stats.placed,
        stats.pending,
        stats.unresolved
    );
}

pub struct PlacementPlugin;

impl Plugin for PlacementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CategoryTables>()
            .init_resource::<ResourceCatalog>()
            .init_resource::<PlacedResources>()
            .init_resource::<PlacementStats>()
            .add_systems(Update, place_catalog.in_set(ResourceMapSet::Load));
    }
}
