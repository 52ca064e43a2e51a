use bevy::prelude::*;

use crate::catalog::{PlacedResources, VisibleResources};
use crate::categories::CategoryTables;
use crate::classifier::ClassifiedResource;
use crate::map_rng::JitterRng;
use crate::ResourceMapSet;

use super::filter::ResourceFilter;
use super::jitter::{JitterMode, RerollJitter, StableJitter};
use super::pass::reflow;

/// Recomputes the visible subset when the filter or the placed list changes.
pub fn reflow_visible(
    placed: Res<PlacedResources>,
    filter: Res<ResourceFilter>,
    mode: Res<JitterMode>,
    tables: Res<CategoryTables>,
    mut rng: ResMut<JitterRng>,
    mut visible: ResMut<VisibleResources>,
) {
    if !placed.is_changed() && !filter.is_changed() && !mode.is_changed() {
        return;
    }

    let predicate = |r: &ClassifiedResource| filter.matches(r);
    visible.resources = match *mode {
        JitterMode::Reroll => reflow(
            &placed.entries,
            &tables,
            predicate,
            &mut RerollJitter(&mut rng.0),
        ),
        JitterMode::Stable { seed } => {
            reflow(&placed.entries, &tables, predicate, &mut StableJitter { seed })
        }
    };

    debug!(
        "reflow: {} of {} resources visible",
        visible.resources.len(),
        placed.entries.len()
    );
}

pub struct ReflowPlugin;

impl Plugin for ReflowPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ResourceFilter>()
            .init_resource::<JitterMode>()
            .init_resource::<VisibleResources>()
            .add_systems(Update, reflow_visible.in_set(ResourceMapSet::Reflow));
    }
}
