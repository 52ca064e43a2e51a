use crate::categories::CategoryTables;
use crate::classifier::ClassifiedResource;
use crate::geometry::CanvasLayout;
use crate::placement::{Placement, PositionedResource};

use super::jitter::JitterSource;

/// One record as it reaches the reflow stage.
#[derive(Debug, Clone, PartialEq)]
pub enum MapEntry {
    /// Went through a placement pass; coordinates are reused as-is.
    Placed(PositionedResource),
    /// Never placed (bootstrap/fallback data); gets band center plus jitter.
    Pending(ClassifiedResource),
}

impl MapEntry {
    pub fn resource(&self) -> &ClassifiedResource {
        match self {
            MapEntry::Placed(p) => &p.resource,
            MapEntry::Pending(r) => r,
        }
    }
}

/// Derive the visible subset for a predicate.
///
/// Placed entries keep their coordinates so markers never jump when the
/// filter changes. Pending entries are jittered around their street anchor on
/// every call, drawing from `jitter`. Input order is preserved and nothing is
/// dropped except by the predicate.
pub fn reflow<F>(
    entries: &[MapEntry],
    tables: &CategoryTables,
    mut predicate: F,
    jitter: &mut dyn JitterSource,
) -> Vec<PositionedResource>
where
    F: FnMut(&ClassifiedResource) -> bool,
{
    let layout = CanvasLayout::new(tables.district_count());

    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| predicate(entry.resource()))
        .map(|(slot, entry)| match entry {
            MapEntry::Placed(positioned) => positioned.clone(),
            MapEntry::Pending(resource) => {
                let district_index = tables.district_index(&resource.district);
                let (x, y) = layout.anchor(district_index, resource.neighborhood_band);
                let (dx, dy) = jitter.offset(slot, resource);
                PositionedResource {
                    resource: resource.clone(),
                    x: x + dx,
                    y: y + dy,
                    placement: Placement::Jittered,
                }
            }
        })
        .collect()
}
