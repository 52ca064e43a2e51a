use bevy::prelude::*;

use crate::categories::{CategoryTables, NeighborhoodBand};
use crate::classifier::ClassifiedResource;
use crate::placement::PositionedResource;

/// Active search/filter state. An empty filter matches everything.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    /// Case-insensitive text matched against name, type, focus area, detail
    /// and counties served.
    pub query: String,
    pub district: Option<String>,
    pub band: Option<NeighborhoodBand>,
}

impl ResourceFilter {
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.district.is_none() && self.band.is_none()
    }

    pub fn matches(&self, resource: &ClassifiedResource) -> bool {
        if let Some(district) = &self.district {
            if &resource.district != district {
                return false;
            }
        }
        if let Some(band) = self.band {
            if resource.neighborhood_band != band {
                return false;
            }
        }

        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let raw = &resource.raw;
        [
            raw.name.as_deref(),
            raw.resource_type.as_deref(),
            raw.focus_area.as_deref(),
            raw.detail.as_deref(),
            raw.counties_served.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Visible resources per district, in canvas order. Districts with no
/// resources are reported with a zero count.
pub fn district_counts(
    resources: &[PositionedResource],
    tables: &CategoryTables,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = tables
        .district_names()
        .map(|name| (name.to_string(), 0))
        .collect();
    for resource in resources {
        let index = tables.district_index(&resource.resource.district);
        counts[index].1 += 1;
    }
    counts
}
