use serde::{Deserialize, Serialize};

use crate::categories::{CategoryTables, NeighborhoodBand, OTHER_DISTRICT, TOWN_SQUARE};
use crate::raw::RawResource;

/// A raw record with its map district, neighborhood band and icon resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedResource {
    #[serde(flatten)]
    pub raw: RawResource,
    pub district: String,
    pub neighborhood_band: NeighborhoodBand,
    pub icon: String,
}

impl ClassifiedResource {
    pub fn name(&self) -> &str {
        self.raw.name_or_empty()
    }
}

/// Resolve district, band and icon for one record.
///
/// Total over every input: unknown types land in `Other` with the default
/// icon, unknown stages land in a default band.
pub fn classify(raw: &RawResource, tables: &CategoryTables) -> ClassifiedResource {
    let resource_type = raw.type_or_empty();

    let district = if tables.has_town_square() && tables.is_town_square_pin(raw.name_or_empty())
    {
        TOWN_SQUARE
    } else {
        tables
            .district_for_type(resource_type)
            .unwrap_or(OTHER_DISTRICT)
    };

    ClassifiedResource {
        raw: raw.clone(),
        district: district.to_string(),
        neighborhood_band: classify_stage(raw.business_stage.as_deref()),
        icon: tables.icon_for_type(resource_type).to_string(),
    }
}

pub fn classify_all(raws: &[RawResource], tables: &CategoryTables) -> Vec<ClassifiedResource> {
    raws.iter().map(|raw| classify(raw, tables)).collect()
}

/// Map a free-text business stage onto a band.
///
/// Substrings are tested in priority order, so `"Ideation, Early Stage"` is
/// Ideation. Missing, blank and `"all"` mean Early Stage; any other
/// unrecognized text falls through to Ideation.
pub fn classify_stage(stage: Option<&str>) -> NeighborhoodBand {
    let stage = stage.unwrap_or("").trim().to_lowercase();

    if stage.contains("ideation") {
        NeighborhoodBand::Ideation
    } else if stage.contains("early") || stage == "early stage" {
        NeighborhoodBand::EarlyStage
    } else if stage.contains("growth") {
        NeighborhoodBand::Growth
    } else if stage.contains("established") {
        NeighborhoodBand::Established
    } else if stage.is_empty() || stage == "all" {
        NeighborhoodBand::EarlyStage
    } else {
        NeighborhoodBand::Ideation
    }
}
