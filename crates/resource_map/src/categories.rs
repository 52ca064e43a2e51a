use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Fallback district for resource types no table entry claims.
pub const OTHER_DISTRICT: &str = "Other";
pub const TOWN_SQUARE: &str = "Town Square";

/// Generic building icon used when a type has no entry in the icon table.
pub const DEFAULT_ICON: &str = "🏢";

/// Districts in fixed left-to-right canvas order, with the resource types each
/// one owns. `Other` owns nothing and catches every unrecognized type.
pub const DEFAULT_DISTRICTS: &[(&str, &[&str])] = &[
    (
        TOWN_SQUARE,
        &[
            "Government",
            "Chamber of Commerce",
            "Economic Development",
            "Community Organization",
            "Nonprofit",
        ],
    ),
    (
        "Innovation Alley",
        &[
            "Incubator/Accelerator",
            "Coworking Space",
            "Makerspace",
            "Tech Transfer",
        ],
    ),
    (
        "Capital Corner",
        &[
            "Grant",
            "Loan",
            "Microloan",
            "Investor",
            "Angel Network",
            "Venture Capital",
            "Crowdfunding",
        ],
    ),
    (
        "Learning Lane",
        &[
            "Education",
            "Mentorship",
            "Workshop",
            "Training Program",
            "University",
        ],
    ),
    (OTHER_DISTRICT, &[]),
];

pub const DEFAULT_ICONS: &[(&str, &str)] = &[
    ("Government", "🏛️"),
    ("Chamber of Commerce", "🤝"),
    ("Economic Development", "📈"),
    ("Community Organization", "🏘️"),
    ("Nonprofit", "💛"),
    ("Incubator/Accelerator", "🚀"),
    ("Coworking Space", "💻"),
    ("Makerspace", "🛠️"),
    ("Tech Transfer", "🔬"),
    ("Grant", "🎁"),
    ("Loan", "🏦"),
    ("Microloan", "🪙"),
    ("Investor", "💰"),
    ("Angel Network", "😇"),
    ("Venture Capital", "💼"),
    ("Crowdfunding", "👥"),
    ("Education", "🎓"),
    ("Mentorship", "🧭"),
    ("Workshop", "📝"),
    ("Training Program", "📚"),
    ("University", "🏫"),
];

/// Resources that always sit on Town Square whatever their listed type.
/// Carried over from hand-curated legacy data.
pub const DEFAULT_TOWN_SQUARE_PINS: &[&str] = &[
    "Small Business Development Center",
    "SCORE Mentors",
    "Main Street Alliance",
];

/// Horizontal streets (name, y) that east-to-west vehicles drive along.
pub const DEFAULT_HORIZONTAL_STREETS: &[(&str, f32)] = &[
    ("Summit Avenue", 300.0),
    ("Market Street", 600.0),
    ("Founders Row", 900.0),
];

/// Vertical streets (name, x) that north-to-south vehicles drive along.
pub const DEFAULT_VERTICAL_STREETS: &[(&str, f32)] = &[
    ("First Street", 320.0),
    ("Second Street", 640.0),
    ("Third Street", 960.0),
    ("Fourth Street", 1280.0),
];

/// Business-stage neighborhood. Bands are stacked top-to-bottom with the most
/// established businesses at the top of the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NeighborhoodBand {
    Established,
    Growth,
    #[serde(rename = "Early Stage")]
    EarlyStage,
    Ideation,
}

impl NeighborhoodBand {
    /// Top-to-bottom canvas order.
    pub const ALL: [NeighborhoodBand; 4] = [
        NeighborhoodBand::Established,
        NeighborhoodBand::Growth,
        NeighborhoodBand::EarlyStage,
        NeighborhoodBand::Ideation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NeighborhoodBand::Established => "Established",
            NeighborhoodBand::Growth => "Growth",
            NeighborhoodBand::EarlyStage => "Early Stage",
            NeighborhoodBand::Ideation => "Ideation",
        }
    }

    /// Row index of this band, 0 at the top of the canvas.
    pub fn row(self) -> usize {
        match self {
            NeighborhoodBand::Established => 0,
            NeighborhoodBand::Growth => 1,
            NeighborhoodBand::EarlyStage => 2,
            NeighborhoodBand::Ideation => 3,
        }
    }
}

impl std::fmt::Display for NeighborhoodBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistrictEntry {
    pub name: String,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Street {
    pub name: String,
    /// y for horizontal streets, x for vertical streets.
    pub offset: f32,
}

/// Static configuration the classifier, placer and animator read from.
///
/// The last district is always the fallback; [`CategoryTables::new`] appends
/// `Other` if the caller's list does not already end with it.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CategoryTables {
    districts: Vec<DistrictEntry>,
    icons: Vec<(String, String)>,
    town_square_pins: Vec<String>,
    pub horizontal_streets: Vec<Street>,
    pub vertical_streets: Vec<Street>,
}

impl Default for CategoryTables {
    fn default() -> Self {
        Self::new(
            DEFAULT_DISTRICTS,
            DEFAULT_ICONS,
            DEFAULT_TOWN_SQUARE_PINS,
            DEFAULT_HORIZONTAL_STREETS,
            DEFAULT_VERTICAL_STREETS,
        )
    }
}

impl CategoryTables {
    pub fn new(
        districts: &[(&str, &[&str])],
        icons: &[(&str, &str)],
        town_square_pins: &[&str],
        horizontal_streets: &[(&str, f32)],
        vertical_streets: &[(&str, f32)],
    ) -> Self {
        let mut districts: Vec<DistrictEntry> = districts
            .iter()
            .map(|(name, types)| DistrictEntry {
                name: name.to_string(),
                types: types.iter().map(|t| t.to_string()).collect(),
            })
            .collect();
        if districts.last().map(|d| d.name.as_str()) != Some(OTHER_DISTRICT) {
            districts.retain(|d| d.name != OTHER_DISTRICT);
            districts.push(DistrictEntry {
                name: OTHER_DISTRICT.to_string(),
                types: Vec::new(),
            });
        }

        let streets = |list: &[(&str, f32)]| {
            list.iter()
                .map(|(name, offset)| Street {
                    name: name.to_string(),
                    offset: *offset,
                })
                .collect()
        };

        Self {
            districts,
            icons: icons
                .iter()
                .map(|(t, i)| (t.to_string(), i.to_string()))
                .collect(),
            town_square_pins: town_square_pins.iter().map(|n| n.to_string()).collect(),
            horizontal_streets: streets(horizontal_streets),
            vertical_streets: streets(vertical_streets),
        }
    }

    pub fn districts(&self) -> &[DistrictEntry] {
        &self.districts
    }

    pub fn district_count(&self) -> usize {
        self.districts.len()
    }

    pub fn district_names(&self) -> impl Iterator<Item = &str> {
        self.districts.iter().map(|d| d.name.as_str())
    }

    /// First district whose type set contains `resource_type`.
    pub fn district_for_type(&self, resource_type: &str) -> Option<&str> {
        self.districts
            .iter()
            .find(|d| d.types.iter().any(|t| t == resource_type))
            .map(|d| d.name.as_str())
    }

    /// Canvas column of a district. Unknown names map to the fallback column.
    pub fn district_index(&self, name: &str) -> usize {
        self.districts
            .iter()
            .position(|d| d.name == name)
            .unwrap_or(self.districts.len() - 1)
    }

    pub fn icon_for_type(&self, resource_type: &str) -> &str {
        self.icons
            .iter()
            .find(|(t, _)| t == resource_type)
            .map(|(_, icon)| icon.as_str())
            .unwrap_or(DEFAULT_ICON)
    }

    pub fn is_town_square_pin(&self, name: &str) -> bool {
        self.town_square_pins.iter().any(|pin| pin == name)
    }

    /// Whether the Town Square district exists in these tables.
    pub fn has_town_square(&self) -> bool {
        self.districts.iter().any(|d| d.name == TOWN_SQUARE)
    }
}
