//! Loosely-typed resource records as delivered by the data-loading layer.
//!
//! Exports from different sources spell the same column several ways
//! (`"Business Stage"`, `"businessStage"`, `"Stage"`...). Every logical field
//! has an ordered alias list and the first alias present with a non-null,
//! non-blank value wins.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const NAME_KEYS: &[&str] = &["Name", "name", "Resource Name", "resourceName", "title"];
const TYPE_KEYS: &[&str] = &["Type", "type", "Resource Type", "resourceType", "category"];
const FOCUS_AREA_KEYS: &[&str] = &["Focus Area", "focusArea", "focus_area"];
const BUSINESS_STAGE_KEYS: &[&str] = &[
    "Business Stage",
    "businessStage",
    "business_stage",
    "Stage",
    "stage",
];
const COUNTIES_SERVED_KEYS: &[&str] = &[
    "Counties Served",
    "countiesServed",
    "counties_served",
    "Counties",
];
const URL_KEYS: &[&str] = &["URL", "Url", "url", "Website", "website", "link"];
const DETAIL_KEYS: &[&str] = &[
    "Detail",
    "detail",
    "Details",
    "details",
    "Description",
    "description",
];
const CHECK_SIZE_KEYS: &[&str] = &["Check Size", "checkSize", "check_size"];
const RELOCATION_KEYS: &[&str] = &[
    "Relocation Required",
    "relocationRequired",
    "relocation_required",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawResource {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
    pub focus_area: Option<String>,
    pub business_stage: Option<String>,
    pub counties_served: Option<String>,
    pub url: Option<String>,
    pub detail: Option<String>,
    pub check_size: Option<String>,
    pub relocation_required: Option<bool>,
}

impl RawResource {
    /// Normalize one record. Never fails: anything that is not an object
    /// yields an empty record.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            name: first_text(map, NAME_KEYS),
            resource_type: first_text(map, TYPE_KEYS),
            focus_area: first_text(map, FOCUS_AREA_KEYS),
            business_stage: first_text(map, BUSINESS_STAGE_KEYS),
            counties_served: first_text(map, COUNTIES_SERVED_KEYS),
            url: first_text(map, URL_KEYS),
            detail: first_text(map, DETAIL_KEYS),
            check_size: first_text(map, CHECK_SIZE_KEYS),
            relocation_required: first_flag(map, RELOCATION_KEYS),
        }
    }

    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn type_or_empty(&self) -> &str {
        self.resource_type.as_deref().unwrap_or("")
    }
}

/// Normalize every element of a JSON array. Non-arrays produce an empty list.
pub fn raw_resources_from_value(value: &Value) -> Vec<RawResource> {
    match value {
        Value::Array(items) => items.iter().map(RawResource::from_value).collect(),
        _ => Vec::new(),
    }
}

fn first_text(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.get(*key).and_then(value_to_text))
}

fn value_to_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(value_to_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Null | Value::Object(_) => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn first_flag(map: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|key| match map.get(*key)? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}
