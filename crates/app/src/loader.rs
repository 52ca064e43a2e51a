// ---------------------------------------------------------------------------
// LoadError: reading a resource directory from disk
// ---------------------------------------------------------------------------

use std::fmt;
use std::path::Path;

use serde_json::Value;

use resource_map::raw::{raw_resources_from_value, RawResource};

/// Errors that can occur while loading a resource directory file.
#[derive(Debug)]
pub enum LoadError {
    /// File missing, unreadable, etc.
    Io(std::io::Error),
    /// The file is not valid JSON.
    Parse(serde_json::Error),
    /// Valid JSON, but neither an array nor an object with a `resources` array.
    NotAList,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "I/O error: {e}"),
            LoadError::Parse(e) => write!(f, "JSON parse error: {e}"),
            LoadError::NotAList => {
                write!(f, "Expected a JSON array of resources or an object with a `resources` array")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            LoadError::NotAList => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e)
    }
}

pub fn load_resources(path: &Path) -> Result<Vec<RawResource>, LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse_resources(&text)
}

/// Accepts `[...]` or `{"resources": [...]}`.
pub fn parse_resources(text: &str) -> Result<Vec<RawResource>, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    let list = match &value {
        Value::Array(_) => &value,
        Value::Object(map) => match map.get("resources") {
            Some(list @ Value::Array(_)) => list,
            _ => return Err(LoadError::NotAList),
        },
        _ => return Err(LoadError::NotAList),
    };
    Ok(raw_resources_from_value(list))
}
