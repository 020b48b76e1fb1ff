//! Detection and filling of keys missing from an older config file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Top-level keys a current config file carries.
pub const EXPECTED_KEYS: &[&str] = &[
    "database",
    "default_period",
    "currency_symbol",
    "chart_width",
    "separator_char",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level is not a mapping",
            path.display()
        ))),
    }
}

/// Keys from [`EXPECTED_KEYS`] absent in the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(Value::String((*k).to_string())))
        .collect())
}

/// Add every missing key with its default value. Existing values are kept
/// untouched. Returns the keys that were added.
pub fn fill_missing(path: &Path) -> AppResult<Vec<&'static str>> {
    let mut map = read_mapping(path)?;
    let defaults = match serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?
    {
        Value::Mapping(m) => m,
        _ => return Err(AppError::Other("default config is not a mapping".into())),
    };

    let mut added = Vec::new();
    for key in EXPECTED_KEYS {
        let k = Value::String((*key).to_string());
        if map.contains_key(&k) {
            continue;
        }
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
            added.push(*key);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(map))
            .map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
