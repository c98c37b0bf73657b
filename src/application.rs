use crate::error::{CreditError, Result};
use crate::types::inputs::{AllInputs, Application};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

/// Loads one application from one or more files. Files are merged in order,
/// so a later step file overrides keys from earlier ones.
pub fn load_application(paths: &[PathBuf]) -> Result<Application> {
    if paths.is_empty() {
        return Err(CreditError::NoApplicationFiles);
    }

    let mut merged = Value::Table(Map::new());
    for path in paths {
        if !path.exists() {
            return Err(CreditError::ApplicationNotFound(path.display().to_string()));
        }
        let value = read_toml_value(path)?;
        merge_toml(&mut merged, value);
        debug!(path = %path.display(), "merged application file");
    }

    merged
        .try_into()
        .map_err(|e: toml::de::Error| CreditError::ApplicationParse(e.to_string()))
}

/// SHA-256 over the canonical JSON form of the scored records.
pub fn input_digest(inputs: &AllInputs) -> Result<String> {
    let canonical = serde_json::to_vec(inputs)?;
    let digest = Sha256::digest(&canonical);
    Ok(format!("{digest:x}"))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CreditError::ApplicationParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
