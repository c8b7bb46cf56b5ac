//! YAML run configuration to JSON conversion.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::domain::AppError;

/// Read the YAML document at `source` and write it as JSON to `destination`.
///
/// Mapping order is preserved. A failed write may leave a truncated file.
pub fn convert(source: &Path, destination: &Path) -> Result<(), AppError> {
    let document = read_yaml(source)?;

    let json = serde_json::to_string_pretty(&document).map_err(|e| AppError::ConfigWrite {
        path: destination.to_path_buf(),
        details: e.to_string(),
    })?;
    fs::write(destination, json).map_err(|e| AppError::ConfigWrite {
        path: destination.to_path_buf(),
        details: e.to_string(),
    })?;

    tracing::debug!(source = %source.display(), destination = %destination.display(), "converted configuration");
    Ok(())
}

pub fn read_yaml(path: &Path) -> Result<Value, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigRead { path: path.to_path_buf(), details: e.to_string() })?;
    serde_yaml::from_str(&content)
        .map_err(|e| AppError::ConfigRead { path: path.to_path_buf(), details: e.to_string() })
}

pub fn read_json(path: &Path) -> Result<Value, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigRead { path: path.to_path_buf(), details: e.to_string() })?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::ConfigRead { path: path.to_path_buf(), details: e.to_string() })
}
