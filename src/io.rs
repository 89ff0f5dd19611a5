//! File helpers for the command-line tools.
//!
//! - `read_image_size`: pixel dimensions from an image file header.
//! - `read_json_file`: deserialize a JSON document from disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::types::ImageSize;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Pixel size of the image at `path`; only the header is decoded.
pub fn read_image_size(path: &Path) -> Result<ImageSize, String> {
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| format!("Failed to read image size of {}: {e}", path.display()))?;
    ImageSize::new(width as usize, height as usize)
        .map_err(|e| format!("Unusable image {}: {e}", path.display()))
}

pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
///
/// Non-finite floats (parallel-pair heights) are written as `null`.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
