use crate::extractor::ExtractorParams;
use crate::io::{read_image_size, read_json_file};
use crate::lines::RawLine;
use crate::types::ImageSize;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ExtractToolConfig {
    /// JSON file with the detector's raw lines, in detector order.
    pub lines: PathBuf,
    pub image: ImageSource,
    #[serde(default)]
    pub params: ExtractorParams,
    pub output: ExtractOutputConfig,
}

/// Where the diagram's pixel size comes from.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    /// Read from the header of the source diagram image.
    File { path: PathBuf },
    Size { width: usize, height: usize },
}

impl ImageSource {
    pub fn resolve(&self) -> Result<ImageSize, String> {
        match self {
            ImageSource::File { path } => read_image_size(path),
            ImageSource::Size { width, height } => {
                ImageSize::new(*width, *height).map_err(|e| e.to_string())
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExtractOutputConfig {
    #[serde(rename = "line_data")]
    pub line_data: PathBuf,
    #[serde(rename = "diamond_data")]
    pub diamond_data: PathBuf,
    /// Optional full report with the stage trace.
    #[serde(default)]
    pub report: Option<PathBuf>,
}

/// One line as found in a lines file.
///
/// Accepts `{"rho": .., "theta": ..}`, a bare `[rho, theta]` pair, or the
/// `[[rho, theta]]` nesting produced by OpenCV's `HoughLines`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLineEntry {
    Object(RawLine),
    Pair([f64; 2]),
    Nested([[f64; 2]; 1]),
}

impl From<RawLineEntry> for RawLine {
    fn from(entry: RawLineEntry) -> Self {
        match entry {
            RawLineEntry::Object(line) => line,
            RawLineEntry::Pair([rho, theta]) | RawLineEntry::Nested([[rho, theta]]) => {
                RawLine::new(rho, theta)
            }
        }
    }
}

pub fn load_config(path: &Path) -> Result<ExtractToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

/// Loads raw lines preserving file order.
pub fn load_raw_lines(path: &Path) -> Result<Vec<RawLine>, String> {
    let entries: Vec<RawLineEntry> = read_json_file(path)?;
    Ok(entries.into_iter().map(RawLine::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_with_explicit_size() {
        let cfg: ExtractToolConfig = serde_json::from_str(
            r#"{
                "lines": "lines.json",
                "image": { "width": 640, "height": 480 },
                "params": { "threshold_px": 15.0 },
                "output": { "line_data": "out/line-data.json", "diamond_data": "out/diamond-data.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.image.resolve().unwrap(), ImageSize::new(640, 480).unwrap());
        assert_eq!(cfg.params.threshold_px, 15.0);
        assert!(cfg.output.report.is_none());
    }

    #[test]
    fn image_path_source_is_recognised() {
        let source: ImageSource = serde_json::from_str(r#"{ "path": "diagram.png" }"#).unwrap();
        assert!(matches!(source, ImageSource::File { .. }));
    }

    #[test]
    fn zero_size_is_reported() {
        let source = ImageSource::Size {
            width: 0,
            height: 10,
        };
        assert!(source.resolve().is_err());
    }

    #[test]
    fn line_entries_accept_all_shapes() {
        let entries: Vec<RawLineEntry> = serde_json::from_str(
            r#"[{ "rho": 1.0, "theta": 0.5 }, [2.0, 0.25], [[3.0, 1.5]]]"#,
        )
        .unwrap();
        let lines: Vec<RawLine> = entries.into_iter().map(RawLine::from).collect();
        assert_eq!(
            lines,
            vec![
                RawLine::new(1.0, 0.5),
                RawLine::new(2.0, 0.25),
                RawLine::new(3.0, 1.5)
            ]
        );
    }
}
