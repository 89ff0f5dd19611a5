use crate::diamonds::DiamondData;
use crate::extractor::ParamsError;
use crate::lines::NormalizedLine;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of the source diagram image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: usize,
    pub height: usize,
}

impl ImageSize {
    pub fn new(width: usize, height: usize) -> Result<Self, ParamsError> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.width == 0 || self.height == 0 {
            return Err(ParamsError::EmptyImage {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Horizontal row at which x-intercepts and diamond heights are measured:
    /// `floor(height / 2) - 1`.
    #[inline]
    pub fn reference_row(&self) -> f64 {
        (self.height / 2) as f64 - 1.0
    }
}

/// Retained lines of both families, in raw pixel units.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineData {
    #[serde(rename = "positive lines")]
    pub positive_lines: Vec<NormalizedLine>,
    #[serde(rename = "negative lines")]
    pub negative_lines: Vec<NormalizedLine>,
}

impl LineData {
    pub fn is_empty(&self) -> bool {
        self.positive_lines.is_empty() && self.negative_lines.is_empty()
    }
}

/// Compact result of one extraction run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub line_data: LineData,
    pub diamond_data: DiamondData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_row_is_floor_half_minus_one() {
        assert_eq!(ImageSize::new(512, 512).unwrap().reference_row(), 255.0);
        assert_eq!(ImageSize::new(640, 511).unwrap().reference_row(), 254.0);
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        assert!(matches!(
            ImageSize::new(0, 480),
            Err(ParamsError::EmptyImage { width: 0, .. })
        ));
    }
}
