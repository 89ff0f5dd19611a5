#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod calibration;
pub mod diagnostics;
pub mod diamonds;
pub mod extractor;
pub mod types;

// Building blocks, usable on their own.
pub mod families;
pub mod homogeneous;
pub mod lines;

// Tool support.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::calibration::{Calibration, CalibrationBounds};
pub use crate::diamonds::{DiamondData, DiamondMeasurement};
pub use crate::extractor::{DiamondExtractor, ExtractorParams, ParamsError};
pub use crate::lines::{NormalizedLine, RawLine};
pub use crate::types::{ExtractionResult, ImageSize, LineData};

pub use crate::diagnostics::{ExtractionReport, ExtractionTrace};
pub use crate::homogeneous::{intersect_lines, Intersection};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use stability_diamonds::prelude::*;
///
/// let extractor = DiamondExtractor::new(ExtractorParams::default()).unwrap();
/// let lines = [RawLine::new(100.0, std::f64::consts::FRAC_PI_4)];
/// let result = extractor.process(ImageSize::new(512, 512).unwrap(), &lines).unwrap();
/// assert_eq!(result.line_data.positive_lines.len(), 1);
/// ```
pub mod prelude {
    pub use crate::{DiamondExtractor, ExtractionResult, ExtractorParams, ImageSize, RawLine};
}
