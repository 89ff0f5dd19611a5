//! Parameters configuring the extraction pipeline.
//!
//! Every constant the pipeline depends on travels in [`ExtractorParams`], so
//! several calibration profiles can run side by side. Defaults reproduce the
//! reference setup: 20 px proximity threshold, 1000 px endpoint projection
//! and a 0.2 V × [0.005, 1.2] V diagram.

use crate::calibration::CalibrationBounds;
use crate::lines::DEFAULT_PROJECTION_DISTANCE;
use serde::{Deserialize, Serialize};

/// Default minimum x-intercept separation (pixels) between family members.
pub const DEFAULT_THRESHOLD_PX: f64 = 20.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorParams {
    /// Candidates strictly closer than this to a retained member are dropped.
    pub threshold_px: f64,
    /// Distance each endpoint is projected from the Hough foot point.
    pub projection_distance: f64,
    /// Voltage range spanned by the diagram axes.
    pub calibration: CalibrationBounds,
}

impl Default for ExtractorParams {
    fn default() -> Self {
        Self {
            threshold_px: DEFAULT_THRESHOLD_PX,
            projection_distance: DEFAULT_PROJECTION_DISTANCE,
            calibration: CalibrationBounds::default(),
        }
    }
}

impl ExtractorParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.threshold_px.is_finite() || self.threshold_px <= 0.0 {
            return Err(ParamsError::InvalidThreshold(self.threshold_px));
        }
        if !self.projection_distance.is_finite() || self.projection_distance <= 0.0 {
            return Err(ParamsError::InvalidProjection(self.projection_distance));
        }
        self.calibration.validate()
    }
}

/// Reasons a parameter set or input size cannot be used.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamsError {
    InvalidThreshold(f64),
    InvalidProjection(f64),
    InvalidGateRange { min: f64, max: f64 },
    InvalidSourceDrainMax(f64),
    EmptyImage { width: usize, height: usize },
}

impl std::fmt::Display for ParamsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamsError::InvalidThreshold(v) => {
                write!(f, "proximity threshold must be positive and finite (got {v})")
            }
            ParamsError::InvalidProjection(v) => {
                write!(f, "projection distance must be positive and finite (got {v})")
            }
            ParamsError::InvalidGateRange { min, max } => {
                write!(f, "gate voltage range [{min}, {max}] is empty or non-finite")
            }
            ParamsError::InvalidSourceDrainMax(v) => {
                write!(f, "source-drain voltage max must be positive (got {v})")
            }
            ParamsError::EmptyImage { width, height } => {
                write!(f, "image has no pixels ({width}x{height})")
            }
        }
    }
}

impl std::error::Error for ParamsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = ExtractorParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.threshold_px, 20.0);
        assert_eq!(params.projection_distance, 1000.0);
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let params = ExtractorParams {
                threshold_px: bad,
                ..Default::default()
            };
            assert!(matches!(
                params.validate(),
                Err(ParamsError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn error_messages_name_the_value() {
        let msg = ParamsError::InvalidProjection(-1.0).to_string();
        assert!(msg.contains("-1"), "{msg}");
    }

    #[test]
    fn deserializes_partial_overrides() {
        let params: ExtractorParams =
            serde_json::from_str(r#"{ "threshold_px": 12.5, "calibration": { "gate_voltage_min": 0.0 } }"#)
                .unwrap();
        assert_eq!(params.threshold_px, 12.5);
        assert_eq!(params.projection_distance, 1000.0);
        assert_eq!(params.calibration.gate_voltage_min, 0.0);
        assert_eq!(params.calibration.gate_voltage_max, 1.2);
    }
}
