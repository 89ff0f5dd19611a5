//! Pixel to voltage conversion for charge-stability diagrams.
//!
//! The diagram's x axis spans the gate voltage range
//! `[gate_voltage_min, gate_voltage_max]` across the image width; the y axis
//! spans `source_drain_voltage_max` across the image height.

use crate::extractor::ParamsError;
use crate::types::ImageSize;
use serde::{Deserialize, Serialize};

/// Physical voltage range covered by the diagram.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationBounds {
    pub source_drain_voltage_max: f64,
    pub gate_voltage_min: f64,
    pub gate_voltage_max: f64,
}

impl Default for CalibrationBounds {
    fn default() -> Self {
        Self {
            source_drain_voltage_max: 0.2,
            gate_voltage_min: 0.005,
            gate_voltage_max: 1.2,
        }
    }
}

impl CalibrationBounds {
    pub fn validate(&self) -> Result<(), ParamsError> {
        let finite = self.source_drain_voltage_max.is_finite()
            && self.gate_voltage_min.is_finite()
            && self.gate_voltage_max.is_finite();
        if !finite || self.gate_voltage_max <= self.gate_voltage_min {
            return Err(ParamsError::InvalidGateRange {
                min: self.gate_voltage_min,
                max: self.gate_voltage_max,
            });
        }
        if self.source_drain_voltage_max <= 0.0 {
            return Err(ParamsError::InvalidSourceDrainMax(
                self.source_drain_voltage_max,
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn gate_span(&self) -> f64 {
        self.gate_voltage_max - self.gate_voltage_min
    }
}

/// Per-pixel voltage scale for one image.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calibration {
    pub image: ImageSize,
    pub volts_per_pixel_x: f64,
    pub volts_per_pixel_y: f64,
}

impl Calibration {
    pub fn new(bounds: &CalibrationBounds, image: ImageSize) -> Self {
        Self {
            image,
            volts_per_pixel_x: bounds.gate_span() / image.width as f64,
            volts_per_pixel_y: bounds.source_drain_voltage_max / image.height as f64,
        }
    }

    /// Row (pixels) that heights and intercepts are measured from.
    #[inline]
    pub fn reference_row(&self) -> f64 {
        self.image.reference_row()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds_scale_512_square() {
        let cal = Calibration::new(
            &CalibrationBounds::default(),
            ImageSize {
                width: 512,
                height: 512,
            },
        );
        assert_eq!(cal.volts_per_pixel_x, (1.2 - 0.005) / 512.0);
        assert_eq!(cal.volts_per_pixel_y, 0.2 / 512.0);
    }

    #[test]
    fn axes_scale_independently() {
        let bounds = CalibrationBounds {
            source_drain_voltage_max: 1.0,
            gate_voltage_min: -1.0,
            gate_voltage_max: 1.0,
        };
        let cal = Calibration::new(
            &bounds,
            ImageSize {
                width: 400,
                height: 100,
            },
        );
        assert_eq!(cal.volts_per_pixel_x, 0.005);
        assert_eq!(cal.volts_per_pixel_y, 0.01);
    }

    #[test]
    fn inverted_gate_range_is_rejected() {
        let bounds = CalibrationBounds {
            gate_voltage_min: 1.0,
            gate_voltage_max: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            bounds.validate(),
            Err(ParamsError::InvalidGateRange { .. })
        ));
        assert!(CalibrationBounds::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let bounds: CalibrationBounds =
            serde_json::from_str(r#"{ "gate_voltage_max": 2.0 }"#).unwrap();
        assert_eq!(bounds.gate_voltage_max, 2.0);
        assert_eq!(bounds.source_drain_voltage_max, 0.2);
    }
}
