use super::RawLine;
use crate::homogeneous::line_through;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Integer pixel coordinate `[x, y]`, y pointing down.
pub type PixelPoint = [i32; 2];

/// Non-vertical line described by two far-apart pixel endpoints.
///
/// Serialized with the keys used by the `lineData` output: `x-intercept`,
/// `gradient` (the physical-orientation slope), `coordinate 1`, `coordinate 2`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLine {
    #[serde(rename = "x-intercept")]
    pub x_intercept: f64,
    #[serde(rename = "gradient")]
    pub slope: f64,
    #[serde(rename = "coordinate 1")]
    pub endpoint1: PixelPoint,
    #[serde(rename = "coordinate 2")]
    pub endpoint2: PixelPoint,
}

impl NormalizedLine {
    /// Builds a line from two endpoints, measuring the intercept on
    /// `reference_row`. Returns `None` when the endpoints share a column.
    pub fn from_endpoints(
        endpoint1: PixelPoint,
        endpoint2: PixelPoint,
        reference_row: f64,
    ) -> Option<Self> {
        let dx = i64::from(endpoint2[0]) - i64::from(endpoint1[0]);
        if dx == 0 {
            return None;
        }
        let dy = i64::from(endpoint2[1]) - i64::from(endpoint1[1]);
        let gradient = dy as f64 / dx as f64;
        let x_intercept =
            (reference_row - f64::from(endpoint1[1])) / gradient + f64::from(endpoint1[0]);
        Some(Self {
            x_intercept,
            slope: -gradient,
            endpoint1,
            endpoint2,
        })
    }

    /// Pixel-space gradient `dy/dx` (y down).
    #[inline]
    pub fn gradient(&self) -> f64 {
        -self.slope
    }

    /// Homogeneous line `l = p1 × p2` through both endpoints.
    pub fn homogeneous(&self) -> Vector3<f64> {
        line_through(self.endpoint1, self.endpoint2)
    }
}

/// Projects `raw` into its two-point form.
///
/// Endpoints sit `projection` pixels either side of the foot point and are
/// truncated toward zero. Vertical lines yield `None`.
pub fn normalize_line(
    raw: &RawLine,
    reference_row: f64,
    projection: f64,
) -> Option<NormalizedLine> {
    let [a, b] = raw.normal();
    let [x0, y0] = raw.foot_point();
    let endpoint1 = [(x0 - projection * b) as i32, (y0 + projection * a) as i32];
    let endpoint2 = [(x0 + projection * b) as i32, (y0 - projection * a) as i32];
    NormalizedLine::from_endpoints(endpoint1, endpoint2, reference_row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lines::DEFAULT_PROJECTION_DISTANCE;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn diagonal_line_rises_left_to_right() {
        let line = normalize_line(
            &RawLine::new(100.0, FRAC_PI_4),
            255.0,
            DEFAULT_PROJECTION_DISTANCE,
        )
        .expect("diagonal line is not vertical");
        assert_eq!(line.endpoint1, [-636, 777]);
        assert_eq!(line.endpoint2, [777, -636]);
        assert_eq!(line.gradient(), -1.0);
        assert_eq!(line.slope, 1.0);
        assert_eq!(line.x_intercept, -114.0);
    }

    #[test]
    fn falling_diagonal_has_negative_slope() {
        let line = normalize_line(
            &RawLine::new(200.0, 3.0 * FRAC_PI_4),
            255.0,
            DEFAULT_PROJECTION_DISTANCE,
        )
        .expect("diagonal line is not vertical");
        assert_eq!(line.slope, -1.0);
        assert_eq!(line.x_intercept, -28.0);
    }

    #[test]
    fn vertical_line_is_filtered() {
        let raw = RawLine::new(40.0, 0.0);
        assert!(normalize_line(&raw, 255.0, DEFAULT_PROJECTION_DISTANCE).is_none());
        assert!(NormalizedLine::from_endpoints([12, -900], [12, 900], 255.0).is_none());
    }

    #[test]
    fn horizontal_line_has_zero_slope() {
        let line = NormalizedLine::from_endpoints([-1000, 80], [1000, 80], 255.0)
            .expect("horizontal line has distinct columns");
        assert_eq!(line.slope, 0.0);
        assert!(!line.x_intercept.is_finite());
    }

    #[test]
    fn serializes_with_line_data_keys() {
        let line = NormalizedLine::from_endpoints([0, 0], [10, -10], 4.0).unwrap();
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["x-intercept"], -4.0);
        assert_eq!(json["gradient"], 1.0);
        assert_eq!(json["coordinate 1"], serde_json::json!([0, 0]));
        assert_eq!(json["coordinate 2"], serde_json::json!([10, -10]));
    }
}
