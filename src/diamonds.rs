//! Coulomb-diamond geometry from the two retained line families.
//!
//! Diamond `i` is bounded on the left by positive line `i` and on the right by
//! positive line `i + 1`; its apex is where positive line `i` meets negative
//! line `i + 1`. For each such pair we record
//! - the height: reference row minus apex row, in source-drain volts,
//! - the width: the intercept gap between positive lines `i` and `i + 1`, in
//!   gate volts,
//! - the slopes of positive line `i` and negative line `i`.
//!
//! After the paired records one trailing slope pair (last positive, last
//! negative) is appended without a height or width, so the slope sequences
//! are one longer than the height/width sequences whenever both families are
//! non-empty.

use crate::calibration::Calibration;
use crate::families::LineFamily;
use crate::homogeneous::{meet, Intersection};
use serde::{Deserialize, Serialize};

/// Calibrated diamond measurements as four independent sequences.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiamondData {
    pub heights: Vec<f64>,
    pub widths: Vec<f64>,
    #[serde(rename = "positive slopes")]
    pub positive_slopes: Vec<f64>,
    #[serde(rename = "negative slopes")]
    pub negative_slopes: Vec<f64>,
}

/// One paired diamond record.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiamondMeasurement {
    pub height_volts: f64,
    pub width_volts: f64,
    pub positive_slope: f64,
    pub negative_slope: f64,
}

impl DiamondData {
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty() && self.positive_slopes.is_empty()
    }

    /// Paired records; the trailing slope pair is not included.
    pub fn measurements(&self) -> impl Iterator<Item = DiamondMeasurement> + '_ {
        self.heights
            .iter()
            .zip(&self.widths)
            .zip(self.positive_slopes.iter().zip(&self.negative_slopes))
            .map(|((&h, &w), (&p, &n))| DiamondMeasurement {
                height_volts: h,
                width_volts: w,
                positive_slope: p,
                negative_slope: n,
            })
    }

    /// `(positive, negative)` slope pair appended after the paired records.
    pub fn trailing_slopes(&self) -> Option<(f64, f64)> {
        if self.positive_slopes.len() <= self.heights.len() {
            return None;
        }
        Some((
            *self.positive_slopes.last()?,
            *self.negative_slopes.last()?,
        ))
    }
}

/// Diamond data together with per-pair geometry details.
#[derive(Clone, Debug, Default)]
pub struct DiamondExtraction {
    pub data: DiamondData,
    /// Apex of each paired record, `[+inf, +inf]` for parallel pairs.
    pub apexes: Vec<[f64; 2]>,
    pub parallel_pairs: usize,
}

/// Pairs the families into diamonds.
///
/// Pairs run while both positive line `i + 1` and negative line `i + 1`
/// exist. A parallel pair yields a non-finite height that is passed through
/// unchanged. The trailing slope pair is only written when both families are
/// non-empty.
pub fn extract_diamonds(
    positive: &LineFamily,
    negative: &LineFamily,
    calibration: &Calibration,
) -> DiamondExtraction {
    let pairs = positive.len().min(negative.len()).saturating_sub(1);
    let reference_row = calibration.reference_row();
    let pos_lines = positive.lines();
    let neg_lines = negative.lines();
    let pos_x = positive.intercepts();

    let mut out = DiamondExtraction {
        data: DiamondData {
            heights: Vec::with_capacity(pairs),
            widths: Vec::with_capacity(pairs),
            positive_slopes: Vec::with_capacity(pairs + 1),
            negative_slopes: Vec::with_capacity(pairs + 1),
        },
        apexes: Vec::with_capacity(pairs),
        parallel_pairs: 0,
    };

    for i in 0..pairs {
        let pos = &pos_lines[i];
        let apex_hit = meet(&pos.homogeneous(), &neg_lines[i + 1].homogeneous());
        if let Intersection::Parallel = apex_hit {
            out.parallel_pairs += 1;
        }
        let apex = apex_hit.to_point();
        out.apexes.push(apex);
        out.data
            .heights
            .push((reference_row - apex[1]) * calibration.volts_per_pixel_y);
        out.data
            .widths
            .push((pos_x[i + 1] - pos_x[i]) * calibration.volts_per_pixel_x);
        out.data.negative_slopes.push(neg_lines[i].slope);
        out.data.positive_slopes.push(pos.slope);
    }

    if let (Some(pos), Some(neg)) = (positive.last(), negative.last()) {
        out.data.negative_slopes.push(neg.slope);
        out.data.positive_slopes.push(pos.slope);
    }
    out
}
