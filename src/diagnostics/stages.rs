use crate::families::SlopeSign;
use serde::Serialize;

/// Counts from turning raw lines into normalized, classified lines.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeStage {
    pub input_lines: usize,
    pub vertical_dropped: usize,
    pub horizontal_dropped: usize,
}

impl NormalizeStage {
    /// Lines that reached one of the two families.
    pub fn classified(&self) -> usize {
        self.input_lines - self.vertical_dropped - self.horizontal_dropped
    }
}

/// A candidate suppressed as a near-duplicate.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateRejection {
    /// Position of the line in the detector output.
    pub input_index: usize,
    pub x_intercept: f64,
    pub blocking_intercept: f64,
}

/// Deduplication summary for one family.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyStage {
    pub sign: SlopeSign,
    pub candidates: usize,
    pub accepted: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejections: Vec<DuplicateRejection>,
}

impl FamilyStage {
    pub fn new(sign: SlopeSign) -> Self {
        Self {
            sign,
            candidates: 0,
            accepted: 0,
            rejections: Vec::new(),
        }
    }
}

/// Geometry summary of the diamond pairing.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiamondStage {
    pub paired_records: usize,
    pub parallel_pairs: usize,
    pub trailing_record: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub apexes: Vec<[f64; 2]>,
}
