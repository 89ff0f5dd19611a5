use super::{DiamondStage, FamilyStage, NormalizeStage, TimingBreakdown};
use crate::calibration::Calibration;
use crate::types::ExtractionResult;
use serde::Serialize;

/// Result produced by [`DiamondExtractor::process_with_diagnostics`](crate::DiamondExtractor).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub result: ExtractionResult,
    pub trace: ExtractionTrace,
}

/// Stage-by-stage account of one extraction run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionTrace {
    pub input: InputDescriptor,
    pub calibration: Calibration,
    pub normalize: NormalizeStage,
    pub positive: FamilyStage,
    pub negative: FamilyStage,
    pub diamonds: DiamondStage,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub line_count: usize,
    pub threshold_px: f64,
    pub reference_row: f64,
}

impl ExtractionTrace {
    /// Near-duplicates suppressed across both families.
    pub fn duplicates_rejected(&self) -> usize {
        self.positive.rejections.len() + self.negative.rejections.len()
    }
}
