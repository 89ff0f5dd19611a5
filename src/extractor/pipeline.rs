//! Extraction pipeline from raw detector lines to diamond measurements.
//!
//! Typical usage:
//! ```no_run
//! use stability_diamonds::{DiamondExtractor, ExtractorParams, ImageSize, RawLine};
//!
//! # fn example(lines: Vec<RawLine>) -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = DiamondExtractor::new(ExtractorParams::default())?;
//! let image = ImageSize::new(512, 512)?;
//! let report = extractor.process_with_diagnostics(image, &lines)?;
//! for d in report.result.diamond_data.measurements() {
//!     println!("height={:.4} V width={:.4} V", d.height_volts, d.width_volts);
//! }
//! # Ok(())
//! # }
//! ```
use super::params::{ExtractorParams, ParamsError};
use crate::calibration::Calibration;
use crate::diagnostics::{
    elapsed_ms, DiamondStage, DuplicateRejection, ExtractionReport, ExtractionTrace, FamilyStage,
    InputDescriptor, NormalizeStage, TimingBreakdown,
};
use crate::diamonds::extract_diamonds;
use crate::families::{Insertion, LineFamilies, Routing, SlopeSign};
use crate::lines::{normalize_line, RawLine};
use crate::types::{ExtractionResult, ImageSize, LineData};
use log::debug;
use std::time::Instant;

/// Runs normalization, classification, deduplication and diamond pairing
/// for one image at a time. Holds no per-run state.
#[derive(Clone, Debug)]
pub struct DiamondExtractor {
    params: ExtractorParams,
}

impl DiamondExtractor {
    pub fn new(params: ExtractorParams) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &ExtractorParams {
        &self.params
    }

    /// Run the pipeline and return only the line and diamond data.
    pub fn process(
        &self,
        image: ImageSize,
        lines: &[RawLine],
    ) -> Result<ExtractionResult, ParamsError> {
        Ok(self.process_with_diagnostics(image, lines)?.result)
    }

    /// Run the pipeline and return the result with a stage trace.
    ///
    /// `lines` are consumed strictly in order: when two detections fall within
    /// the threshold of each other, the earlier one is kept.
    pub fn process_with_diagnostics(
        &self,
        image: ImageSize,
        lines: &[RawLine],
    ) -> Result<ExtractionReport, ParamsError> {
        image.validate()?;
        let total_start = Instant::now();
        let reference_row = image.reference_row();
        debug!(
            "DiamondExtractor::process start w={} h={} lines={} threshold={}",
            image.width,
            image.height,
            lines.len(),
            self.params.threshold_px
        );

        let mut timings = TimingBreakdown::default();
        let mut normalize = NormalizeStage {
            input_lines: lines.len(),
            ..Default::default()
        };
        let mut positive = FamilyStage::new(SlopeSign::Positive);
        let mut negative = FamilyStage::new(SlopeSign::Negative);
        let mut families = LineFamilies::new(self.params.threshold_px);

        let dedup_start = Instant::now();
        for (input_index, raw) in lines.iter().enumerate() {
            let Some(line) = normalize_line(raw, reference_row, self.params.projection_distance)
            else {
                debug!("line {input_index}: vertical (rho={}, theta={}), dropped", raw.rho, raw.theta);
                normalize.vertical_dropped += 1;
                continue;
            };
            let x_intercept = line.x_intercept;
            match families.ingest(line) {
                Routing::Horizontal => {
                    debug!("line {input_index}: horizontal, dropped");
                    normalize.horizontal_dropped += 1;
                }
                Routing::Family { sign, insertion } => {
                    let stage = match sign {
                        SlopeSign::Positive => &mut positive,
                        SlopeSign::Negative => &mut negative,
                    };
                    stage.candidates += 1;
                    match insertion {
                        Insertion::Accepted { index } => {
                            stage.accepted += 1;
                            debug!(
                                "line {input_index}: {} x={x_intercept:.2} accepted at {index}",
                                sign.label()
                            );
                        }
                        Insertion::Rejected { blocking_intercept } => {
                            debug!(
                                "line {input_index}: {} x={x_intercept:.2} within threshold of {blocking_intercept:.2}, rejected",
                                sign.label()
                            );
                            stage.rejections.push(DuplicateRejection {
                                input_index,
                                x_intercept,
                                blocking_intercept,
                            });
                        }
                    }
                }
            }
        }
        timings.push("families", elapsed_ms(dedup_start));
        debug!(
            "DiamondExtractor::process families positive={} negative={} (vertical={}, horizontal={})",
            families.positive.len(),
            families.negative.len(),
            normalize.vertical_dropped,
            normalize.horizontal_dropped
        );

        let diamond_start = Instant::now();
        let calibration = Calibration::new(&self.params.calibration, image);
        let extraction = extract_diamonds(&families.positive, &families.negative, &calibration);
        timings.push("diamonds", elapsed_ms(diamond_start));

        let diamonds = DiamondStage {
            paired_records: extraction.data.heights.len(),
            parallel_pairs: extraction.parallel_pairs,
            trailing_record: extraction.data.trailing_slopes().is_some(),
            apexes: extraction.apexes,
        };
        if diamonds.parallel_pairs > 0 {
            debug!(
                "DiamondExtractor::process {} parallel pair(s), heights non-finite",
                diamonds.parallel_pairs
            );
        }
        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "DiamondExtractor::process done diamonds={} latency_ms={:.3}",
            diamonds.paired_records, timings.total_ms
        );

        let LineFamilies {
            positive: positive_family,
            negative: negative_family,
        } = families;
        let result = ExtractionResult {
            line_data: LineData {
                positive_lines: positive_family.into_lines(),
                negative_lines: negative_family.into_lines(),
            },
            diamond_data: extraction.data,
        };
        let trace = ExtractionTrace {
            input: InputDescriptor {
                width: image.width,
                height: image.height,
                line_count: lines.len(),
                threshold_px: self.params.threshold_px,
                reference_row,
            },
            calibration,
            normalize,
            positive,
            negative,
            diamonds,
            timings,
        };
        Ok(ExtractionReport { result, trace })
    }
}
