//! Diagnostics data model returned alongside extraction results.
//!
//! [`ExtractionReport`] bundles the compact [`ExtractionResult`](crate::types::ExtractionResult)
//! with an [`ExtractionTrace`] describing what each stage kept, dropped and
//! how long it took. Everything serializes with camelCase keys for tooling.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{ExtractionReport, ExtractionTrace, InputDescriptor};
pub use stages::{DiamondStage, DuplicateRejection, FamilyStage, NormalizeStage};
pub use timing::{elapsed_ms, StageTiming, TimingBreakdown};
