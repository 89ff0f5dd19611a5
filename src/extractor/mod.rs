//! Diamond extractor orchestrating the line-to-measurement pipeline.
//!
//! Overview
//! - Normalizes each raw `(ρ, θ)` line into two integer endpoints, a signed
//!   slope and an x-intercept on the reference row; vertical lines drop out.
//! - Classifies lines by slope sign; horizontal lines drop out.
//! - Offers each line, in detector order, to its family, which keeps members
//!   ascending by intercept and rejects near-duplicates.
//! - Pairs positive line `i` with negative line `i + 1` to locate diamond
//!   apexes and converts heights and widths to volts.
//!
//! Modules
//! - [`params`] – configuration and validation.
//! - `pipeline` – the [`DiamondExtractor`] implementation.

pub mod params;
mod pipeline;

pub use params::{ExtractorParams, ParamsError, DEFAULT_THRESHOLD_PX};
pub use pipeline::DiamondExtractor;
