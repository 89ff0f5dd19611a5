use stability_diamonds::{
    DiamondExtractor, ExtractionReport, ExtractorParams, ImageSize, ParamsError, RawLine,
};
use std::f64::consts::FRAC_PI_4;

fn main() {
    env_logger::init();
    match run() {
        Ok(report) => {
            let data = &report.result.diamond_data;
            println!(
                "positive={} negative={} rejected={} diamonds={} slope_pairs={}",
                report.result.line_data.positive_lines.len(),
                report.result.line_data.negative_lines.len(),
                report.trace.duplicates_rejected(),
                data.heights.len(),
                data.positive_slopes.len()
            );
        }
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<ExtractionReport, ParamsError> {
    // Demo: two near-duplicate rising edges and one falling edge on a 512x512 diagram.
    let lines = [
        RawLine::new(100.0, FRAC_PI_4),
        RawLine::new(110.0, FRAC_PI_4),
        RawLine::new(200.0, 3.0 * FRAC_PI_4),
    ];
    let extractor = DiamondExtractor::new(ExtractorParams::default())?;
    extractor.process_with_diagnostics(ImageSize::new(512, 512)?, &lines)
}
