use serde::Serialize;
use stability_diamonds::config::extract::{load_config, load_raw_lines};
use stability_diamonds::diagnostics::ExtractionTrace;
use stability_diamonds::io::write_json_file;
use stability_diamonds::{DiamondExtractor, ExtractionResult};
use std::env;
use std::path::Path;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = config.image.resolve()?;
    let lines = load_raw_lines(&config.lines)?;
    let extractor = DiamondExtractor::new(config.params).map_err(|e| e.to_string())?;
    let report = extractor
        .process_with_diagnostics(image, &lines)
        .map_err(|e| e.to_string())?;
    let ExtractionResult {
        line_data,
        diamond_data,
    } = &report.result;

    write_json_file(&config.output.line_data, line_data)?;
    println!(
        "Saved {} positive / {} negative lines to {}",
        line_data.positive_lines.len(),
        line_data.negative_lines.len(),
        config.output.line_data.display()
    );

    write_json_file(&config.output.diamond_data, diamond_data)?;
    println!(
        "Saved {} diamonds ({} slope pairs) to {}",
        diamond_data.heights.len(),
        diamond_data.positive_slopes.len(),
        config.output.diamond_data.display()
    );

    if let Some(path) = &config.output.report {
        let summary = ExtractReport {
            config_path: &config_path,
            image_width: image.width,
            image_height: image.height,
            result: &report.result,
            trace: &report.trace,
        };
        write_json_file(path, &summary)?;
        println!(
            "Saved report ({} lines in, {} duplicates rejected) to {}",
            lines.len(),
            report.trace.duplicates_rejected(),
            path.display()
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: extract_diamonds <config.json>".to_string()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractReport<'a> {
    config_path: &'a str,
    image_width: usize,
    image_height: usize,
    result: &'a ExtractionResult,
    trace: &'a ExtractionTrace,
}
