use std::path::Path;

use eucjp::EucJp;

use crate::cli::OutputFormat;
use crate::shared::{codec_options, load_tables, read_input, report_warnings, write_output};

pub fn run(
    file: &Path,
    output: Option<&Path>,
    strict: bool,
    format: &OutputFormat,
    table_dir: Option<&Path>,
) -> Result<(), i32> {
    let bytes = read_input(file)?;
    let tables = load_tables(table_dir)?;
    let codec = EucJp::with_tables(&tables).options(codec_options(strict));

    let report = codec.decode_with_report(&bytes).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    log::debug!(
        "decoded {} bytes into {} characters with {} substitutions",
        bytes.len(),
        report.value.chars().count(),
        report.warnings.len()
    );

    match format {
        OutputFormat::Text => {
            report_warnings(&report.warnings);
            write_output(output, report.value.as_bytes())
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "file": file.display().to_string(),
                "text": report.value,
                "warnings": report.warnings,
            });
            let mut json = serde_json::to_string_pretty(&obj).map_err(|e| {
                eprintln!("Error: failed to serialize output: {e}");
                1
            })?;
            json.push('\n');
            write_output(output, json.as_bytes())
        }
    }
}
