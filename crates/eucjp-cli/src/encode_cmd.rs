use std::path::Path;

use eucjp::EucJp;

use crate::shared::{codec_options, load_tables, read_input, report_warnings, write_output};

pub fn run(
    file: &Path,
    output: Option<&Path>,
    strict: bool,
    table_dir: Option<&Path>,
) -> Result<(), i32> {
    let bytes = read_input(file)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        eprintln!("Error: {} is not valid UTF-8: {e}", file.display());
        1
    })?;
    let tables = load_tables(table_dir)?;
    let codec = EucJp::with_tables(&tables).options(codec_options(strict));

    let report = codec.encode_with_report(&text).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })?;
    log::debug!(
        "encoded {} characters into {} bytes with {} substitutions",
        text.chars().count(),
        report.value.len(),
        report.warnings.len()
    );

    report_warnings(&report.warnings);
    write_output(output, &report.value)
}
