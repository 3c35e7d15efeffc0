use std::path::Path;

use eucjp::{CodeTables, Table};

use crate::cli::OutputFormat;
use crate::shared::load_tables;

pub fn run(table_dir: Option<&Path>, format: &OutputFormat) -> Result<(), i32> {
    let tables = load_tables(table_dir)?;
    let source = match table_dir {
        Some(dir) => dir.display().to_string(),
        None => "embedded".to_string(),
    };

    match format {
        OutputFormat::Text => print!("{}", summary_text(&source, &tables)),
        OutputFormat::Json => {
            let obj = summary_json(&source, &tables);
            println!("{}", serde_json::to_string_pretty(&obj).map_err(|e| {
                eprintln!("Error: failed to serialize output: {e}");
                1
            })?);
        }
    }
    Ok(())
}

fn summary_text(source: &str, tables: &CodeTables) -> String {
    format!(
        "source: {source}\n{}: {} entries\n{}: {} entries\nencodable: {}\n",
        Table::Jis0208,
        tables.len(Table::Jis0208),
        Table::Jis0212,
        tables.len(Table::Jis0212),
        tables.encodable_len(),
    )
}

fn summary_json(source: &str, tables: &CodeTables) -> serde_json::Value {
    serde_json::json!({
        "source": source,
        "jis0208": tables.len(Table::Jis0208),
        "jis0212": tables.len(Table::Jis0212),
        "encodable": tables.encodable_len(),
    })
}
