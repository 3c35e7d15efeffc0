use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use eucjp::{CodeTables, CodecOptions, CodecWarning, DirectorySource};

/// Read an input file with user-friendly error messages.
///
/// Returns `Err(1)` with a message printed to stderr if the file is missing
/// or unreadable.
pub fn read_input(file: &Path) -> Result<Vec<u8>, i32> {
    if !file.exists() {
        eprintln!("Error: file not found: {}", file.display());
        return Err(1);
    }

    let bytes = fs::read(file).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", file.display());
        1
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), file.display());
    Ok(bytes)
}

/// Resolve the code tables: the embedded ones, or those under `table_dir`.
pub fn load_tables(table_dir: Option<&Path>) -> Result<Cow<'static, CodeTables>, i32> {
    match table_dir {
        Some(dir) => {
            log::debug!("loading code tables from {}", dir.display());
            CodeTables::load(&DirectorySource::new(dir))
                .map(Cow::Owned)
                .map_err(|e| {
                    eprintln!("Error: {e}");
                    1
                })
        }
        None => CodeTables::global().map(Cow::Borrowed).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
    }
}

/// Codec options for the `--strict` flag.
pub fn codec_options(strict: bool) -> CodecOptions {
    if strict {
        CodecOptions::strict()
    } else {
        CodecOptions::default()
    }
}

/// Write `bytes` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, bytes: &[u8]) -> Result<(), i32> {
    let result = match output {
        Some(path) => fs::write(path, bytes),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes).and_then(|()| stdout.flush())
        }
    };
    result.map_err(|e| {
        match output {
            Some(path) => eprintln!("Error: failed to write {}: {e}", path.display()),
            None => eprintln!("Error: failed to write output: {e}"),
        }
        1
    })
}

/// Print each warning on its own stderr line.
pub fn report_warnings(warnings: &[CodecWarning]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}
