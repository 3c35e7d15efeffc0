use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Convert files between EUC-JP and UTF-8.
#[derive(Debug, Parser)]
#[command(name = "eucjp", about, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode an EUC-JP file to UTF-8
    Decode {
        /// Path to the EUC-JP input file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the output here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Fail on the first invalid byte sequence instead of substituting
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Directory holding index-jis0208.txt and index-jis0212.txt.
        /// Default: the tables built into the binary
        #[arg(long, value_name = "DIR")]
        table_dir: Option<PathBuf>,
    },

    /// Encode a UTF-8 file to EUC-JP
    Encode {
        /// Path to the UTF-8 input file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Write the output here instead of stdout
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,

        /// Fail on the first unmappable character instead of substituting
        #[arg(long)]
        strict: bool,

        /// Directory holding index-jis0208.txt and index-jis0212.txt.
        /// Default: the tables built into the binary
        #[arg(long, value_name = "DIR")]
        table_dir: Option<PathBuf>,
    },

    /// Show entry counts of the code tables
    Tables {
        /// Directory holding index-jis0208.txt and index-jis0212.txt.
        /// Default: the tables built into the binary
        #[arg(long, value_name = "DIR")]
        table_dir: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `decode` and `tables`.
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain output, warnings on stderr
    Text,
    /// A single JSON document
    Json,
}
