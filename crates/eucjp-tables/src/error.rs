//! Error types for table loading.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides
//! [`TableLoadError`] and its conversion to [`CodecError`].

use std::path::PathBuf;

use eucjp_core::CodecError;
use thiserror::Error;

use crate::tables::Table;

/// Error raised while building the code tables.
///
/// Every variant is fatal: a table is either loaded completely or not at
/// all. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum TableLoadError {
    /// A data line has no tab-separated code point field.
    #[error("{table} line {line}: missing code point field")]
    MissingField {
        /// Table being loaded.
        table: Table,
        /// Line number in the data source.
        line: usize,
    },

    /// The index field is not a decimal integer.
    #[error("{table} line {line}: invalid index {field:?}")]
    InvalidIndex {
        /// Table being loaded.
        table: Table,
        /// Line number in the data source.
        line: usize,
        /// The raw field text.
        field: String,
    },

    /// The code point field is not a prefixed hexadecimal integer.
    #[error("{table} line {line}: invalid code point {field:?}")]
    InvalidCodePoint {
        /// Table being loaded.
        table: Table,
        /// Line number in the data source.
        line: usize,
        /// The raw field text.
        field: String,
    },

    /// The code point parsed, but is a surrogate or beyond U+10FFFF.
    #[error("{table} line {line}: {value:#X} is not a Unicode scalar value")]
    NotAScalarValue {
        /// Table being loaded.
        table: Table,
        /// Line number in the data source.
        line: usize,
        /// The parsed value.
        value: u32,
    },

    /// Error reading a data source.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<TableLoadError> for CodecError {
    fn from(err: TableLoadError) -> Self {
        CodecError::TableLoad(err.to_string())
    }
}

impl From<&TableLoadError> for CodecError {
    fn from(err: &TableLoadError) -> Self {
        CodecError::TableLoad(err.to_string())
    }
}
