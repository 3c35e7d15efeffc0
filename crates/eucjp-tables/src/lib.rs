//! eucjp-tables: JIS X 0208 / JIS X 0212 index tables for the eucjp codec.
//!
//! This crate loads WHATWG-format index data (embedded, from a directory, or
//! from memory) into immutable [`CodeTables`]. It depends on eucjp-core for
//! the shared error type.

pub mod error;
pub mod loader;
pub mod source;
pub mod tables;

pub use eucjp_core;
pub use error::TableLoadError;
pub use loader::CodeTableLoader;
pub use source::{DataSource, DirectorySource, EmbeddedSource, StrSource};
pub use tables::{CodeTables, GRID_SIZE, ROW_LEN, Table};
