//! Providers of raw index data.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::TableLoadError;
use crate::tables::Table;

const EMBEDDED_JIS0208: &str = include_str!("../data/index-jis0208.txt");
const EMBEDDED_JIS0212: &str = include_str!("../data/index-jis0212.txt");

/// Something that can supply the index text of both tables.
pub trait DataSource {
    /// Return the full index text for `table`.
    fn read(&self, table: Table) -> Result<Cow<'_, str>, TableLoadError>;
}

/// The WHATWG index data compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl DataSource for EmbeddedSource {
    fn read(&self, table: Table) -> Result<Cow<'_, str>, TableLoadError> {
        Ok(Cow::Borrowed(match table {
            Table::Jis0208 => EMBEDDED_JIS0208,
            Table::Jis0212 => EMBEDDED_JIS0212,
        }))
    }
}

/// Index files read from a directory at load time.
///
/// The directory must contain `index-jis0208.txt` and `index-jis0212.txt`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Create a source reading from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this source reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DataSource for DirectorySource {
    fn read(&self, table: Table) -> Result<Cow<'_, str>, TableLoadError> {
        let path = self.dir.join(table.file_name());
        std::fs::read_to_string(&path)
            .map(Cow::Owned)
            .map_err(|source| TableLoadError::Io { path, source })
    }
}

/// Index text held in memory by the caller.
#[derive(Debug, Clone, Copy)]
pub struct StrSource<'a> {
    /// JIS X 0208 index text.
    pub jis0208: &'a str,
    /// JIS X 0212 index text.
    pub jis0212: &'a str,
}

impl<'a> StrSource<'a> {
    /// Create a source from two strings.
    pub fn new(jis0208: &'a str, jis0212: &'a str) -> Self {
        Self { jis0208, jis0212 }
    }
}

impl DataSource for StrSource<'_> {
    fn read(&self, table: Table) -> Result<Cow<'_, str>, TableLoadError> {
        Ok(Cow::Borrowed(match table {
            Table::Jis0208 => self.jis0208,
            Table::Jis0212 => self.jis0212,
        }))
    }
}
