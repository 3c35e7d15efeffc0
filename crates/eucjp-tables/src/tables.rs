//! Immutable JIS X 0208 / JIS X 0212 lookup tables.
//!
//! Both character sets are 94×94 grids addressed by a linear pointer
//! `row * 94 + cell`. JIS X 0208 is mapped both ways; JIS X 0212 is only
//! ever decoded, so it has no reverse mapping.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::TableLoadError;
use crate::loader::CodeTableLoader;
use crate::source::{DataSource, EmbeddedSource};

/// Number of cells in a row of a JIS character plane.
pub const ROW_LEN: usize = 94;

/// Number of cells in a JIS character plane.
pub const GRID_SIZE: usize = ROW_LEN * ROW_LEN;

/// One of the two character planes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// JIS X 0208, the primary plane (encodable and decodable).
    Jis0208,
    /// JIS X 0212, the supplementary plane (decode-only).
    Jis0212,
}

impl Table {
    /// Short lowercase name, as used in the WHATWG index file names.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Jis0208 => "jis0208",
            Table::Jis0212 => "jis0212",
        }
    }

    /// File name of this table's index data.
    pub fn file_name(&self) -> &'static str {
        match self {
            Table::Jis0208 => "index-jis0208.txt",
            Table::Jis0212 => "index-jis0212.txt",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static GLOBAL: OnceLock<Result<CodeTables, TableLoadError>> = OnceLock::new();

/// The three lookup tables the codec runs on.
///
/// Built once by [`CodeTableLoader`] and never mutated afterwards, so a
/// shared reference can be read from any number of threads.
#[derive(Clone)]
pub struct CodeTables {
    /// JIS X 0208 pointer → scalar value, `GRID_SIZE` cells.
    jis0208: Box<[Option<char>]>,
    /// Scalar value → lowest JIS X 0208 pointer holding it.
    jis0208_reverse: HashMap<char, u16>,
    /// JIS X 0212 pointer → scalar value, `GRID_SIZE` cells.
    jis0212: Box<[Option<char>]>,
}

impl fmt::Debug for CodeTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeTables")
            .field("jis0208", &self.len(Table::Jis0208))
            .field("jis0208_reverse", &self.jis0208_reverse.len())
            .field("jis0212", &self.len(Table::Jis0212))
            .finish()
    }
}

impl CodeTables {
    pub(crate) fn empty() -> Self {
        Self {
            jis0208: vec![None; GRID_SIZE].into_boxed_slice(),
            jis0208_reverse: HashMap::new(),
            jis0212: vec![None; GRID_SIZE].into_boxed_slice(),
        }
    }

    /// The process-wide tables built from the embedded WHATWG index data.
    ///
    /// The first call loads the tables; concurrent first calls wait for that
    /// single load. A failed load is remembered and returned to every caller.
    pub fn global() -> Result<&'static CodeTables, &'static TableLoadError> {
        GLOBAL
            .get_or_init(|| CodeTableLoader::load(&EmbeddedSource))
            .as_ref()
    }

    /// Build tables from an arbitrary data source.
    pub fn load(source: &impl DataSource) -> Result<Self, TableLoadError> {
        CodeTableLoader::load(source)
    }

    /// Record a cell of `table`. Pointers outside the grid are ignored.
    ///
    /// For JIS X 0208 the reverse mapping keeps the lowest pointer of each
    /// scalar value.
    pub(crate) fn insert(&mut self, table: Table, pointer: usize, ch: char) {
        if pointer >= GRID_SIZE {
            return;
        }
        match table {
            Table::Jis0212 => self.jis0212[pointer] = Some(ch),
            Table::Jis0208 => {
                // A redefined cell must not leave a stale reverse entry behind.
                if let Some(previous) = self.jis0208[pointer].replace(ch) {
                    if self.jis0208_reverse.get(&previous) == Some(&(pointer as u16)) {
                        self.jis0208_reverse.remove(&previous);
                        // The old value may still sit at a higher pointer.
                        if let Some(remaining) =
                            self.jis0208.iter().position(|c| *c == Some(previous))
                        {
                            self.jis0208_reverse.insert(previous, remaining as u16);
                        }
                    }
                }
                let slot = self.jis0208_reverse.entry(ch).or_insert(pointer as u16);
                if usize::from(*slot) > pointer {
                    *slot = pointer as u16;
                }
            }
        }
    }

    /// Look up the scalar value at `pointer` in `table`.
    pub fn lookup(&self, table: Table, pointer: usize) -> Option<char> {
        match table {
            Table::Jis0208 => self.jis0208.get(pointer).copied().flatten(),
            Table::Jis0212 => self.jis0212.get(pointer).copied().flatten(),
        }
    }

    /// JIS X 0208 pointer for a scalar value, if it is encodable.
    pub fn jis0208_pointer(&self, ch: char) -> Option<usize> {
        self.jis0208_reverse.get(&ch).map(|&p| usize::from(p))
    }

    /// Number of assigned cells in `table`.
    pub fn len(&self, table: Table) -> usize {
        let cells = match table {
            Table::Jis0208 => &self.jis0208,
            Table::Jis0212 => &self.jis0212,
        };
        cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns true if neither table has any assigned cell.
    pub fn is_empty(&self) -> bool {
        self.len(Table::Jis0208) == 0 && self.len(Table::Jis0212) == 0
    }

    /// Number of distinct encodable scalar values.
    pub fn encodable_len(&self) -> usize {
        self.jis0208_reverse.len()
    }

    /// All `(pointer, scalar value)` pairs of the reverse JIS X 0208 mapping,
    /// ordered by pointer.
    pub fn encodable(&self) -> Vec<(usize, char)> {
        let mut pairs: Vec<(usize, char)> = self
            .jis0208_reverse
            .iter()
            .map(|(&ch, &p)| (usize::from(p), ch))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    /// All assigned `(pointer, scalar value)` cells of `table`, in pointer
    /// order.
    pub fn cells(&self, table: Table) -> impl Iterator<Item = (usize, char)> + '_ {
        let cells = match table {
            Table::Jis0208 => &self.jis0208,
            Table::Jis0212 => &self.jis0212,
        };
        cells
            .iter()
            .enumerate()
            .filter_map(|(p, c)| c.map(|ch| (p, ch)))
    }
}
