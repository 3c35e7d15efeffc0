//! Parser for WHATWG-style index data.
//!
//! Each data line has the form `pointer<TAB>0xCODEPOINT[<TAB>comment]`.
//! Lines that are blank or start with `#` are skipped.

use crate::error::TableLoadError;
use crate::source::DataSource;
use crate::tables::{CodeTables, GRID_SIZE, Table};

/// Builds [`CodeTables`] from line-oriented index data.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeTableLoader;

impl CodeTableLoader {
    /// Read both tables from `source` and build the code tables.
    ///
    /// A leading UTF-8 byte order mark is ignored.
    pub fn load(source: &impl DataSource) -> Result<CodeTables, TableLoadError> {
        let jis0208 = source.read(Table::Jis0208)?;
        let jis0212 = source.read(Table::Jis0212)?;
        Self::from_lines(strip_bom(&jis0208).lines(), strip_bom(&jis0212).lines())
    }

    /// Build the code tables from two ordered line sequences.
    ///
    /// `jis0208` fills the forward and reverse JIS X 0208 mappings,
    /// `jis0212` fills the forward JIS X 0212 mapping. The first malformed
    /// line aborts the load.
    pub fn from_lines<'a>(
        jis0208: impl IntoIterator<Item = &'a str>,
        jis0212: impl IntoIterator<Item = &'a str>,
    ) -> Result<CodeTables, TableLoadError> {
        let mut tables = CodeTables::empty();
        for (table, lines) in [
            (Table::Jis0208, jis0208.into_iter().collect::<Vec<_>>()),
            (Table::Jis0212, jis0212.into_iter().collect::<Vec<_>>()),
        ] {
            for entry in parse_entries(table, lines) {
                let (pointer, ch) = entry?;
                if pointer >= GRID_SIZE {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(table = %table, pointer, "skipping entry outside the grid");
                    continue;
                }
                tables.insert(table, pointer, ch);
            }

            #[cfg(feature = "tracing")]
            tracing::debug!(table = %table, cells = tables.len(table), "loaded code table");
        }
        Ok(tables)
    }
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}').unwrap_or(text)
}

/// Parse every data line of `lines` into `(pointer, scalar value)` pairs.
///
/// Pointers are returned as written, including any outside the 94×94 grid.
pub fn parse_entries<'a>(
    table: Table,
    lines: impl IntoIterator<Item = &'a str>,
) -> impl Iterator<Item = Result<(usize, char), TableLoadError>> {
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
        .map(move |(i, line)| parse_line(table, i + 1, line))
}

/// Parse a single data line.
fn parse_line(table: Table, line_no: usize, line: &str) -> Result<(usize, char), TableLoadError> {
    let mut fields = line.split('\t');
    let index_field = fields.next().unwrap_or("");
    let code_field = fields.next().ok_or(TableLoadError::MissingField {
        table,
        line: line_no,
    })?;

    let pointer = index_field
        .trim_start_matches(' ')
        .parse::<usize>()
        .map_err(|_| TableLoadError::InvalidIndex {
            table,
            line: line_no,
            field: index_field.to_string(),
        })?;

    let invalid_code_point = || TableLoadError::InvalidCodePoint {
        table,
        line: line_no,
        field: code_field.to_string(),
    };
    // The two-character prefix is "0x" in the WHATWG data; its content is not checked.
    let hex = code_field
        .char_indices()
        .nth(2)
        .map(|(pos, _)| &code_field[pos..])
        .ok_or_else(invalid_code_point)?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid_code_point());
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| invalid_code_point())?;
    let ch = char::from_u32(value).ok_or(TableLoadError::NotAScalarValue {
        table,
        line: line_no,
        value,
    })?;

    Ok((pointer, ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(a: &str, b: &str) -> Result<CodeTables, TableLoadError> {
        CodeTableLoader::from_lines(a.lines(), b.lines())
    }

    #[test]
    fn parses_whatwg_line_with_comment_field() {
        let entry = parse_line(Table::Jis0208, 1, "    0\t0x3000\t\u{3000} (IDEOGRAPHIC SPACE)");
        assert_eq!(entry.unwrap(), (0, '\u{3000}'));
    }

    #[test]
    fn parses_line_without_comment_field() {
        let entry = parse_line(Table::Jis0208, 1, "1410\t0x4E9C");
        assert_eq!(entry.unwrap(), (1410, '亜'));
    }

    #[test]
    fn lowercase_hex_is_accepted() {
        let entry = parse_line(Table::Jis0212, 1, "108\t0x02d8");
        assert_eq!(entry.unwrap(), (108, '\u{02D8}'));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let data = "# header\n\n   \n    0\t0x3000\n# trailing\n    1\t0x3001\n";
        let tables = load(data, "").unwrap();
        assert_eq!(tables.len(Table::Jis0208), 2);
        assert_eq!(tables.lookup(Table::Jis0208, 1), Some('\u{3001}'));
    }

    #[test]
    fn table_b_has_no_reverse_mapping() {
        let tables = load("", "108\t0x02D8\n").unwrap();
        assert_eq!(tables.lookup(Table::Jis0212, 108), Some('\u{02D8}'));
        assert_eq!(tables.jis0208_pointer('\u{02D8}'), None);
    }

    #[test]
    fn tables_may_share_code_points() {
        let tables = load("10\t0x4E9C\n", "20\t0x4E9C\n").unwrap();
        assert_eq!(tables.lookup(Table::Jis0208, 10), Some('亜'));
        assert_eq!(tables.lookup(Table::Jis0212, 20), Some('亜'));
        assert_eq!(tables.jis0208_pointer('亜'), Some(10));
    }

    #[test]
    fn out_of_grid_entries_are_skipped() {
        let tables = load("8634\t0x2170\n10716\t0x2170\n", "").unwrap();
        assert_eq!(tables.len(Table::Jis0208), 1);
        assert_eq!(tables.jis0208_pointer('ⅰ'), Some(8634));
    }

    #[test]
    fn loading_continues_past_out_of_grid_entries() {
        let tables = load("9000\t0x2170\n0\t0x3000\n", "8836\t0x02D8\n108\t0x02D8\n").unwrap();
        assert_eq!(tables.lookup(Table::Jis0208, 0), Some('\u{3000}'));
        assert_eq!(tables.lookup(Table::Jis0212, 108), Some('\u{02D8}'));
        assert_eq!(tables.len(Table::Jis0208), 1);
        assert_eq!(tables.len(Table::Jis0212), 1);
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let source = crate::source::StrSource::new(
            "\u{FEFF}0\t0x3000\n",
            "\u{FEFF}# b\n108\t0x02D8\n",
        );
        let tables = CodeTableLoader::load(&source).unwrap();
        assert_eq!(tables.lookup(Table::Jis0208, 0), Some('\u{3000}'));
        assert_eq!(tables.lookup(Table::Jis0212, 108), Some('\u{02D8}'));
    }

    #[test]
    fn first_pointer_wins_in_reverse_mapping() {
        let tables = load("159\t0x2252\n1207\t0x2252\n", "").unwrap();
        assert_eq!(tables.jis0208_pointer('≒'), Some(159));
        assert_eq!(tables.lookup(Table::Jis0208, 1207), Some('≒'));
    }

    #[test]
    fn missing_code_point_field_is_fatal() {
        let err = load("# c\n0 0x3000\n", "").unwrap_err();
        assert!(matches!(
            err,
            TableLoadError::MissingField {
                table: Table::Jis0208,
                line: 2
            }
        ));
    }

    #[test]
    fn non_decimal_index_is_fatal() {
        let err = load("", "0x10\t0x3000\n").unwrap_err();
        match err {
            TableLoadError::InvalidIndex { table, line, field } => {
                assert_eq!(table, Table::Jis0212);
                assert_eq!(line, 1);
                assert_eq!(field, "0x10");
            }
            other => panic!("expected InvalidIndex, got {other:?}"),
        }
    }

    #[test]
    fn negative_index_is_fatal() {
        let err = load("-1\t0x3000\n", "").unwrap_err();
        assert!(matches!(err, TableLoadError::InvalidIndex { .. }));
    }

    #[test]
    fn non_hex_code_point_is_fatal() {
        let err = load("0\t0xGG\n", "").unwrap_err();
        assert!(matches!(err, TableLoadError::InvalidCodePoint { line: 1, .. }));
    }

    #[test]
    fn short_code_point_field_is_fatal() {
        let err = load("0\t0x\n", "").unwrap_err();
        assert!(matches!(err, TableLoadError::InvalidCodePoint { .. }));
        let err = load("0\t3\n", "").unwrap_err();
        assert!(matches!(err, TableLoadError::InvalidCodePoint { .. }));
    }

    #[test]
    fn signed_code_point_is_fatal() {
        let err = load("0\t0x+41\n", "").unwrap_err();
        assert!(matches!(err, TableLoadError::InvalidCodePoint { .. }));
    }

    #[test]
    fn surrogate_code_point_is_fatal() {
        let err = load("0\t0xD800\n", "").unwrap_err();
        assert!(matches!(
            err,
            TableLoadError::NotAScalarValue { value: 0xD800, .. }
        ));
    }

    #[test]
    fn error_in_table_b_aborts_after_valid_table_a() {
        let err = load("0\t0x3000\n", "0\t0x3000\nbad\n").unwrap_err();
        assert!(matches!(
            err,
            TableLoadError::MissingField {
                table: Table::Jis0212,
                line: 2
            }
        ));
    }

    #[test]
    fn crlf_line_endings() {
        let tables = load("0\t0x3000\r\n1\t0x3001\r\n", "").unwrap();
        assert_eq!(tables.lookup(Table::Jis0208, 1), Some('\u{3001}'));
    }

    #[test]
    fn parse_entries_reports_out_of_grid_pointers() {
        let entries: Vec<_> = parse_entries(Table::Jis0208, ["10716\t0x2170"])
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(entries, vec![(10716, 'ⅰ')]);
    }
}
