//! Unicode → EUC-JP encoder.

use eucjp_core::{CodecError, CodecOptions, CodecWarning};
use eucjp_tables::{CodeTables, ROW_LEN};

/// First byte of a two-byte JIS X 0201 half-width katakana sequence.
pub(crate) const SS2: u8 = 0x8E;
/// First byte of a three-byte JIS X 0212 sequence.
pub(crate) const SS3: u8 = 0x8F;
/// Offset of row and cell bytes in the 94×94 planes.
pub(crate) const JIS_OFFSET: u8 = 0xA1;

const HALFWIDTH_FIRST: u32 = 0xFF61;
const HALFWIDTH_LAST: u32 = 0xFF9F;

/// Encodes Unicode text as EUC-JP.
///
/// An encoder borrows the tables and options of its codec and keeps no state
/// between calls.
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a> {
    tables: &'a CodeTables,
    options: &'a CodecOptions,
}

impl<'a> Encoder<'a> {
    /// Create an encoder over `tables`, substituting per `options`.
    pub fn new(tables: &'a CodeTables, options: &'a CodecOptions) -> Self {
        Self { tables, options }
    }

    /// Append the encoding of `text` to `out`.
    ///
    /// Positions in warnings and errors are byte offsets into `text`.
    pub fn encode_str(&self, text: &str, out: &mut Vec<u8>) -> Result<Vec<CodecWarning>, CodecError> {
        let mut warnings = Vec::new();
        out.reserve(text.len());
        for (position, ch) in text.char_indices() {
            self.encode_char(ch, position, out, &mut warnings)?;
        }
        Ok(warnings)
    }

    /// Append the encoding of UTF-16 `units` to `out`.
    ///
    /// Surrogate pairs are combined before encoding; an unpaired surrogate
    /// goes to the substitution policy as-is. Positions in warnings and
    /// errors are code unit indices.
    pub fn encode_utf16(
        &self,
        units: &[u16],
        out: &mut Vec<u8>,
    ) -> Result<Vec<CodecWarning>, CodecError> {
        let mut warnings = Vec::new();
        out.reserve(units.len());
        let mut position = 0;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(ch) => {
                    self.encode_char(ch, position, out, &mut warnings)?;
                    position += ch.len_utf16();
                }
                Err(err) => {
                    let surrogate = u32::from(err.unpaired_surrogate());
                    self.substitute(surrogate, position, out, &mut warnings)?;
                    position += 1;
                }
            }
        }
        Ok(warnings)
    }

    fn encode_char(
        &self,
        ch: char,
        position: usize,
        out: &mut Vec<u8>,
        warnings: &mut Vec<CodecWarning>,
    ) -> Result<(), CodecError> {
        let code_point = u32::from(ch);
        match code_point {
            0x00..=0x7F => out.push(code_point as u8),
            0x00A5 => out.push(0x5C),
            0x203E => out.push(0x7E),
            HALFWIDTH_FIRST..=HALFWIDTH_LAST => {
                out.extend_from_slice(&[SS2, (code_point - HALFWIDTH_FIRST) as u8 + JIS_OFFSET]);
            }
            _ => {
                // MINUS SIGN shares the FULLWIDTH HYPHEN-MINUS cell.
                let key = if ch == '\u{2212}' { '\u{FF0D}' } else { ch };
                match self.tables.jis0208_pointer(key) {
                    Some(pointer) => out.extend_from_slice(&[
                        (pointer / ROW_LEN) as u8 + JIS_OFFSET,
                        (pointer % ROW_LEN) as u8 + JIS_OFFSET,
                    ]),
                    None => self.substitute(code_point, position, out, warnings)?,
                }
            }
        }
        Ok(())
    }

    fn substitute(
        &self,
        code_point: u32,
        position: usize,
        out: &mut Vec<u8>,
        warnings: &mut Vec<CodecWarning>,
    ) -> Result<(), CodecError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(code_point, position, "unmappable code point");

        self.options
            .substitution
            .on_unmappable_code_point(code_point, position, out)?;
        if self.options.collect_warnings {
            warnings.push(CodecWarning::unmappable(code_point, position));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eucjp_core::{CodecWarningCode, SubstitutionPolicy};
    use eucjp_tables::{CodeTableLoader, GRID_SIZE};

    /// A handful of JIS X 0208 cells, enough to exercise every branch.
    fn small_tables() -> CodeTables {
        CodeTableLoader::from_lines(
            [
                "    0\t0x3000",
                "   60\t0xFF0D",
                "  159\t0x2252",
                "  283\t0x3042",
                " 1207\t0x2252",
                " 1410\t0x4E9C",
                " 8835\t0x9ED1",
            ],
            ["108\t0x02D8"],
        )
        .unwrap()
    }

    fn encode_with(options: &CodecOptions, text: &str) -> Result<Vec<u8>, CodecError> {
        let tables = small_tables();
        let mut out = Vec::new();
        Encoder::new(&tables, options).encode_str(text, &mut out)?;
        Ok(out)
    }

    fn encode(text: &str) -> Vec<u8> {
        encode_with(&CodecOptions::default(), text).unwrap()
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(encode("A"), vec![0x41]);
        assert_eq!(encode("\0~\x7F"), vec![0x00, 0x7E, 0x7F]);
    }

    #[test]
    fn yen_and_overline_fold_to_ascii() {
        assert_eq!(encode("\u{00A5}"), vec![0x5C]);
        assert_eq!(encode("\u{203E}"), vec![0x7E]);
    }

    #[test]
    fn halfwidth_katakana_boundaries() {
        assert_eq!(encode("\u{FF61}"), vec![0x8E, 0xA1]);
        assert_eq!(encode("\u{FF71}"), vec![0x8E, 0xB1]);
        assert_eq!(encode("\u{FF9F}"), vec![0x8E, 0xDF]);
    }

    #[test]
    fn jis0208_row_and_cell() {
        assert_eq!(encode("\u{3000}"), vec![0xA1, 0xA1]);
        assert_eq!(encode("あ"), vec![0xA4, 0xA2]);
        assert_eq!(encode("亜"), vec![0xB0, 0xA1]);
    }

    #[test]
    fn last_grid_cell_encodes_to_fe_fe() {
        assert_eq!(8835, GRID_SIZE - 1);
        assert_eq!(encode("\u{9ED1}"), vec![0xFE, 0xFE]);
    }

    #[test]
    fn minus_sign_encodes_as_fullwidth_hyphen_minus() {
        assert_eq!(encode("\u{2212}"), vec![0xA1, 0xDD]);
        assert_eq!(encode("\u{2212}"), encode("\u{FF0D}"));
    }

    #[test]
    fn duplicate_code_point_uses_lowest_pointer() {
        // 159 = row 1, cell 65
        assert_eq!(encode("≒"), vec![0xA2, 0xE2]);
    }

    #[test]
    fn jis0212_only_character_is_unmappable() {
        assert_eq!(encode("\u{02D8}"), vec![b'?']);
    }

    #[test]
    fn unmappable_replacement_records_warning() {
        let tables = small_tables();
        let options = CodecOptions::default();
        let mut out = Vec::new();
        let warnings = Encoder::new(&tables, &options)
            .encode_str("a\u{20AC}b", &mut out)
            .unwrap();
        assert_eq!(out, b"a?b");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].code, CodecWarningCode::UnmappableCodePoint);
        assert_eq!(warnings[0].code_point, Some(0x20AC));
        assert_eq!(warnings[0].offset, 1);
    }

    #[test]
    fn warnings_can_be_disabled() {
        let tables = small_tables();
        let options = CodecOptions {
            collect_warnings: false,
            ..CodecOptions::default()
        };
        let mut out = Vec::new();
        let warnings = Encoder::new(&tables, &options)
            .encode_str("\u{20AC}", &mut out)
            .unwrap();
        assert!(warnings.is_empty());
        assert_eq!(out, b"?");
    }

    #[test]
    fn fail_fast_reports_byte_position() {
        let err = encode_with(&CodecOptions::strict(), "あ\u{1F600}").unwrap_err();
        assert_eq!(
            err,
            CodecError::UnmappableCodePoint {
                code_point: 0x1F600,
                position: 3
            }
        );
    }

    #[test]
    fn custom_policy_sees_original_code_point() {
        let options = CodecOptions {
            substitution: SubstitutionPolicy::custom(
                |cp| Some(format!("<{cp:X}>").into_bytes()),
                |_| None,
            ),
            ..CodecOptions::default()
        };
        let out = encode_with(&options, "x\u{1F600}").unwrap();
        assert_eq!(out, b"x<1F600>");
    }

    #[test]
    fn custom_policy_may_drop_input() {
        let options = CodecOptions {
            substitution: SubstitutionPolicy::custom(|_| Some(Vec::new()), |_| None),
            ..CodecOptions::default()
        };
        assert_eq!(encode_with(&options, "\u{20AC}A").unwrap(), b"A");
    }

    #[test]
    fn utf16_surrogate_pair_is_one_scalar() {
        let tables = small_tables();
        let options = CodecOptions::strict();
        let units: Vec<u16> = "A\u{1F600}".encode_utf16().collect();
        let err = Encoder::new(&tables, &options)
            .encode_utf16(&units, &mut Vec::new())
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::UnmappableCodePoint {
                code_point: 0x1F600,
                position: 1
            }
        );
    }

    #[test]
    fn utf16_unpaired_surrogate_goes_to_policy() {
        let tables = small_tables();
        let options = CodecOptions::default();
        let mut out = Vec::new();
        let warnings = Encoder::new(&tables, &options)
            .encode_utf16(&[0x0041, 0xD800, 0x0042], &mut out)
            .unwrap();
        assert_eq!(out, b"A?B");
        assert_eq!(warnings[0].code_point, Some(0xD800));
        assert_eq!(warnings[0].offset, 1);
    }

    #[test]
    fn utf16_positions_count_code_units() {
        let tables = small_tables();
        let options = CodecOptions::default();
        let units: Vec<u16> = "\u{1F600}\u{20AC}".encode_utf16().collect();
        let mut out = Vec::new();
        let warnings = Encoder::new(&tables, &options)
            .encode_utf16(&units, &mut out)
            .unwrap();
        let offsets: Vec<usize> = warnings.iter().map(|w| w.offset).collect();
        assert_eq!(offsets, vec![0, 2]);
    }

    #[test]
    fn appends_to_existing_buffer() {
        let tables = small_tables();
        let options = CodecOptions::default();
        let mut out = vec![0xFF];
        Encoder::new(&tables, &options)
            .encode_str("A", &mut out)
            .unwrap();
        assert_eq!(out, vec![0xFF, 0x41]);
    }
}
