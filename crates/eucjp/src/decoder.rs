//! EUC-JP → Unicode decoder.
//!
//! A single pass over the input, one byte at a time. The only state carried
//! between bytes is the pending lead byte and whether it belongs to the
//! JIS X 0212 plane (it was preceded by `0x8F`).

use eucjp_core::{CodecError, CodecOptions, CodecWarning, REPLACEMENT_CHAR};
use eucjp_tables::{CodeTables, ROW_LEN, Table};

use crate::encoder::{JIS_OFFSET, SS2, SS3};

/// Cursor of the decoding state machine.
#[derive(Debug, Default, Clone, Copy)]
struct DecoderState {
    /// Previously read lead byte, 0 when none is pending.
    pending_lead: u8,
    /// Whether `pending_lead` is the row byte of a JIS X 0212 sequence.
    is_plane_b: bool,
    /// Offset of `pending_lead` in the input.
    lead_offset: usize,
}

impl DecoderState {
    fn reset(&mut self) {
        *self = Self::default();
    }
}

fn is_jis_byte(byte: u8) -> bool {
    (0xA1..=0xFE).contains(&byte)
}

fn halfwidth_katakana(byte: u8) -> char {
    // Always within U+FF61..=U+FF9F for bytes 0xA1..=0xDF.
    char::from_u32(0xFF61 - 0xA1 + u32::from(byte)).unwrap_or(REPLACEMENT_CHAR)
}

/// Decodes EUC-JP bytes into Unicode text.
///
/// A decoder borrows the tables and options of its codec; every call starts
/// from a fresh state.
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    tables: &'a CodeTables,
    options: &'a CodecOptions,
}

impl<'a> Decoder<'a> {
    /// Create a decoder over `tables`, substituting per `options`.
    pub fn new(tables: &'a CodeTables, options: &'a CodecOptions) -> Self {
        Self { tables, options }
    }

    /// Append the decoding of `bytes` to `out`.
    ///
    /// Offsets in warnings and errors are byte offsets into `bytes`.
    pub fn decode_bytes(
        &self,
        bytes: &[u8],
        out: &mut String,
    ) -> Result<Vec<CodecWarning>, CodecError> {
        let mut warnings = Vec::new();
        let mut state = DecoderState::default();
        out.reserve(bytes.len());

        for (offset, &current) in bytes.iter().enumerate() {
            match state.pending_lead {
                SS2 if (0xA1..=0xDF).contains(&current) => {
                    out.push(halfwidth_katakana(current));
                    state.reset();
                }
                SS3 if is_jis_byte(current) => {
                    state.pending_lead = current;
                    state.is_plane_b = true;
                    state.lead_offset = offset;
                }
                0 => {
                    if current <= 0x7F {
                        out.push(char::from(current));
                    } else if current == SS2 || current == SS3 || is_jis_byte(current) {
                        state.pending_lead = current;
                        state.lead_offset = offset;
                    } else {
                        self.substitute(&[current], offset, false, out, &mut warnings)?;
                    }
                }
                lead => {
                    let DecoderState {
                        is_plane_b,
                        lead_offset,
                        ..
                    } = state;
                    state.reset();

                    if is_jis_byte(lead) && is_jis_byte(current) {
                        let pointer = usize::from(lead - JIS_OFFSET) * ROW_LEN
                            + usize::from(current - JIS_OFFSET);
                        let table = if is_plane_b {
                            Table::Jis0212
                        } else {
                            Table::Jis0208
                        };
                        match self.tables.lookup(table, pointer) {
                            Some(ch) => out.push(ch),
                            // Unassigned cell: report the whole sequence.
                            None if is_plane_b => self.substitute(
                                &[SS3, lead, current],
                                lead_offset - 1,
                                false,
                                out,
                                &mut warnings,
                            )?,
                            None => self.substitute(
                                &[lead, current],
                                lead_offset,
                                false,
                                out,
                                &mut warnings,
                            )?,
                        }
                    } else {
                        self.substitute(&[lead, current], lead_offset, false, out, &mut warnings)?;
                    }
                }
            }
        }

        if state.pending_lead != 0 {
            self.substitute(
                &[state.pending_lead],
                state.lead_offset,
                true,
                out,
                &mut warnings,
            )?;
        }

        Ok(warnings)
    }

    fn substitute(
        &self,
        bytes: &[u8],
        offset: usize,
        truncated: bool,
        out: &mut String,
        warnings: &mut Vec<CodecWarning>,
    ) -> Result<(), CodecError> {
        #[cfg(feature = "tracing")]
        tracing::trace!(?bytes, offset, truncated, "invalid byte sequence");

        self.options
            .substitution
            .on_invalid_byte_sequence(bytes, offset, out)?;
        if self.options.collect_warnings {
            warnings.push(if truncated {
                CodecWarning::truncated(bytes, offset)
            } else {
                CodecWarning::invalid_sequence(bytes, offset)
            });
        }
        Ok(())
    }
}
