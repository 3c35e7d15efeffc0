//! The EUC-JP codec and its capability trait.

use eucjp_core::{CodecError, CodecOptions, CodecResult, SubstitutionPolicy};
use eucjp_tables::CodeTables;

use crate::decoder::Decoder;
use crate::encoder::Encoder;

/// The operations a text codec offers its callers.
pub trait TextCodec {
    /// Encode Unicode text into bytes.
    fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError>;

    /// Decode bytes into Unicode text.
    fn decode(&self, bytes: &[u8]) -> Result<String, CodecError>;

    /// Upper bound hint for the bytes produced from `char_count` UTF-16
    /// code units.
    fn max_byte_count(&self, char_count: usize) -> usize;

    /// Upper bound hint for the UTF-16 code units produced from
    /// `byte_count` bytes.
    fn max_char_count(&self, byte_count: usize) -> usize;
}

/// WHATWG EUC-JP codec.
///
/// Holds a reference to the code tables and the options every call runs
/// with. Calls are independent of each other, so one codec can be shared
/// freely across threads.
///
/// ```
/// use eucjp::EucJp;
///
/// let codec = EucJp::new().unwrap();
/// let bytes = codec.encode("日本語").unwrap();
/// assert_eq!(bytes, [0xC6, 0xFC, 0xCB, 0xDC, 0xB8, 0xEC]);
/// assert_eq!(codec.decode(&bytes).unwrap(), "日本語");
/// ```
#[derive(Debug, Clone)]
pub struct EucJp<'t> {
    tables: &'t CodeTables,
    options: CodecOptions,
}

impl EucJp<'static> {
    /// Codec over the process-wide embedded tables, with default options.
    ///
    /// Fails only if the embedded tables cannot be loaded.
    pub fn new() -> Result<Self, CodecError> {
        let tables = CodeTables::global().map_err(CodecError::from)?;
        Ok(Self::with_tables(tables))
    }
}

impl<'t> EucJp<'t> {
    /// Codec over caller-supplied tables, with default options.
    pub fn with_tables(tables: &'t CodeTables) -> Self {
        Self {
            tables,
            options: CodecOptions::default(),
        }
    }

    /// Replace the options (builder pattern).
    pub fn options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace only the substitution policy (builder pattern).
    pub fn substitution(mut self, policy: SubstitutionPolicy) -> Self {
        self.options.substitution = policy;
        self
    }

    /// The options every call runs with.
    pub fn codec_options(&self) -> &CodecOptions {
        &self.options
    }

    /// The tables this codec reads.
    pub fn tables(&self) -> &'t CodeTables {
        self.tables
    }

    fn encoder(&self) -> Encoder<'_> {
        Encoder::new(self.tables, &self.options)
    }

    fn decoder(&self) -> Decoder<'_> {
        Decoder::new(self.tables, &self.options)
    }

    /// Encode `text` into a new buffer.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        self.encode_with_report(text).map(|r| r.value)
    }

    /// Encode `text`, returning the bytes together with a warning for every
    /// substitution.
    pub fn encode_with_report(&self, text: &str) -> Result<CodecResult<Vec<u8>>, CodecError> {
        self.options.check_input_len(text.len())?;
        let mut out = Vec::new();
        let warnings = self.encoder().encode_str(text, &mut out)?;
        Ok(CodecResult::with_warnings(out, warnings))
    }

    /// Encode `text`, appending to `out`.
    ///
    /// On error `out` is left as it was before the call.
    pub fn encode_into(&self, text: &str, out: &mut Vec<u8>) -> Result<(), CodecError> {
        self.options.check_input_len(text.len())?;
        let start = out.len();
        self.encoder().encode_str(text, out).map(drop).inspect_err(|_| {
            out.truncate(start);
        })
    }

    /// Encode UTF-16 code units, combining surrogate pairs first.
    pub fn encode_utf16(&self, units: &[u16]) -> Result<Vec<u8>, CodecError> {
        self.options.check_input_len(units.len().saturating_mul(2))?;
        let mut out = Vec::new();
        self.encoder().encode_utf16(units, &mut out)?;
        Ok(out)
    }

    /// Decode `bytes` into a new string.
    pub fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
        self.decode_with_report(bytes).map(|r| r.value)
    }

    /// Decode `bytes`, returning the text together with a warning for every
    /// substitution.
    pub fn decode_with_report(&self, bytes: &[u8]) -> Result<CodecResult<String>, CodecError> {
        self.options.check_input_len(bytes.len())?;
        let mut out = String::new();
        let warnings = self.decoder().decode_bytes(bytes, &mut out)?;
        Ok(CodecResult::with_warnings(out, warnings))
    }

    /// Decode `bytes`, appending to `out`.
    ///
    /// On error `out` is left as it was before the call.
    pub fn decode_into(&self, bytes: &[u8], out: &mut String) -> Result<(), CodecError> {
        self.options.check_input_len(bytes.len())?;
        let start = out.len();
        self.decoder().decode_bytes(bytes, out).map(drop).inspect_err(|_| {
            out.truncate(start);
        })
    }

    /// Exact number of bytes [`encode`](Self::encode) produces for `text`.
    pub fn byte_count(&self, text: &str) -> Result<usize, CodecError> {
        self.encode(text).map(|bytes| bytes.len())
    }

    /// Exact number of UTF-16 code units [`decode`](Self::decode) produces
    /// for `bytes`.
    pub fn char_count(&self, bytes: &[u8]) -> Result<usize, CodecError> {
        self.decode(bytes).map(|text| text.encode_utf16().count())
    }

    /// Worst-case bytes for `char_count` UTF-16 code units: three per unit.
    ///
    /// This is a sizing hint, not a bound: a custom substitution policy may
    /// emit more than three bytes for one unmappable scalar value.
    pub fn max_byte_count(char_count: usize) -> usize {
        char_count.saturating_mul(3)
    }

    /// Worst-case UTF-16 code units for `byte_count` bytes: one per byte.
    ///
    /// This is a sizing hint, not a bound: a substitution producing a
    /// supplementary-plane character, or more than one character per
    /// offending byte, exceeds it.
    pub fn max_char_count(byte_count: usize) -> usize {
        byte_count
    }
}

impl TextCodec for EucJp<'_> {
    fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        EucJp::encode(self, text)
    }

    fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
        EucJp::decode(self, bytes)
    }

    fn max_byte_count(&self, char_count: usize) -> usize {
        EucJp::max_byte_count(char_count)
    }

    fn max_char_count(&self, byte_count: usize) -> usize {
        EucJp::max_char_count(byte_count)
    }
}
