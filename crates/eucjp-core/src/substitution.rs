//! Substitution policies for unmappable input.
//!
//! The encoder consults a [`SubstitutionPolicy`] whenever a scalar value has
//! no EUC-JP representation, and the decoder consults it whenever a byte or
//! byte sequence is not valid EUC-JP. The policy either appends a substitute
//! to the output and lets the call continue, or refuses, which aborts the
//! whole call with a [`CodecError`].

use std::fmt;
use std::sync::Arc;

use crate::error::CodecError;

/// Byte emitted for an unmappable scalar value under
/// [`SubstitutionPolicy::Replacement`].
pub const REPLACEMENT_BYTE: u8 = b'?';

/// Character emitted for an invalid byte sequence under
/// [`SubstitutionPolicy::Replacement`].
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Caller-supplied substitution strategy.
///
/// Returning `None` refuses the substitution; the codec then fails the call
/// exactly as [`SubstitutionPolicy::FailFast`] would. Returning an empty
/// substitute drops the offending input silently.
pub trait SubstitutionHandler: Send + Sync {
    /// Bytes to emit in place of a scalar value that cannot be encoded.
    ///
    /// `code_point` is a Unicode scalar value, or the 16-bit value of an
    /// unpaired surrogate when encoding UTF-16 input.
    fn unmappable_code_point(&self, code_point: u32) -> Option<Vec<u8>>;

    /// Text to emit in place of a byte sequence that cannot be decoded.
    fn invalid_byte_sequence(&self, bytes: &[u8]) -> Option<String>;
}

/// [`SubstitutionHandler`] built from a pair of closures.
struct FnHandler<E, D> {
    on_encode: E,
    on_decode: D,
}

impl<E, D> SubstitutionHandler for FnHandler<E, D>
where
    E: Fn(u32) -> Option<Vec<u8>> + Send + Sync,
    D: Fn(&[u8]) -> Option<String> + Send + Sync,
{
    fn unmappable_code_point(&self, code_point: u32) -> Option<Vec<u8>> {
        (self.on_encode)(code_point)
    }

    fn invalid_byte_sequence(&self, bytes: &[u8]) -> Option<String> {
        (self.on_decode)(bytes)
    }
}

/// What the codec does with input it cannot map.
#[derive(Clone, Default)]
pub enum SubstitutionPolicy {
    /// Abort the call with a [`CodecError`] on the first unmappable input.
    FailFast,
    /// Emit [`REPLACEMENT_BYTE`] when encoding and [`REPLACEMENT_CHAR`] when
    /// decoding, once per offending unit.
    #[default]
    Replacement,
    /// Delegate to a caller-supplied handler.
    Custom(Arc<dyn SubstitutionHandler>),
}

impl fmt::Debug for SubstitutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstitutionPolicy::FailFast => f.write_str("FailFast"),
            SubstitutionPolicy::Replacement => f.write_str("Replacement"),
            SubstitutionPolicy::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl SubstitutionPolicy {
    /// Wrap a handler value in a [`SubstitutionPolicy::Custom`].
    pub fn handler(handler: impl SubstitutionHandler + 'static) -> Self {
        SubstitutionPolicy::Custom(Arc::new(handler))
    }

    /// Build a [`SubstitutionPolicy::Custom`] from two closures, one per
    /// direction.
    pub fn custom<E, D>(on_encode: E, on_decode: D) -> Self
    where
        E: Fn(u32) -> Option<Vec<u8>> + Send + Sync + 'static,
        D: Fn(&[u8]) -> Option<String> + Send + Sync + 'static,
    {
        Self::handler(FnHandler {
            on_encode,
            on_decode,
        })
    }

    /// Handle a scalar value the encoder cannot map.
    ///
    /// Appends the substitute to `out`, or returns
    /// [`CodecError::UnmappableCodePoint`] if the policy refuses.
    pub fn on_unmappable_code_point(
        &self,
        code_point: u32,
        position: usize,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        let refused = || CodecError::UnmappableCodePoint {
            code_point,
            position,
        };
        match self {
            SubstitutionPolicy::FailFast => Err(refused()),
            SubstitutionPolicy::Replacement => {
                out.push(REPLACEMENT_BYTE);
                Ok(())
            }
            SubstitutionPolicy::Custom(handler) => {
                let bytes = handler.unmappable_code_point(code_point).ok_or_else(refused)?;
                out.extend_from_slice(&bytes);
                Ok(())
            }
        }
    }

    /// Handle a byte sequence the decoder cannot map.
    ///
    /// Appends the substitute to `out`, or returns
    /// [`CodecError::InvalidByteSequence`] if the policy refuses.
    pub fn on_invalid_byte_sequence(
        &self,
        bytes: &[u8],
        offset: usize,
        out: &mut String,
    ) -> Result<(), CodecError> {
        let refused = || CodecError::InvalidByteSequence {
            bytes: bytes.to_vec(),
            offset,
        };
        match self {
            SubstitutionPolicy::FailFast => Err(refused()),
            SubstitutionPolicy::Replacement => {
                out.push(REPLACEMENT_CHAR);
                Ok(())
            }
            SubstitutionPolicy::Custom(handler) => {
                let text = handler.invalid_byte_sequence(bytes).ok_or_else(refused)?;
                out.push_str(&text);
                Ok(())
            }
        }
    }
}
