//! Error and warning types for the eucjp codec.
//!
//! Provides [`CodecError`] for failures that abort an encode or decode call,
//! [`CodecWarning`] for substitutions that let the call continue,
//! [`CodecResult`] for pairing an output with collected warnings, and
//! [`CodecOptions`] for configuring substitution, limits and warning behavior.

use std::fmt;

use crate::substitution::SubstitutionPolicy;

/// Fatal error types for encoding and decoding.
///
/// Any of these aborts the current call as a whole; no partial output is
/// returned.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// A scalar value has no EUC-JP representation and the substitution
    /// policy refused to replace it.
    UnmappableCodePoint {
        /// The scalar value (or unpaired surrogate) that could not be encoded.
        code_point: u32,
        /// Position of the value in the input: byte offset for `&str`
        /// input, code unit index for UTF-16 input.
        position: usize,
    },
    /// A byte sequence is not valid EUC-JP and the substitution policy
    /// refused to replace it.
    InvalidByteSequence {
        /// The offending bytes.
        bytes: Vec<u8>,
        /// Byte offset of the first offending byte.
        offset: usize,
    },
    /// The code tables could not be built.
    TableLoad(String),
    /// A configured resource limit was exceeded.
    ResourceLimitExceeded {
        /// Name of the limit that was exceeded (e.g., "max_input_bytes").
        limit_name: String,
        /// The configured limit value.
        limit_value: usize,
        /// The actual value that exceeded the limit.
        actual_value: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::UnmappableCodePoint {
                code_point,
                position,
            } => write!(
                f,
                "U+{code_point:04X} at position {position} cannot be encoded as EUC-JP"
            ),
            CodecError::InvalidByteSequence { bytes, offset } => {
                write!(f, "invalid EUC-JP byte sequence [")?;
                write_hex_bytes(f, bytes)?;
                write!(f, "] at offset {offset}")
            }
            CodecError::TableLoad(msg) => write!(f, "table load error: {msg}"),
            CodecError::ResourceLimitExceeded {
                limit_name,
                limit_value,
                actual_value,
            } => write!(
                f,
                "resource limit exceeded: {limit_name} (limit: {limit_value}, actual: {actual_value})"
            ),
        }
    }
}

impl std::error::Error for CodecError {}

fn write_hex_bytes(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{byte:02X}")?;
    }
    Ok(())
}

/// Machine-readable warning code for categorizing substitutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CodecWarningCode {
    /// A scalar value had no table entry and was substituted while encoding.
    UnmappableCodePoint,
    /// A byte or byte pair was not a valid sequence and was substituted
    /// while decoding.
    InvalidByteSequence,
    /// The input ended in the middle of a multi-byte sequence.
    TruncatedSequence,
}

impl CodecWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecWarningCode::UnmappableCodePoint => "UNMAPPABLE_CODE_POINT",
            CodecWarningCode::InvalidByteSequence => "INVALID_BYTE_SEQUENCE",
            CodecWarningCode::TruncatedSequence => "TRUNCATED_SEQUENCE",
        }
    }
}

impl fmt::Display for CodecWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A substitution performed during an encode or decode call.
///
/// Warnings are only produced when the substitution policy chose to replace
/// the offending input; refusals become a [`CodecError`] instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodecWarning {
    /// Machine-readable warning code.
    pub code: CodecWarningCode,
    /// Position of the offending input (byte offset for decoding and for
    /// `&str` input, code unit index for UTF-16 input).
    pub offset: usize,
    /// The offending bytes, for decode warnings.
    pub bytes: Vec<u8>,
    /// The offending scalar value, for encode warnings.
    pub code_point: Option<u32>,
}

impl CodecWarning {
    /// Warning for a scalar value that could not be encoded.
    pub fn unmappable(code_point: u32, position: usize) -> Self {
        Self {
            code: CodecWarningCode::UnmappableCodePoint,
            offset: position,
            bytes: Vec::new(),
            code_point: Some(code_point),
        }
    }

    /// Warning for a byte sequence that could not be decoded.
    pub fn invalid_sequence(bytes: &[u8], offset: usize) -> Self {
        Self {
            code: CodecWarningCode::InvalidByteSequence,
            offset,
            bytes: bytes.to_vec(),
            code_point: None,
        }
    }

    /// Warning for a multi-byte sequence cut off by the end of the input.
    pub fn truncated(bytes: &[u8], offset: usize) -> Self {
        Self {
            code: CodecWarningCode::TruncatedSequence,
            offset,
            bytes: bytes.to_vec(),
            code_point: None,
        }
    }

    /// Convert this warning into the [`CodecError`] a fail-fast policy
    /// would have raised for the same input.
    pub fn to_error(&self) -> CodecError {
        match self.code_point {
            Some(code_point) => CodecError::UnmappableCodePoint {
                code_point,
                position: self.offset,
            },
            None => CodecError::InvalidByteSequence {
                bytes: self.bytes.clone(),
                offset: self.offset,
            },
        }
    }
}

impl fmt::Display for CodecWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.code)?;
        match self.code_point {
            Some(cp) => write!(f, "U+{cp:04X} substituted at position {}", self.offset),
            None => {
                f.write_str("[")?;
                write_hex_bytes(f, &self.bytes)?;
                write!(f, "] substituted at offset {}", self.offset)
            }
        }
    }
}

/// Result wrapper that pairs a value with collected warnings.
#[derive(Debug, Clone)]
pub struct CodecResult<T> {
    /// The encoded or decoded value.
    pub value: T,
    /// Substitutions performed while producing the value.
    pub warnings: Vec<CodecWarning>,
}

impl<T> CodecResult<T> {
    /// Create a result with no warnings.
    pub fn ok(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Create a result with warnings.
    pub fn with_warnings(value: T, warnings: Vec<CodecWarning>) -> Self {
        Self { value, warnings }
    }

    /// Returns true if there are no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Transform the value while preserving warnings.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CodecResult<U> {
        CodecResult {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// Options controlling codec behavior.
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// What to do with unmappable code points and invalid byte sequences
    /// (default: [`SubstitutionPolicy::Replacement`]).
    pub substitution: SubstitutionPolicy,
    /// Whether to collect warnings for each substitution (default: true).
    pub collect_warnings: bool,
    /// Maximum input size in bytes accepted by a single call
    /// (default: None = no limit).
    pub max_input_bytes: Option<usize>,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            substitution: SubstitutionPolicy::Replacement,
            collect_warnings: true,
            max_input_bytes: None,
        }
    }
}

impl CodecOptions {
    /// Options that abort on the first unmappable input.
    pub fn strict() -> Self {
        Self {
            substitution: SubstitutionPolicy::FailFast,
            ..Self::default()
        }
    }

    /// Check an input length against [`max_input_bytes`](Self::max_input_bytes).
    pub fn check_input_len(&self, len: usize) -> Result<(), CodecError> {
        match self.max_input_bytes {
            Some(limit) if len > limit => Err(CodecError::ResourceLimitExceeded {
                limit_name: "max_input_bytes".to_string(),
                limit_value: limit,
                actual_value: len,
            }),
            _ => Ok(()),
        }
    }
}
