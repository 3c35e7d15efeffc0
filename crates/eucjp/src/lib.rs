//! eucjp: Encode and decode EUC-JP text as specified by the WHATWG Encoding
//! Standard.
//!
//! This is the public API facade crate. It re-exports types from eucjp-core
//! and uses eucjp-tables for the JIS X 0208 / JIS X 0212 lookup tables.
//!
//! # Architecture
//!
//! - **eucjp-core**: errors, warnings, options and substitution policies
//! - **eucjp-tables**: index data loading and the immutable code tables
//! - **eucjp** (this crate): [`Encoder`], [`Decoder`] and the [`EucJp`] codec
//!
//! # Example
//!
//! ```
//! use eucjp::{CodecOptions, EucJp};
//!
//! assert_eq!(eucjp::decode(&[0xA4, 0xA2, 0x8E, 0xB1]).unwrap(), "あｱ");
//!
//! let strict = EucJp::new().unwrap().options(CodecOptions::strict());
//! assert!(strict.encode("\u{20AC}").is_err());
//! ```

pub mod codec;
pub mod decoder;
pub mod encoder;

pub use codec::{EucJp, TextCodec};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use eucjp_core::{
    CodecError, CodecOptions, CodecResult, CodecWarning, CodecWarningCode, REPLACEMENT_BYTE,
    REPLACEMENT_CHAR, SubstitutionHandler, SubstitutionPolicy,
};
pub use eucjp_tables::{
    CodeTableLoader, CodeTables, DataSource, DirectorySource, EmbeddedSource, StrSource, Table,
    TableLoadError,
};

pub use eucjp_core;
pub use eucjp_tables;

/// Encode `text` with the default codec (embedded tables, replacement
/// substitution).
pub fn encode(text: &str) -> Result<Vec<u8>, CodecError> {
    EucJp::new()?.encode(text)
}

/// Decode `bytes` with the default codec (embedded tables, replacement
/// substitution).
pub fn decode(bytes: &[u8]) -> Result<String, CodecError> {
    EucJp::new()?.decode(bytes)
}
