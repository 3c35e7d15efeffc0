//! eucjp-core: Backend-independent types for the eucjp codec.
//!
//! This crate provides the error, warning and option types shared by the
//! table loader and the codec, and the [`SubstitutionPolicy`] that decides
//! what happens to input that cannot be mapped.

pub mod error;
pub mod substitution;

pub use error::{CodecError, CodecOptions, CodecResult, CodecWarning, CodecWarningCode};
pub use substitution::{
    REPLACEMENT_BYTE, REPLACEMENT_CHAR, SubstitutionHandler, SubstitutionPolicy,
};
