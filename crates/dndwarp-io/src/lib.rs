#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image reading and writing functions.
///
/// Reads any raster format supported by the `image` crate and writes stills or
/// looping GIF animations.
pub mod functional;

/// Naming of the files written for a warped input.
pub mod naming;

pub use crate::error::IoError;
