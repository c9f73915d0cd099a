#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// path animation module.
pub mod animate;

/// error types for the warping pipeline.
pub mod error;

/// pluggable scale fields anchored at a reference point.
pub mod field;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// observer-centered geometric warps.
pub mod warp;

pub use error::WarpError;
