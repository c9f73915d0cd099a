//! Grid construction and pixel interpolation for geometric warps.
//!
//! # Building blocks
//!
//! - [`grid`]: pixel axes and per-pixel coordinate grids of an image
//! - [`bilinear_interpolation`]: per-channel bilinear kernel over a rectilinear grid
//! - [`remap_regular_grid`]: resample a whole image at arbitrary query coordinates
//!
//! Queries that fall outside the source grid resample to 0 in every channel.

mod bilinear;

/// Grid generation and coordinate mapping utilities.
///
/// Functions for generating coordinate meshgrids used in image warping
/// and transformation operations.
pub mod grid;

mod remap;

pub use bilinear::bilinear_interpolation;
pub use remap::remap_regular_grid;
