#![deny(missing_docs)]
//! Image types and traits for generating and manipulating images

/// image representation for the warping pipeline.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Image operations on whole pixel grids.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
