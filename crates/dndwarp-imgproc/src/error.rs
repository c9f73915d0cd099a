use dndwarp_image::ImageError;

use crate::parallel::ParallelError;

/// Errors that can occur while warping an image or animating a path.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WarpError {
    /// The image has no pixels along one of its dimensions.
    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Width of the image in pixels.
        width: usize,
        /// Height of the image in pixels.
        height: usize,
    },

    /// No transform was registered under the requested name.
    #[error("unknown transform kind: {0:?}")]
    UnknownTransformKind(String),

    /// A path needs at least one reference point.
    #[error("path must contain at least one reference point")]
    EmptyPath,

    /// A reference point fraction is NaN or infinite.
    #[error("reference point fraction must be finite, got {0}")]
    NonFiniteFraction(f64),

    /// A source axis does not have one coordinate per image column or row.
    #[error("axis of length {axis} does not match image dimension {image}")]
    AxisMismatch {
        /// Length of the axis.
        axis: usize,
        /// Number of pixels along the matching image dimension.
        image: usize,
    },

    /// Warping a single frame of a path failed.
    #[error("frame {index} failed: {source}")]
    Frame {
        /// Position of the failing reference point in the path.
        index: usize,
        /// The underlying error.
        source: Box<WarpError>,
    },

    /// Error from the image container.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error from the parallel executor.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
