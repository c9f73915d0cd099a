//! Observer-centered warps.
//!
//! For an observer at `(x0, y0)` every output pixel `(X, Y)` samples the source
//! image at `((X - x0) / s, (Y - y0) / s)` relative to the observer, where `s` is
//! the value of a [`TransformationField`] at that pixel. With the `"dnd"` field,
//! pixels far from the observer along the diagonals are pulled inward more than
//! pixels along the axes, giving a square-shaped distortion anchored at the
//! observer.
//!
//! Only three channels are warped. Callers holding RGBA data must drop alpha
//! first (see `dndwarp_image::ops::take_channels`).
//!
//! # Example
//!
//! ```
//! use dndwarp_image::{Image, ImageSize};
//! use dndwarp_imgproc::field::ReferencePoint;
//! use dndwarp_imgproc::warp::WarpEngine;
//!
//! let src = Image::<f32, 3>::from_size_val(ImageSize { width: 8, height: 8 }, 1.0).unwrap();
//! let engine = WarpEngine::new("dnd").unwrap();
//!
//! let reference = ReferencePoint::from_fractions(src.size(), 0.5, 0.5).unwrap();
//! let frame = engine.warp(&src, reference).unwrap();
//!
//! assert_eq!(frame.size(), src.size());
//! ```

use dndwarp_image::{Image, ImageError};

use crate::error::WarpError;
use crate::field::{FieldRegistry, ReferencePoint, TransformationField};
use crate::interpolation::grid::{CoordinateGrid, PositionGrid};
use crate::interpolation::remap_regular_grid;

/// Warp `src` around `reference` with the given scale field.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, 3).
/// * `field` - The scale field of the warp.
/// * `reference` - The observer position in pixels.
///
/// # Returns
///
/// A new image with the size of `src`. Pixels that map outside the source are 0.
///
/// # Errors
///
/// [`WarpError::InvalidDimensions`] if `src` has no pixels.
pub fn warp_observer(
    src: &Image<f32, 3>,
    field: &dyn TransformationField,
    reference: ReferencePoint,
) -> Result<Image<f32, 3>, WarpError> {
    let grid = PositionGrid::new(src.size())?;
    let (x0, y0) = (reference.x as f32, reference.y as f32);

    log::debug!(
        "warping {} with {:?} field at x0: {} y0: {}",
        src.size(),
        field.name(),
        reference.x,
        reference.y
    );

    // the column axis is paired with the row grid: one scale per (column, row)
    let (cols, xs, ys) = (src.cols(), grid.x.as_slice(), grid.map_y.as_slice());
    let scale = CoordinateGrid::from_fn(src.rows(), cols, |r, c| {
        field.evaluate([xs[c], ys[r * cols + c]], reference)
    });

    // source samples sit at their offset from the observer
    let x_axis = grid.x.shifted(x0);
    let y_axis = grid.y.shifted(y0);

    let query = |map: &CoordinateGrid, offset: f32| {
        map.zip_map(&scale, |v, s| (v - offset) / s).ok_or_else(|| {
            ImageError::InvalidImageSize(map.cols(), map.rows(), scale.cols(), scale.rows())
        })
    };
    let map_x = query(&grid.map_x, x0)?;
    let map_y = query(&grid.map_y, y0)?;

    remap_regular_grid(src, &x_axis, &y_axis, &map_x, &map_y)
}

/// A warp bound to one transformation field.
pub struct WarpEngine {
    field: Box<dyn TransformationField>,
}

impl WarpEngine {
    /// Create an engine for the field registered as `kind` in the default registry.
    ///
    /// # Errors
    ///
    /// [`WarpError::UnknownTransformKind`] if `kind` is not registered.
    pub fn new(kind: &str) -> Result<Self, WarpError> {
        Self::with_registry(&FieldRegistry::default(), kind)
    }

    /// Create an engine for the field registered as `kind` in `registry`.
    pub fn with_registry(registry: &FieldRegistry, kind: &str) -> Result<Self, WarpError> {
        Ok(Self {
            field: registry.create(kind)?,
        })
    }

    /// The name of the field used by the engine.
    pub fn kind(&self) -> &'static str {
        self.field.name()
    }

    /// Produce one warped frame of `src` for an observer at `reference`.
    pub fn warp(
        &self,
        src: &Image<f32, 3>,
        reference: ReferencePoint,
    ) -> Result<Image<f32, 3>, WarpError> {
        warp_observer(src, self.field.as_ref(), reference)
    }
}

impl std::fmt::Debug for WarpEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WarpEngine")
            .field("kind", &self.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ChebyshevField;
    use approx::assert_relative_eq;
    use dndwarp_image::ImageSize;

    fn gray(width: usize, height: usize) -> Result<Image<f32, 3>, ImageError> {
        Image::from_size_val(ImageSize { width, height }, 128.0)
    }

    #[test]
    fn warp_keeps_shape() -> Result<(), WarpError> {
        let engine = WarpEngine::new("dnd")?;
        for (w, h) in [(1, 1), (5, 3), (3, 7)] {
            let src = gray(w, h)?;
            for (fx, fy) in [(0.0, 0.0), (0.5, 0.5), (1.0, 1.0), (-2.0, 3.0)] {
                let reference = ReferencePoint::from_fractions(src.size(), fx, fy)?;
                let frame = engine.warp(&src, reference)?;
                assert_eq!(frame.size(), src.size());
                assert_eq!(frame.num_channels(), 3);
            }
        }
        Ok(())
    }

    #[test]
    fn warp_uniform_center() -> Result<(), WarpError> {
        let src = gray(4, 4)?;
        let reference = ReferencePoint::from_fractions(src.size(), 0.5, 0.5)?;
        assert_eq!(reference, ReferencePoint { x: 2, y: 2 });

        let frame = WarpEngine::new("dnd")?.warp(&src, reference)?;

        // query offsets scaled by 1/s must stay within [-2, 1] on both axes
        #[rustfmt::skip]
        let inside = [
            false, false, true,  false,
            false, true,  true,  false,
            true,  true,  true,  true,
            false, false, true,  false,
        ];

        for (i, pixel) in frame.as_slice().chunks_exact(3).enumerate() {
            for &v in pixel {
                if inside[i] {
                    assert_relative_eq!(v, 128.0, epsilon = 1e-3);
                } else {
                    assert_eq!(v, 0.0, "pixel {i} should map outside the source");
                }
            }
        }

        Ok(())
    }

    #[test]
    fn warp_reference_pixel_is_unchanged() -> Result<(), WarpError> {
        let data = (0..5 * 5 * 3).map(|v| v as f32).collect::<Vec<_>>();
        let src = Image::<f32, 3>::new([5, 5].into(), data)?;
        let reference = ReferencePoint { x: 1, y: 3 };

        let frame = warp_observer(&src, &ChebyshevField, reference)?;
        for ch in 0..3 {
            assert_eq!(frame.get_pixel(1, 3, ch)?, src.get_pixel(1, 3, ch)?);
        }
        // pixels on the observer's row and column are not scaled
        assert_eq!(frame.get_pixel(4, 3, 0)?, src.get_pixel(4, 3, 0)?);
        assert_eq!(frame.get_pixel(1, 0, 2)?, src.get_pixel(1, 0, 2)?);

        Ok(())
    }

    #[test]
    fn warp_diagonal_pulls_inward() -> Result<(), WarpError> {
        // value equals the column index, so a sample reveals where it came from
        let (w, h) = (9, 9);
        let data = (0..w * h)
            .flat_map(|i| {
                let c = (i % w) as f32;
                [c, c, c]
            })
            .collect::<Vec<_>>();
        let src = Image::<f32, 3>::new([w, h].into(), data)?;
        let reference = ReferencePoint { x: 4, y: 4 };

        let frame = warp_observer(&src, &ChebyshevField, reference)?;

        // (6, 6) is 2 pixels off diagonally: sampled at offset 2 / (√2/2) = 2√2
        let v = *frame.get_pixel(6, 6, 0)?;
        assert_relative_eq!(v, 4.0 + 2.0 * std::f32::consts::SQRT_2, epsilon = 1e-4);

        Ok(())
    }

    #[test]
    fn warp_rejects_empty_image() -> Result<(), WarpError> {
        let src = Image::<f32, 3>::new([0, 3].into(), vec![])?;
        let res = WarpEngine::new("dnd")?.warp(&src, ReferencePoint { x: 0, y: 0 });
        assert_eq!(
            res,
            Err(WarpError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        Ok(())
    }

    #[test]
    fn unknown_engine_kind() {
        assert!(matches!(
            WarpEngine::new("polar"),
            Err(WarpError::UnknownTransformKind(kind)) if kind == "polar"
        ));
    }
}
