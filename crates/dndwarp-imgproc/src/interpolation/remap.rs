use crate::error::WarpError;
use crate::parallel;

use super::bilinear::bilinear_interpolation;
use super::grid::{Axis, CoordinateGrid};
use dndwarp_image::{Image, ImageError, ImageSize};

/// Resample an image on a regular grid at arbitrary query coordinates.
///
/// The source pixel at `(row, col)` is placed at `(x_axis[col], y_axis[row])`.
/// For every cell of the query grids a value is reconstructed by bilinear
/// interpolation, channel by channel. Queries outside the extent of the axes
/// are filled with 0.
///
/// # Arguments
///
/// * `src` - The input image container with shape (height, width, C).
/// * `x_axis` - The column coordinates of the source pixels.
/// * `y_axis` - The row coordinates of the source pixels.
/// * `map_x` - The x coordinates of the pixels to interpolate.
/// * `map_y` - The y coordinates of the pixels to interpolate.
///
/// # Returns
///
/// An image with the shape of the query grids.
///
/// # Errors
///
/// * The axes must have one coordinate per source column and row.
/// * The mapx and mapy must have the same size.
pub fn remap_regular_grid<const C: usize>(
    src: &Image<f32, C>,
    x_axis: &Axis,
    y_axis: &Axis,
    map_x: &CoordinateGrid,
    map_y: &CoordinateGrid,
) -> Result<Image<f32, C>, WarpError> {
    if x_axis.len() != src.cols() {
        return Err(WarpError::AxisMismatch {
            axis: x_axis.len(),
            image: src.cols(),
        });
    }

    if y_axis.len() != src.rows() {
        return Err(WarpError::AxisMismatch {
            axis: y_axis.len(),
            image: src.rows(),
        });
    }

    if map_x.shape() != map_y.shape() {
        return Err(ImageError::InvalidImageSize(
            map_x.cols(),
            map_x.rows(),
            map_y.cols(),
            map_y.rows(),
        )
        .into());
    }

    let mut dst = Image::<f32, C>::from_size_val(
        ImageSize {
            width: map_x.cols(),
            height: map_x.rows(),
        },
        0.0,
    )?;

    if dst.cols() == 0 {
        return Ok(dst);
    }

    let (xs, ys) = (x_axis.as_slice(), y_axis.as_slice());

    // parallelize the remap operation by rows
    parallel::par_iter_rows_resample(&mut dst, map_x, map_y, |&x, &y, dst_pixel| {
        dst_pixel.copy_from_slice(&bilinear_interpolation(src, xs, ys, x, y));
    });

    Ok(dst)
}
