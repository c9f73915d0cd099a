use dndwarp_image::Image;

/// Locate `q` on an ascending axis.
///
/// Returns the indices of the two samples bracketing `q` and the fractional
/// position between them, or `None` when `q` lies outside the axis (or is NaN).
fn locate(axis: &[f32], q: f32) -> Option<(usize, usize, f32)> {
    let (first, last) = (*axis.first()?, *axis.last()?);

    // the negated form also rejects NaN
    if !(q >= first && q <= last) {
        return None;
    }

    let n = axis.len();
    if n == 1 {
        return Some((0, 0, 0.0));
    }

    let i0 = axis.partition_point(|&a| a <= q).saturating_sub(1).min(n - 2);
    let i1 = i0 + 1;
    let frac = (q - axis[i0]) / (axis[i1] - axis[i0]);

    Some((i0, i1, frac))
}

/// Kernel for bilinear interpolation over a rectilinear grid.
///
/// The pixel at `(row, col)` of `image` sits at coordinates
/// `(x_axis[col], y_axis[row])`. Every channel is interpolated independently
/// from the four samples surrounding `(u, v)`.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `x_axis` - Ascending column coordinates, one per image column.
/// * `y_axis` - Ascending row coordinates, one per image row.
/// * `u` - The x coordinate of the point to interpolate.
/// * `v` - The y coordinate of the point to interpolate.
///
/// # Returns
///
/// The interpolated pixel values, or 0 in every channel when `(u, v)` is
/// outside the grid.
pub fn bilinear_interpolation<const C: usize>(
    image: &Image<f32, C>,
    x_axis: &[f32],
    y_axis: &[f32],
    u: f32,
    v: f32,
) -> [f32; C] {
    let mut pixel = [0.0; C];

    let (Some((iu0, iu1, frac_u)), Some((iv0, iv1, frac_v))) =
        (locate(x_axis, u), locate(y_axis, v))
    else {
        return pixel;
    };

    let cols = image.cols();

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let base00 = (iv0 * cols + iu0) * C;
    let base01 = (iv0 * cols + iu1) * C;
    let base10 = (iv1 * cols + iu0) * C;
    let base11 = (iv1 * cols + iu1) * C;

    let data = image.as_slice();

    let p00 = &data[base00..base00 + C];
    let p01 = &data[base01..base01 + C];
    let p10 = &data[base10..base10 + C];
    let p11 = &data[base11..base11 + C];

    for k in 0..C {
        pixel[k] = p00[k] * w00 + p01[k] * w01 + p10[k] * w10 + p11[k] * w11;
    }

    pixel
}
