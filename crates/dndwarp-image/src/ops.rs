use crate::{Image, ImageDtype, ImageError};

/// Keep the first `C_OUT` channels of every pixel and drop the rest.
///
/// This is how an RGBA grid is turned into the RGB grid the warping engine works
/// on. The extra channels are discarded, not blended.
///
/// # Errors
///
/// Returns [`ImageError::ChannelCountMismatch`] if `C_OUT > C_IN`.
///
/// Example:
///
/// ```
/// use dndwarp_image::{Image, ImageSize};
/// use dndwarp_image::ops::take_channels;
///
/// let rgba = Image::<u8, 4>::new(
///   ImageSize {
///     width: 1,
///     height: 1,
///   },
///   vec![1, 2, 3, 255],
/// ).unwrap();
///
/// let rgb = take_channels::<_, 4, 3>(&rgba).unwrap();
/// assert_eq!(rgb.as_slice(), &[1, 2, 3]);
/// ```
pub fn take_channels<T, const C_IN: usize, const C_OUT: usize>(
    src: &Image<T, C_IN>,
) -> Result<Image<T, C_OUT>, ImageError>
where
    T: Copy,
{
    if C_OUT > C_IN {
        return Err(ImageError::ChannelCountMismatch(C_OUT, C_IN));
    }

    let data = src
        .as_slice()
        .chunks_exact(C_IN)
        .flat_map(|pixel| pixel[..C_OUT].iter().copied())
        .collect();

    Image::new(src.size(), data)
}

/// Convert a float image into another pixel type via [`ImageDtype::from_f32`].
///
/// For `u8` the values are rounded to nearest and clamped to `0..=255`, so
/// `127.5` becomes `128` rather than being truncated.
pub fn convert<T, const C: usize>(src: &Image<f32, C>) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
{
    let data = src.as_slice().iter().map(|&x| T::from_f32(x)).collect();
    Image::new(src.size(), data)
}
