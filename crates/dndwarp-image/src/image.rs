use crate::error::ImageError;

/// Width and height of a pixel grid.
///
/// # Examples
///
/// ```
/// use dndwarp_image::ImageSize;
///
/// let size = ImageSize::from([640, 480]);
/// assert_eq!(size.width, 640);
/// assert_eq!(size.to_string(), "ImageSize { width: 640, height: 480 }");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from([width, height]: [usize; 2]) -> Self {
        ImageSize { width, height }
    }
}

impl From<ImageSize> for [u32; 2] {
    fn from(size: ImageSize) -> Self {
        [size.width as u32, size.height as u32]
    }
}

/// Pixel types a warped frame can be quantized to.
pub trait ImageDtype: Copy + Default + Send + Sync {
    /// Convert one float sample.
    fn from_f32(x: f32) -> Self;
}

impl ImageDtype for f32 {
    fn from_f32(x: f32) -> Self {
        x
    }
}

impl ImageDtype for u8 {
    /// Rounds to the nearest integer, then saturates to `0..=255`.
    fn from_f32(x: f32) -> Self {
        x.round().clamp(0.0, 255.0) as u8
    }
}

/// A pixel grid of `CHANNELS` samples per pixel.
///
/// Samples are stored row by row, pixel by pixel, i.e. in (H, W, C) order.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Wrap `data` as an image of `size`.
    ///
    /// # Errors
    ///
    /// [`ImageError::InvalidChannelShape`] unless `data` holds exactly
    /// `width * height * CHANNELS` samples.
    ///
    /// # Examples
    ///
    /// ```
    /// use dndwarp_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new([4, 2].into(), vec![0; 4 * 2 * 3]).unwrap();
    /// assert_eq!(image.rows(), 2);
    ///
    /// assert!(Image::<u8, 3>::new([4, 2].into(), vec![0; 5]).is_err());
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        let expected = size.width * size.height * CHANNELS;
        if data.len() != expected {
            return Err(ImageError::InvalidChannelShape(data.len(), expected));
        }

        Ok(Self { size, data })
    }

    /// An image of `size` with every sample set to `val`.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        Image::new(size, vec![val; size.width * size.height * CHANNELS])
    }

    /// Convert every sample to `U`.
    ///
    /// # Errors
    ///
    /// [`ImageError::CastError`] if a sample is not representable in `U`.
    pub fn cast<U>(&self) -> Result<Image<U, CHANNELS>, ImageError>
    where
        U: num_traits::NumCast,
        T: num_traits::NumCast + Copy,
    {
        let data = self
            .data
            .iter()
            .map(|&x| {
                U::from(x).ok_or_else(|| ImageError::CastError(std::any::type_name::<U>().into()))
            })
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, data)
    }

    /// Size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// Same as [`Image::cols`].
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Same as [`Image::rows`].
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Samples per pixel.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// All samples in (H, W, C) order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// All samples in (H, W, C) order, mutable.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// The sample of channel `ch` at column `x`, row `y`.
    pub fn get_pixel(&self, x: usize, y: usize, ch: usize) -> Result<&T, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }

        if ch >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(ch, CHANNELS));
        }

        Ok(&self.data[(y * self.width() + x) * CHANNELS + ch])
    }
}
