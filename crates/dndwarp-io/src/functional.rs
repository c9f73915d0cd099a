use std::{fs::File, io::BufWriter, path::Path, time::Duration};

use dndwarp_image::{ops, Image, ImageSize};
use image::{
    codecs::gif::{GifEncoder, Repeat},
    Delay, DynamicImage, Frame, RgbImage,
};

use crate::error::IoError;

/// A decoded image, keeping whether the source carried an alpha channel.
#[derive(Clone, Debug, PartialEq)]
pub enum DecodedImage {
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
}

impl DecodedImage {
    /// The size of the decoded image.
    pub fn size(&self) -> ImageSize {
        match self {
            DecodedImage::Rgb8(img) => img.size(),
            DecodedImage::Rgba8(img) => img.size(),
        }
    }

    /// The RGB channels of the image.
    ///
    /// An alpha channel is dropped, the color channels are kept as they are.
    pub fn into_rgb8(self) -> Result<Image<u8, 3>, IoError> {
        match self {
            DecodedImage::Rgb8(img) => Ok(img),
            DecodedImage::Rgba8(img) => {
                log::warn!("dropping the alpha channel of a {} image", img.size());
                Ok(ops::take_channels::<_, 4, 3>(&img)?)
            }
        }
    }
}

/// Timing of an animated output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTiming {
    /// How long every frame is displayed.
    pub frame_delay: Duration,
    /// Whether the animation loops forever or plays once.
    pub infinite_loop: bool,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self {
            frame_delay: Duration::from_millis(100),
            infinite_loop: true,
        }
    }
}

/// Reads an image from the given file path.
///
/// The method tries to read from any image format supported by the image crate.
/// Gray and 16-bit images are converted to 8-bit RGB(A).
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// The decoded image.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<DecodedImage, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let image = if img.color().has_alpha() {
        DecodedImage::Rgba8(Image::new(size, img.into_rgba8().into_raw())?)
    } else {
        DecodedImage::Rgb8(Image::new(size, img.into_rgb8().into_raw())?)
    };

    Ok(image)
}

fn to_rgb_image(image: &Image<u8, 3>) -> Result<RgbImage, IoError> {
    let [width, height]: [u32; 2] = image.size().into();
    RgbImage::from_raw(width, height, image.as_slice().to_vec()).ok_or(
        IoError::ImageCreationError(dndwarp_image::ImageError::InvalidChannelShape(
            image.as_slice().len(),
            image.width() * image.height() * 3,
        )),
    )
}

/// Writes an RGB image to the given file path.
///
/// The format is chosen from the file extension.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &Image<u8, 3>) -> Result<(), IoError> {
    to_rgb_image(image)?.save(file_path)?;
    Ok(())
}

/// Writes a sequence of RGB frames as an animated GIF.
///
/// # Arguments
///
/// * `file_path` - The path of the GIF file.
/// * `frames` - The frames in display order, all of the same size.
/// * `timing` - The frame delay and loop policy.
pub fn write_gif_animation(
    file_path: impl AsRef<Path>,
    frames: &[Image<u8, 3>],
    timing: FrameTiming,
) -> Result<(), IoError> {
    let first = frames.first().ok_or(IoError::NoFrames)?;

    if let Some((index, frame)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| f.size() != first.size())
    {
        return Err(IoError::FrameSizeMismatch(
            index,
            frame.size(),
            first.size(),
        ));
    }

    let file = File::create(file_path)?;
    let mut encoder = GifEncoder::new(BufWriter::new(file));
    // without a repeat extension the animation plays once
    if timing.infinite_loop {
        encoder.set_repeat(Repeat::Infinite)?;
    }

    let delay = Delay::from_saturating_duration(timing.frame_delay);
    for frame in frames {
        let rgba = DynamicImage::ImageRgb8(to_rgb_image(frame)?).into_rgba8();
        encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
    }

    Ok(())
}
