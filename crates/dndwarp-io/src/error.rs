/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] dndwarp_image::ImageError),

    /// Error to decode or encode the image.
    #[error("Failed to decode or encode the image. {0}")]
    ImageCodecError(#[from] image::ImageError),

    /// Error when there is nothing to write.
    #[error("No frames to write")]
    NoFrames,

    /// Error when the frames of an animation differ in size.
    #[error("Frame {0} has size {1}, expected {2}")]
    FrameSizeMismatch(usize, dndwarp_image::ImageSize, dndwarp_image::ImageSize),
}
