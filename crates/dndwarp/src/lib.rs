#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use dndwarp_image as image;

#[doc(inline)]
pub use dndwarp_imgproc as imgproc;

#[doc(inline)]
pub use dndwarp_io as io;
