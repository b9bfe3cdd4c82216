//! Converts raster images into packed, bit-depth-reduced bitmaps and renders
//! them as C headers for firmware.

pub mod encoding;
pub mod header;
pub mod render;

mod error;

pub use error::Error;
