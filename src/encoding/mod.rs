use byteorder::{ByteOrder, LittleEndian};
use image::DynamicImage;
use log::{debug, info};

pub use config::{EncodingConfig, ScanDirection, MAX_BITS};
pub use decode::decode;
pub use error::EncodingError;
pub use layout::BlockLayout;
pub use quantize::{field_mask, remap, Quantizer, Sample, CHANNEL_MAX};
pub use traits::{Channel, SampleSource, ToSample};

mod config;
mod decode;
mod error;
mod layout;
mod quantize;
mod traits;

/// A bitmap packed into memory blocks, together with the configuration that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBitmap {
    width: u32,
    height: u32,
    config: EncodingConfig,
    data: Vec<u8>,
}

impl EncodedBitmap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn config(&self) -> &EncodingConfig {
        &self.config
    }

    /// The packed blocks, concatenated in scan order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// The state shared by every scan line of one encoding pass.
struct LinePacker<'a, S: ?Sized> {
    source: &'a S,
    direction: ScanDirection,
    layout: BlockLayout,
    quantizer: Quantizer,
    line_len: u32,
}

impl<S> LinePacker<'_, S>
where
    S: SampleSource + ?Sized,
{
    /// Packs scan line `line` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is not exactly the encoded size of one line.
    fn pack(&self, line: u32, out: &mut [u8]) {
        let pixels = self.layout.pixels_per_block();
        let bytes = self.layout.bytes_per_block();
        let mut offset = 0;

        for block in 0..self.layout.blocks_per_line(self.line_len) {
            let first = block * pixels;
            // Slots past the end of the line are left zeroed.
            let register = (0..pixels)
                .take_while(|&slot| slot < self.line_len - first)
                .fold(0u64, |register, slot| {
                    let (x, y) = self.direction.coordinates(line, first + slot);
                    let value = self.quantizer.quantize(self.source.sample(x, y));
                    register | self.layout.place(slot, value)
                });

            let end = offset + bytes;
            assert!(
                end <= out.len(),
                "block {} of line {} overruns the {}-byte line buffer",
                block,
                line,
                out.len()
            );
            LittleEndian::write_uint(&mut out[offset..end], register, bytes);
            offset = end;
        }

        assert_eq!(offset, out.len(), "line {} was not filled", line);
    }
}

/// Quantizes every pixel of `source` and packs it into memory blocks.
pub fn encode<S>(source: &S, config: &EncodingConfig) -> Result<EncodedBitmap, EncodingError>
where
    S: SampleSource + ?Sized,
{
    let (width, height) = source.dimensions();
    let too_large = || EncodingError::DimensionsTooLarge { width, height };

    let layout = BlockLayout::new(config);
    let direction = config.scan_direction();
    let (line_len, _) = direction.line_geometry(width, height);
    let line_size = layout.line_size(line_len).ok_or_else(too_large)?;
    let total_size = layout
        .encoded_size(direction, width, height)
        .ok_or_else(too_large)?;

    debug!(
        "{} pixels per block, {} bytes per block, {} bytes per line",
        layout.pixels_per_block(),
        layout.bytes_per_block(),
        line_size
    );

    let mut data = vec![0u8; total_size];
    if line_size > 0 {
        let packer = LinePacker {
            source,
            direction,
            layout,
            quantizer: Quantizer::new(config),
            line_len,
        };
        for (line, out) in data.chunks_exact_mut(line_size).enumerate() {
            packer.pack(line as u32, out);
        }
    }

    info!(
        "Encoded {}x{} image into {} bytes",
        width,
        height,
        data.len()
    );

    Ok(EncodedBitmap {
        width,
        height,
        config: *config,
        data,
    })
}

/// Encodes a decoded image without losing channel precision.
pub fn encode_image(
    image: &DynamicImage,
    config: &EncodingConfig,
) -> Result<EncodedBitmap, EncodingError> {
    match image {
        DynamicImage::ImageLuma8(luma8) => {
            info!("Encoding 8-bit grayscale image...");
            encode(luma8, config)
        }
        DynamicImage::ImageLumaA8(luma_a8) => {
            info!("Encoding 8-bit grayscale image with alpha...");
            encode(luma_a8, config)
        }
        DynamicImage::ImageRgb8(rgb8) => {
            info!("Encoding 8-bit rgb image...");
            encode(rgb8, config)
        }
        DynamicImage::ImageRgba8(rgba8) => {
            info!("Encoding 8-bit rgba image...");
            encode(rgba8, config)
        }
        DynamicImage::ImageLuma16(luma16) => {
            info!("Encoding 16-bit grayscale image...");
            encode(luma16, config)
        }
        DynamicImage::ImageLumaA16(luma_a16) => {
            info!("Encoding 16-bit grayscale image with alpha...");
            encode(luma_a16, config)
        }
        DynamicImage::ImageRgb16(rgb16) => {
            info!("Encoding 16-bit rgb image...");
            encode(rgb16, config)
        }
        DynamicImage::ImageRgba16(rgba16) => {
            info!("Encoding 16-bit rgba image...");
            encode(rgba16, config)
        }
        other => {
            info!("Converting {:?} image to 16-bit rgba...", other.color());
            encode(&other.to_rgba16(), config)
        }
    }
}
