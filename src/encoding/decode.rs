use super::layout::BlockLayout;
use super::quantize::{field_mask, remap};
use super::EncodedBitmap;
use byteorder::{ByteOrder, LittleEndian};
use image::{GrayImage, Luma};

/// Unpacks an encoded bitmap into an 8-bit grayscale image.
///
/// Every field is scaled from `[0, 2^depth - 1]` back to `[0, 255]`. The
/// stored values are shown as they are, so an inverted bitmap decodes to an
/// inverted image.
pub fn decode(bitmap: &EncodedBitmap) -> GrayImage {
    let config = bitmap.config();
    let layout = BlockLayout::new(config);
    let direction = config.scan_direction();
    let (width, height) = (bitmap.width(), bitmap.height());
    let (line_len, line_count) = direction.line_geometry(width, height);
    let max = field_mask(config.color_depth());

    let pixels = layout.pixels_per_block();
    let bytes = layout.bytes_per_block();
    let blocks_per_line = layout.blocks_per_line(line_len);
    let positions = (0..line_count)
        .flat_map(|line| (0..blocks_per_line).map(move |block| (line, block * pixels)));

    let mut image = GrayImage::new(width, height);
    for ((line, first), chunk) in positions.zip(bitmap.data().chunks_exact(bytes)) {
        let register = LittleEndian::read_uint(chunk, bytes);
        for slot in (0..pixels).take_while(|&slot| slot < line_len - first) {
            let value = layout.extract(slot, register);
            let level = remap(value.into(), 0, max.into(), 0, u8::MAX.into());
            let (x, y) = direction.coordinates(line, first + slot);
            image.put_pixel(x, y, Luma([level as u8]));
        }
    }
    image
}
