use super::config::{EncodingConfig, ScanDirection};
use super::quantize::field_mask;

/// Where each pixel lands inside a memory block, and how large the blocks are.
///
/// Pixels fill a block from its most significant bits downwards: slot `k`
/// sits at shift `mem_block_bits - (k + 1) * color_depth`. When the depth does
/// not divide the block size, the last slot only has room for the high bits of
/// its field and the low bits are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    color_depth: u32,
    mem_block_bits: u32,
    pixels_per_block: u32,
    bytes_per_block: usize,
}

impl BlockLayout {
    pub fn new(config: &EncodingConfig) -> BlockLayout {
        let color_depth = config.color_depth();
        let mem_block_bits = config.mem_block_bits();
        BlockLayout {
            color_depth,
            mem_block_bits,
            pixels_per_block: mem_block_bits.div_ceil(color_depth),
            bytes_per_block: mem_block_bits.div_ceil(8) as usize,
        }
    }

    pub fn pixels_per_block(&self) -> u32 {
        self.pixels_per_block
    }

    pub fn bytes_per_block(&self) -> usize {
        self.bytes_per_block
    }

    /// Number of blocks needed to hold a scan line of `line_len` pixels.
    pub fn blocks_per_line(&self, line_len: u32) -> u32 {
        line_len.div_ceil(self.pixels_per_block)
    }

    /// Number of bytes a scan line of `line_len` pixels encodes to.
    pub fn line_size(&self, line_len: u32) -> Option<usize> {
        (self.blocks_per_line(line_len) as usize).checked_mul(self.bytes_per_block)
    }

    /// Size in bytes of a whole encoded image, or `None` if it overflows `usize`.
    pub fn encoded_size(&self, direction: ScanDirection, width: u32, height: u32) -> Option<usize> {
        let (line_len, line_count) = direction.line_geometry(width, height);
        self.line_size(line_len)?.checked_mul(line_count as usize)
    }

    /// Moves a quantized value into its slot of the block register.
    pub fn place(&self, slot: u32, value: u64) -> u64 {
        let end = (slot + 1) * self.color_depth;
        if end <= self.mem_block_bits {
            value << (self.mem_block_bits - end)
        } else {
            value >> (end - self.mem_block_bits)
        }
    }

    /// Reads the value stored in a slot of the block register.
    ///
    /// A truncated last slot is returned aligned to the full color depth, with
    /// the dropped low bits set to zero.
    pub fn extract(&self, slot: u32, register: u64) -> u64 {
        let end = (slot + 1) * self.color_depth;
        if end <= self.mem_block_bits {
            (register >> (self.mem_block_bits - end)) & field_mask(self.color_depth)
        } else {
            let dropped = end - self.mem_block_bits;
            (register & field_mask(self.color_depth - dropped)) << dropped
        }
    }
}
