/// Errors raised while configuring or running the block packer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// A pixel must occupy at least one bit.
    #[error("color depth must be at least 1 bit")]
    ZeroColorDepth,
    /// A memory block must hold at least one bit.
    #[error("memory block size must be at least 1 bit")]
    ZeroMemBlock,
    /// A single pixel does not fit into one memory block.
    #[error("color depth of {color_depth} bits does not fit a {mem_block_bits}-bit memory block")]
    ColorDepthExceedsBlock {
        color_depth: u32,
        mem_block_bits: u32,
    },
    /// The pixel field is wider than the block register.
    #[error("color depth of {color_depth} bits exceeds the 64-bit limit")]
    ColorDepthTooWide { color_depth: u32 },
    /// The memory block is wider than the block register.
    #[error("memory block of {mem_block_bits} bits exceeds the 64-bit limit")]
    MemBlockTooWide { mem_block_bits: u32 },
    /// The encoded size of the image does not fit in memory.
    #[error("image of {width}x{height} pixels is too large to encode")]
    DimensionsTooLarge { width: u32, height: u32 },
}
